//! Lower-bound cost estimates.
//!
//! All heuristics are pure functions of the state. [`manhattan`] is
//! admissible and consistent on a uniform-cost 4-connected grid.
//! [`approx_spanning`] is an empirical estimate: it is not proven admissible
//! once walls are involved, so searches using it make no optimality claim.

use forage_core::{ForageState, GoalSet, Point};

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    a.manhattan(b)
}

/// Distance from `pos` to the closest remaining goal, 0 when none remain.
pub fn nearest_goal(pos: Point, goals: &GoalSet) -> i32 {
    goals.nearest(pos).map_or(0, |(_, d)| d)
}

/// Nearest-goal distance plus half the length of a greedy nearest-neighbour
/// tour through the remaining goals.
///
/// The tour starts at the first goal in canonical order. When more than
/// `cutoff` goals remain only the nearest-goal term is computed.
pub fn approx_spanning(pos: Point, goals: &GoalSet, cutoff: usize) -> i32 {
    let Some((_, to_nearest)) = goals.nearest(pos) else {
        return 0;
    };
    if goals.len() == 1 || goals.len() > cutoff {
        return to_nearest;
    }

    let cells = goals.as_slice();
    let mut visited = vec![false; cells.len()];
    visited[0] = true;
    let mut current = cells[0];
    let mut tour = 0;
    for _ in 1..cells.len() {
        let mut best: Option<(usize, i32)> = None;
        for (i, &c) in cells.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = manhattan(current, c);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        let Some((i, d)) = best else {
            break;
        };
        visited[i] = true;
        tour += d;
        current = cells[i];
    }

    to_nearest + tour / 2
}

/// Which estimate a multi-goal A* run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiHeuristic {
    NearestGoal,
    ApproxSpanning { cutoff: usize },
}

impl MultiHeuristic {
    /// Approximate-spanning at or below `threshold` goals, nearest-goal
    /// above it.
    pub fn select(goal_count: usize, threshold: usize, cutoff: usize) -> Self {
        if goal_count > threshold {
            MultiHeuristic::NearestGoal
        } else {
            MultiHeuristic::ApproxSpanning { cutoff }
        }
    }

    pub fn estimate(self, state: &ForageState) -> i32 {
        match self {
            MultiHeuristic::NearestGoal => nearest_goal(state.pos, &state.remaining),
            MultiHeuristic::ApproxSpanning { cutoff } => {
                approx_spanning(state.pos, &state.remaining, cutoff)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::Action;
    use proptest::prelude::*;

    fn goals(v: &[(i32, i32)]) -> GoalSet {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn nearest_goal_basics() {
        let g = goals(&[(5, 0), (0, 3)]);
        assert_eq!(nearest_goal(Point::ZERO, &g), 3);
        assert_eq!(nearest_goal(Point::ZERO, &GoalSet::empty()), 0);
    }

    #[test]
    fn spanning_adds_half_the_tour() {
        // Tour from (0,0): (0,0) -> (4,0) -> (8,0) = 8; nearest from (0,2) is 2.
        let g = goals(&[(0, 0), (4, 0), (8, 0)]);
        assert_eq!(approx_spanning(Point::new(0, 2), &g, 10), 2 + 4);
    }

    #[test]
    fn spanning_single_goal_is_manhattan() {
        let g = goals(&[(3, 4)]);
        assert_eq!(approx_spanning(Point::ZERO, &g, 10), 7);
    }

    #[test]
    fn spanning_degrades_above_cutoff() {
        let g: GoalSet = (0..11).map(|i| Point::new(i * 2, 0)).collect();
        assert_eq!(approx_spanning(Point::new(0, 1), &g, 10), 1);
        assert!(approx_spanning(Point::new(0, 1), &g, 11) > 1);
    }

    #[test]
    fn selection_policy_switches_above_threshold() {
        assert_eq!(
            MultiHeuristic::select(8, 8, 10),
            MultiHeuristic::ApproxSpanning { cutoff: 10 }
        );
        assert_eq!(MultiHeuristic::select(9, 8, 10), MultiHeuristic::NearestGoal);
    }

    #[test]
    fn spanning_never_exceeds_true_cost_on_a_line() {
        // Agent at one end of a row of goals: optimal cost is the far end.
        let g: GoalSet = (1..=6).map(|x| Point::new(x, 0)).collect();
        let s = ForageState::new(Point::ZERO, g);
        let h = MultiHeuristic::ApproxSpanning { cutoff: 10 }.estimate(&s);
        assert!(h <= 6, "h = {h}");
    }

    proptest! {
        #[test]
        fn manhattan_is_consistent(
            ax in 0i32..12, ay in 0i32..12, gx in 0i32..12, gy in 0i32..12,
            dir in 0usize..4,
        ) {
            let (a, goal) = (Point::new(ax, ay), Point::new(gx, gy));
            let b = Action::ALL[dir].apply(a);
            // h(a) <= c(a, b) + h(b) with unit step cost.
            prop_assert!(manhattan(a, goal) <= 1 + manhattan(b, goal));
        }

        #[test]
        fn nearest_goal_is_consistent(
            ax in 0i32..10, ay in 0i32..10,
            cells in proptest::collection::vec((0i32..10, 0i32..10), 1..6),
            dir in 0usize..4,
        ) {
            let g: GoalSet = cells.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let a = Point::new(ax, ay);
            let b = Action::ALL[dir].apply(a);
            let next = g.without(b);
            prop_assert!(nearest_goal(a, &g) <= 1 + nearest_goal(b, &next));
        }
    }
}
