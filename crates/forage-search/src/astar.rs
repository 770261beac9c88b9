use std::collections::HashMap;

use forage_core::{Path, Point, TargetSpace};
use log::trace;

use crate::deadline::Deadline;
use crate::frontier::{Frontier, ROOT, SearchTree};
use crate::heuristics::manhattan;

/// Compute a minimum-cost path from the start state to the target using A*.
///
/// The goal test happens when a state is popped, not when it is generated,
/// which together with the consistent Manhattan heuristic makes the result
/// optimal. Returns an empty path when the target is unreachable, when the
/// start already is the target, or when `deadline` passes first.
pub fn shortest_path<S: TargetSpace>(space: &S, deadline: &Deadline) -> Path {
    let start = space.start_state();
    let goal = space.target();

    let mut tree = SearchTree::with_root(start);
    let mut best_g: HashMap<Point, i32> = HashMap::new();
    best_g.insert(start, 0);

    let mut open = Frontier::new();
    open.push(ROOT, i64::from(manhattan(start, goal)));

    let mut buf = Vec::with_capacity(4);

    while let Some((ni, _)) = open.pop() {
        if deadline.expired() {
            trace!("single-goal A*: deadline reached, giving up");
            return Vec::new();
        }

        let (state, g) = {
            let n = tree.get(ni);
            (n.state, n.g)
        };

        // Skip stale entries.
        if best_g.get(&state).is_some_and(|&b| g > b) {
            continue;
        }

        if space.is_goal(&state) {
            return tree.path(ni);
        }

        buf.clear();
        space.successors(&state, &mut buf);
        for succ in buf.drain(..) {
            let tentative = g + succ.cost;
            if best_g.get(&succ.state).is_some_and(|&b| tentative >= b) {
                continue;
            }
            best_g.insert(succ.state, tentative);
            let f = tentative + manhattan(succ.state, goal);
            let ci = tree.push(ni, succ.action, succ.state, succ.cost);
            open.push(ci, i64::from(f));
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::{Action, Layout, PositionProblem, StateSpace, WallGrid};
    use proptest::prelude::*;
    use std::collections::{HashSet, VecDeque};
    use std::time::Duration;

    fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(10))
    }

    /// Independent shortest-path length by breadth-first enumeration.
    fn bfs_distance(walls: &WallGrid, from: Point, to: Point) -> Option<usize> {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([(from, 0usize)]);
        while let Some((p, d)) = queue.pop_front() {
            if p == to {
                return Some(d);
            }
            for a in Action::ALL {
                let n = a.apply(p);
                if walls.passable(n) && seen.insert(n) {
                    queue.push_back((n, d + 1));
                }
            }
        }
        None
    }

    fn walk(from: Point, path: &[Action]) -> Point {
        path.iter().fold(from, |p, a| a.apply(p))
    }

    #[test]
    fn straight_corridor() {
        let layout = Layout::parse("P   ").unwrap();
        let problem = PositionProblem::new(layout.walls, layout.start, Point::new(3, 0));
        let path = shortest_path(&problem, &deadline());
        assert_eq!(path, vec![Action::East; 3]);
    }

    #[test]
    fn detours_around_wall() {
        let layout = Layout::parse(
            "
%%%%%%%
%P %  %
%  %  %
%     %
%%%%%%%",
        )
        .unwrap();
        let target = Point::new(5, 1);
        let problem = PositionProblem::new(layout.walls.clone(), layout.start, target);
        let path = shortest_path(&problem, &deadline());
        assert_eq!(path.len(), 8);
        assert_eq!(walk(layout.start, &path), target);
        assert_eq!(Some(path.len()), bfs_distance(&layout.walls, layout.start, target));
    }

    #[test]
    fn unreachable_target_gives_empty_path() {
        let layout = Layout::parse("P % ").unwrap();
        let problem = PositionProblem::new(layout.walls, layout.start, Point::new(3, 0));
        assert!(shortest_path(&problem, &deadline()).is_empty());
    }

    #[test]
    fn start_on_target_gives_empty_path() {
        let problem = PositionProblem::new(WallGrid::new(3, 3), Point::new(1, 1), Point::new(1, 1));
        assert!(problem.is_goal(&problem.start_state()));
        assert!(shortest_path(&problem, &deadline()).is_empty());
    }

    #[test]
    fn expired_deadline_gives_empty_path() {
        let problem = PositionProblem::new(WallGrid::new(8, 8), Point::ZERO, Point::new(7, 7));
        let expired = Deadline::after(Duration::ZERO);
        assert!(shortest_path(&problem, &expired).is_empty());
    }

    proptest! {
        #[test]
        fn matches_bfs_on_random_grids(
            cells in proptest::collection::vec(proptest::bool::weighted(0.3), 36),
            sx in 0i32..6, sy in 0i32..6, tx in 0i32..6, ty in 0i32..6,
        ) {
            let mut walls = WallGrid::new(6, 6);
            for (i, &w) in cells.iter().enumerate() {
                walls.set_wall(Point::new(i as i32 % 6, i as i32 / 6), w);
            }
            let (start, target) = (Point::new(sx, sy), Point::new(tx, ty));
            walls.set_wall(start, false);
            walls.set_wall(target, false);

            let problem = PositionProblem::new(walls.clone(), start, target);
            let path = shortest_path(&problem, &deadline());
            match bfs_distance(&walls, start, target) {
                Some(d) => {
                    prop_assert_eq!(path.len(), d);
                    prop_assert_eq!(walk(start, &path), target);
                }
                None => prop_assert!(path.is_empty()),
            }
        }

        #[test]
        fn manhattan_equals_true_distance_on_open_grid(
            sx in 0i32..7, sy in 0i32..7, tx in 0i32..7, ty in 0i32..7,
        ) {
            let walls = WallGrid::new(7, 7);
            let (start, target) = (Point::new(sx, sy), Point::new(tx, ty));
            let d = bfs_distance(&walls, start, target).unwrap() as i32;
            // Admissible, and tight without walls.
            prop_assert!(manhattan(start, target) <= d);
            prop_assert_eq!(manhattan(start, target), d);
        }
    }
}
