use std::collections::HashSet;

use forage_core::{ForageState, GoalSpace, Path};
use log::trace;

use crate::Forager;
use crate::deadline::Deadline;
use crate::error::StrategyError;
use crate::frontier::{Frontier, ROOT, SearchTree};
use crate::scorer::{GOAL_REWARD, score_of};

impl Forager {
    /// Best-First: expand the state with the highest partial score
    /// (`collected × 10 − length`) first.
    ///
    /// Bounded by [`best_first_max_nodes`](crate::SearchConfig::best_first_max_nodes)
    /// pops and by `deadline`. Returns the path to the first complete state
    /// popped, or else the best-scoring non-empty path among all expanded
    /// states.
    pub fn best_first<S: GoalSpace>(
        &self,
        space: &S,
        deadline: &Deadline,
    ) -> Result<Path, StrategyError> {
        let start = space.start_state();
        let initial = start.remaining.len();
        let max_nodes = self.config.best_first_max_nodes;

        let mut tree = SearchTree::with_root(start);
        let mut open = Frontier::new();
        open.push(ROOT, 0);
        let mut visited: HashSet<ForageState> = HashSet::new();
        let mut best: Option<(i64, usize)> = None;
        let mut expanded = 0;
        let mut buf = Vec::with_capacity(4);

        while expanded < max_nodes {
            if deadline.expired() {
                trace!("best-first: deadline reached after {expanded} pops");
                break;
            }
            let Some((ni, _)) = open.pop() else {
                break;
            };
            expanded += 1;

            let node = tree.get(ni);
            let (state, depth) = (node.state.clone(), node.depth);
            if !visited.insert(state.clone()) {
                continue;
            }
            if space.is_goal(&state) {
                return Ok(tree.path(ni));
            }

            if depth > 0 {
                let remaining = state.remaining.len();
                let score = score_of(initial - remaining, depth, remaining);
                if best.is_none_or(|(b, _)| score > b) {
                    best = Some((score, ni));
                }
            }

            buf.clear();
            space.successors(&state, &mut buf);
            for succ in buf.drain(..) {
                if visited.contains(&succ.state) {
                    continue;
                }
                let collected = (initial - succ.state.remaining.len()) as i64;
                let priority = (depth + 1) as i64 - collected * GOAL_REWARD;
                let ci = tree.push(ni, succ.action, succ.state, succ.cost);
                open.push(ci, priority);
            }
        }

        if expanded >= max_nodes {
            trace!("best-first: node ceiling {max_nodes} reached");
        }
        Ok(best.map(|(_, ni)| tree.path(ni)).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use crate::scorer::score_path;
    use forage_core::{ForageProblem, Layout};
    use std::time::Duration;

    fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(10))
    }

    #[test]
    fn completes_small_layout() {
        let layout = Layout::parse(
            "
%%%%%%
%. P.%
%  . %
%%%%%%",
        )
        .unwrap();
        let problem = ForageProblem::from_layout(&layout);
        let path = Forager::new().best_first(&problem, &deadline()).unwrap();
        let card = score_path(&problem, &path).unwrap();
        assert!(card.is_complete());
    }

    #[test]
    fn returns_best_partial_under_node_ceiling() {
        let layout = Layout::parse(
            "
%%%%%%%%%%%%
%P.        %
%         .%
%%%%%%%%%%%%",
        )
        .unwrap();
        let problem = ForageProblem::from_layout(&layout);
        let config = SearchConfig::default().with_best_first_max_nodes(3);
        let forager = Forager::with_config(config).unwrap();
        let path = forager.best_first(&problem, &deadline()).unwrap();
        let card = score_path(&problem, &path).unwrap();
        // The adjacent goal is grabbed first; the far one is out of reach.
        assert_eq!(card.goals_collected, 1);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn unreachable_goal_still_yields_partial_path() {
        let layout = Layout::parse(
            "
%%%%%%%
%P . %.
%%%%%%%",
        )
        .unwrap();
        let problem = ForageProblem::from_layout(&layout);
        let path = Forager::new().best_first(&problem, &deadline()).unwrap();
        let card = score_path(&problem, &path).unwrap();
        assert_eq!(card.goals_collected, 1);
        assert_eq!(card.score, 10 - 2);
    }

    #[test]
    fn no_moves_means_empty_path() {
        let layout = Layout::parse("%P%").unwrap();
        let problem = ForageProblem::from_layout(&layout);
        assert!(Forager::new().best_first(&problem, &deadline()).unwrap().is_empty());
    }
}
