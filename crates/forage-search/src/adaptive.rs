use std::collections::HashMap;

use forage_core::{ForageState, GoalSpace, Path};
use log::trace;

use crate::Forager;
use crate::deadline::Deadline;
use crate::error::StrategyError;
use crate::frontier::{Frontier, ROOT, SearchTree};
use crate::heuristics::MultiHeuristic;

/// Parameters Adaptive-Optimal settles on before it starts expanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptivePlan {
    pub heuristic: MultiHeuristic,
    pub max_nodes: usize,
    /// Whether states with many goals left may stop the search once most of
    /// the budget is gone.
    pub early_exit: bool,
}

impl Forager {
    /// The plan used for a start state with `goal_count` goals.
    pub fn adaptive_plan(&self, goal_count: usize) -> AdaptivePlan {
        let c = &self.config;
        let large = c.is_large(goal_count);
        AdaptivePlan {
            heuristic: MultiHeuristic::select(goal_count, c.spanning_threshold, c.spanning_cutoff),
            max_nodes: if large {
                c.adaptive_max_nodes_large
            } else {
                c.adaptive_max_nodes
            },
            early_exit: large,
        }
    }

    /// Adaptive-Optimal: A* over the multi-goal state space.
    ///
    /// The heuristic and the node ceiling depend on the starting goal count
    /// (see [`adaptive_plan`](Forager::adaptive_plan)). Returns the first
    /// complete path popped, or an empty path when the search runs out of
    /// nodes, time, or reachable states first.
    pub fn adaptive_optimal<S: GoalSpace>(
        &self,
        space: &S,
        deadline: &Deadline,
    ) -> Result<Path, StrategyError> {
        let start = space.start_state();
        let plan = self.adaptive_plan(start.remaining.len());
        let large_threshold = self.config.large_goal_threshold;
        let exit_fraction = self.config.adaptive_early_exit_fraction;
        trace!("adaptive-optimal: {plan:?}");

        let mut best_g: HashMap<ForageState, i32> = HashMap::new();
        best_g.insert(start.clone(), 0);
        let mut open = Frontier::new();
        open.push(ROOT, i64::from(plan.heuristic.estimate(&start)));
        let mut tree = SearchTree::with_root(start);

        let mut expanded = 0;
        let mut buf = Vec::with_capacity(4);

        while expanded < plan.max_nodes {
            if deadline.expired() {
                trace!("adaptive-optimal: deadline reached after {expanded} pops");
                break;
            }
            let Some((ni, _)) = open.pop() else {
                break;
            };
            expanded += 1;

            let node = tree.get(ni);
            let (state, g) = (node.state.clone(), node.g);
            if best_g.get(&state).is_some_and(|&b| g > b) {
                continue;
            }
            if space.is_goal(&state) {
                return Ok(tree.path(ni));
            }
            if plan.early_exit
                && state.remaining.len() > large_threshold
                && deadline.consumed_beyond(exit_fraction)
            {
                trace!("adaptive-optimal: early exit with {} goals left", state.remaining.len());
                break;
            }

            buf.clear();
            space.successors(&state, &mut buf);
            for succ in buf.drain(..) {
                let tentative = g + succ.cost;
                if best_g.get(&succ.state).is_some_and(|&b| tentative >= b) {
                    continue;
                }
                best_g.insert(succ.state.clone(), tentative);
                let f = tentative + plan.heuristic.estimate(&succ.state);
                let ci = tree.push(ni, succ.action, succ.state, succ.cost);
                open.push(ci, i64::from(f));
            }
        }

        if expanded >= plan.max_nodes {
            trace!("adaptive-optimal: node ceiling {} reached", plan.max_nodes);
        }
        Ok(Vec::new())
    }
}
