//! Bounded-time pathfinding over [`forage_core`] state spaces.
//!
//! Two entry points:
//!
//! - [`solve_single_goal`] runs an optimal A* with the Manhattan heuristic
//!   toward one target cell.
//! - [`solve_multi_goal`] runs the multi-goal strategies under a shared
//!   wall-clock budget and returns the best-scoring path.
//!
//! Both always return an action sequence, empty when nothing useful was
//! found. Budget exhaustion is ordinary termination, never an error.
//!
//! # Multi-goal strategies
//!
//! | Strategy | Ordering | Bound |
//! |---|---|---|
//! | [`nearest_greedy`](Forager::nearest_greedy) | closest goal by Manhattan, routed by BFS | time |
//! | [`best_first`](Forager::best_first) | length − 10 × collected | 5000 pops |
//! | [`adaptive_optimal`](Forager::adaptive_optimal) | g + heuristic | 3000 or 10000 pops |
//! | [`fallback`](Forager::fallback) | one-step lookahead | steps, cycles |
//!
//! Paths are ranked by [`score_path`]: 10 per goal collected, minus the path
//! length, plus 500 when every goal was visited.

mod adaptive;
mod astar;
mod best_first;
mod config;
mod deadline;
mod error;
mod fallback;
mod forager;
mod frontier;
mod greedy;
pub mod heuristics;
mod router;
mod scorer;

pub use adaptive::AdaptivePlan;
pub use config::*;
pub use deadline::Deadline;
pub use error::{ConfigError, ReplayError, StrategyError};
pub use forager::{Forager, Outcome, Solution, StrategyKind, StrategyReport};
pub use router::route_to;
pub use scorer::{
    COMPLETION_BONUS, GOAL_REWARD, ScoreCard, replay_from, score_from, score_of, score_path,
};

use forage_core::{GoalSpace, Path, TargetSpace};

/// Optimal single-goal path under the default time limit.
pub fn solve_single_goal<S: TargetSpace>(space: &S) -> Path {
    Forager::new().shortest_path(space)
}

/// Best multi-goal path found under the default configuration.
pub fn solve_multi_goal<S: GoalSpace>(space: &S) -> Path {
    Forager::new().solve(space).path
}

/// Single-goal A* under an explicit deadline.
pub fn shortest_path<S: TargetSpace>(space: &S, deadline: &Deadline) -> Path {
    astar::shortest_path(space, deadline)
}
