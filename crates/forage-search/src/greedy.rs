use forage_core::{GoalSpace, Path};
use log::trace;

use crate::Forager;
use crate::deadline::Deadline;
use crate::error::StrategyError;
use crate::router::route_to;
use crate::scorer::replay_from;

impl Forager {
    /// Nearest-Greedy: repeatedly walk to the closest remaining goal.
    ///
    /// "Closest" is by Manhattan distance; the walk itself is the BFS route.
    /// When the closest goal cannot be routed to, the other goals are tried
    /// in increasing distance order. Stops when every goal is visited, the
    /// deadline passes, or no remaining goal is reachable.
    pub fn nearest_greedy<S: GoalSpace>(
        &self,
        space: &S,
        deadline: &Deadline,
    ) -> Result<Path, StrategyError> {
        let mut state = space.start_state();
        let mut path = Vec::new();

        while !space.is_goal(&state) && !deadline.expired() {
            let Some((nearest, _)) = state.remaining.nearest(state.pos) else {
                break;
            };

            let mut leg = route_to(space, &state, nearest, deadline).filter(|p| !p.is_empty());
            if leg.is_none() {
                for goal in state.remaining.by_distance(state.pos) {
                    if goal == nearest {
                        continue;
                    }
                    if deadline.expired() {
                        break;
                    }
                    leg = route_to(space, &state, goal, deadline).filter(|p| !p.is_empty());
                    if leg.is_some() {
                        break;
                    }
                }
            }

            let Some(leg) = leg else {
                trace!(
                    "nearest-greedy: {} goals left unreachable",
                    state.remaining.len()
                );
                break;
            };
            state = replay_from(space, &state, &leg)?;
            path.extend(leg);
        }

        Ok(path)
    }
}
