use std::collections::HashSet;

use forage_core::{ForageState, GoalSpace, Path};
use log::trace;

use crate::Forager;
use crate::deadline::Deadline;
use crate::heuristics::nearest_goal;

impl Forager {
    /// One-step lookahead walker used when no primary strategy produced a
    /// path.
    ///
    /// Each step takes the first successor that collects a goal, or failing
    /// that the one closest to a remaining goal. The walk ends when every
    /// goal is visited, a state repeats, no move exists, the step cap is hit,
    /// or `deadline` passes.
    pub fn fallback<S: GoalSpace>(&self, space: &S, deadline: &Deadline) -> Path {
        let mut state = space.start_state();
        let mut seen: HashSet<ForageState> = HashSet::from([state.clone()]);
        let mut path = Vec::new();
        let mut buf = Vec::with_capacity(4);

        while !space.is_goal(&state) && path.len() < self.config.fallback_max_steps {
            if deadline.expired() {
                trace!("fallback: deadline reached after {} steps", path.len());
                break;
            }

            buf.clear();
            space.successors(&state, &mut buf);
            let left = state.remaining.len();
            let choice = match buf.iter().position(|s| s.state.remaining.len() < left) {
                Some(i) => Some(buf.swap_remove(i)),
                None => buf
                    .drain(..)
                    .min_by_key(|s| nearest_goal(s.state.pos, &s.state.remaining)),
            };
            let Some(next) = choice else {
                break;
            };

            if !seen.insert(next.state.clone()) {
                trace!("fallback: walk entered a cycle at {}", next.state.pos);
                break;
            }
            path.push(next.action);
            state = next.state;
        }

        path
    }
}
