//! Path replay and scoring.
//!
//! Every candidate path, whichever strategy produced it, is ranked here by
//! replaying it against the state space. Replay is also the only place a
//! path is checked for validity.

use forage_core::{Action, ForageState, GoalSpace, StateSpace, Successor};

use crate::error::ReplayError;

/// Points per goal collected.
pub const GOAL_REWARD: i64 = 10;
/// Bonus for ending with no goals left.
pub const COMPLETION_BONUS: i64 = 500;

/// Outcome of replaying a valid path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreCard {
    pub score: i64,
    pub goals_collected: usize,
    pub path_len: usize,
    pub goals_remaining: usize,
}

impl ScoreCard {
    /// Whether the replay ended with every goal visited.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.goals_remaining == 0
    }
}

/// `collected × 10 − len`, plus the completion bonus when nothing remains.
#[inline]
pub fn score_of(goals_collected: usize, path_len: usize, goals_remaining: usize) -> i64 {
    let mut score = goals_collected as i64 * GOAL_REWARD - path_len as i64;
    if goals_remaining == 0 {
        score += COMPLETION_BONUS;
    }
    score
}

/// The successor of `state` reached by `action`, or the replay error for
/// step `step`.
fn step<S: StateSpace>(
    space: &S,
    state: &S::State,
    action: Action,
    step: usize,
    buf: &mut Vec<Successor<S::State>>,
) -> Result<Successor<S::State>, ReplayError> {
    buf.clear();
    space.successors(state, buf);
    buf.drain(..)
        .find(|s| s.action == action)
        .ok_or(ReplayError::IllegalAction { step, action })
}

/// Apply `path` from `from`, returning the state reached.
///
/// Each action must match one of the successors the space produces at that
/// step; the first that does not is reported with its index.
pub fn replay_from<S: StateSpace>(
    space: &S,
    from: &S::State,
    path: &[Action],
) -> Result<S::State, ReplayError> {
    let mut state = from.clone();
    let mut buf = Vec::with_capacity(4);
    for (i, &action) in path.iter().enumerate() {
        state = step(space, &state, action, i, &mut buf)?.state;
    }
    Ok(state)
}

/// Replay `path` from `from` and score it.
pub fn score_from<S: GoalSpace>(
    space: &S,
    from: &ForageState,
    path: &[Action],
) -> Result<ScoreCard, ReplayError> {
    let mut state = from.clone();
    let mut collected = 0;
    let mut buf = Vec::with_capacity(4);
    for (i, &action) in path.iter().enumerate() {
        let next = step(space, &state, action, i, &mut buf)?.state;
        if next.remaining.len() < state.remaining.len() {
            collected += 1;
        }
        state = next;
    }
    let remaining = state.remaining.len();
    Ok(ScoreCard {
        score: score_of(collected, path.len(), remaining),
        goals_collected: collected,
        path_len: path.len(),
        goals_remaining: remaining,
    })
}

/// Replay `path` from the start state and score it.
pub fn score_path<S: GoalSpace>(space: &S, path: &[Action]) -> Result<ScoreCard, ReplayError> {
    score_from(space, &space.start_state(), path)
}
