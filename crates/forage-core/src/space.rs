use std::hash::Hash;

use crate::action::Action;
use crate::geom::Point;
use crate::goals::ForageState;

/// A state reachable in one move, with the move that leads there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successor<S> {
    pub state: S,
    pub action: Action,
    pub cost: i32,
}

/// Minimal search interface: start state, goal test and successors.
pub trait StateSpace {
    type State: Clone + Eq + Hash;

    /// The state the agent starts in.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Append successors of `state` into `buf`. The caller clears `buf`
    /// before calling. Step costs must be > 0.
    fn successors(&self, state: &Self::State, buf: &mut Vec<Successor<Self::State>>);
}

/// Single-goal space over plain positions with a known target cell.
pub trait TargetSpace: StateSpace<State = Point> {
    /// The cell to reach.
    fn target(&self) -> Point;
}

/// Multi-goal space: states carry the set of goals still to visit.
pub trait GoalSpace: StateSpace<State = ForageState> {}

impl<T: StateSpace<State = ForageState> + ?Sized> GoalSpace for T {}
