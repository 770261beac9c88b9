//! Reference state spaces over a [`WallGrid`].

use crate::action::Action;
use crate::geom::Point;
use crate::goals::{ForageState, GoalSet};
use crate::grid::WallGrid;
use crate::layout::Layout;
use crate::space::{StateSpace, Successor, TargetSpace};

/// Visit every goal cell on a walled grid.
///
/// Successors are enumerated in [`Action::ALL`] order; stepping onto a goal
/// removes it from the successor's remaining set. A goal placed on the start
/// cell is considered visited from the outset.
#[derive(Debug, Clone)]
pub struct ForageProblem {
    walls: WallGrid,
    start: Point,
    goals: GoalSet,
}

impl ForageProblem {
    pub fn new(walls: WallGrid, start: Point, goals: GoalSet) -> Self {
        let goals = goals.without(start);
        Self {
            walls,
            start,
            goals,
        }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.walls.clone(), layout.start, layout.goals.clone())
    }

    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    /// The goals still to visit at the start.
    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }
}

impl StateSpace for ForageProblem {
    type State = ForageState;

    fn start_state(&self) -> ForageState {
        ForageState::new(self.start, self.goals.clone())
    }

    fn is_goal(&self, state: &ForageState) -> bool {
        state.is_complete()
    }

    fn successors(&self, state: &ForageState, buf: &mut Vec<Successor<ForageState>>) {
        for action in Action::ALL {
            let next = action.apply(state.pos);
            if self.walls.passable(next) {
                buf.push(Successor {
                    state: state.step_to(next),
                    action,
                    cost: 1,
                });
            }
        }
    }
}

/// Reach a single target cell on a walled grid.
#[derive(Debug, Clone)]
pub struct PositionProblem {
    walls: WallGrid,
    start: Point,
    target: Point,
}

impl PositionProblem {
    pub fn new(walls: WallGrid, start: Point, target: Point) -> Self {
        Self {
            walls,
            start,
            target,
        }
    }

    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }
}

impl StateSpace for PositionProblem {
    type State = Point;

    fn start_state(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.target
    }

    fn successors(&self, state: &Point, buf: &mut Vec<Successor<Point>>) {
        for action in Action::ALL {
            let next = action.apply(*state);
            if self.walls.passable(next) {
                buf.push(Successor {
                    state: next,
                    action,
                    cost: 1,
                });
            }
        }
    }
}

impl TargetSpace for PositionProblem {
    fn target(&self) -> Point {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_skip_walls_and_consume_goals() {
        let layout = Layout::parse("%%%%\n%P.%\n%%%%").unwrap();
        let problem = ForageProblem::from_layout(&layout);
        let start = problem.start_state();
        assert!(!problem.is_goal(&start));

        let mut buf = Vec::new();
        problem.successors(&start, &mut buf);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf[0].action, Action::East);
        assert_eq!(buf[0].cost, 1);
        assert!(problem.is_goal(&buf[0].state));
    }

    #[test]
    fn goal_on_start_is_dropped() {
        let walls = WallGrid::new(3, 1);
        let goals = GoalSet::new([Point::new(0, 0), Point::new(2, 0)]);
        let problem = ForageProblem::new(walls, Point::new(0, 0), goals);
        assert_eq!(problem.goals().len(), 1);
        assert_eq!(problem.start_state().remaining.len(), 1);
    }

    #[test]
    fn successor_order_follows_action_order() {
        let problem = PositionProblem::new(WallGrid::new(3, 3), Point::new(1, 1), Point::ZERO);
        let mut buf = Vec::new();
        problem.successors(&problem.start_state(), &mut buf);
        let actions: Vec<Action> = buf.iter().map(|s| s.action).collect();
        assert_eq!(actions, Action::ALL.to_vec());
        assert_eq!(problem.target(), Point::ZERO);
    }
}
