//! Agent moves on a 4-connected grid.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    North,
    South,
    East,
    West,
}

/// An ordered sequence of actions, in execution order.
pub type Path = Vec<Action>;

impl Action {
    /// All actions in successor-enumeration order.
    pub const ALL: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

    /// Unit displacement of this action. North is `y - 1`.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Action::North => Point::new(0, -1),
            Action::South => Point::new(0, 1),
            Action::East => Point::new(1, 0),
            Action::West => Point::new(-1, 0),
        }
    }

    /// The action undoing this one.
    #[inline]
    pub const fn reverse(self) -> Action {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
        }
    }

    /// Position reached by applying this action at `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_cancels_delta() {
        for a in Action::ALL {
            assert_eq!(a.delta() + a.reverse().delta(), Point::ZERO);
            assert_eq!(a.reverse().reverse(), a);
        }
    }

    #[test]
    fn apply_moves_one_cell() {
        let p = Point::new(3, 3);
        assert_eq!(Action::North.apply(p), Point::new(3, 2));
        assert_eq!(Action::East.apply(p), Point::new(4, 3));
        for a in Action::ALL {
            assert_eq!(a.apply(p).manhattan(p), 1);
        }
    }
}
