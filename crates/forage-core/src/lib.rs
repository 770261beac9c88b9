//! **forage-core**: grid geometry, goal sets and state-space adapters.
//!
//! The search crate never looks at walls or layouts directly. It talks to
//! the world through [`StateSpace`] and its two refinements:
//!
//! | Trait | State | Used by |
//! |---|---|---|
//! | [`TargetSpace`] | [`Point`] | single-goal A* |
//! | [`GoalSpace`] | [`ForageState`] | multi-goal strategies |
//!
//! [`ForageProblem`] and [`PositionProblem`] are reference implementations
//! over a [`WallGrid`], usually built from an ASCII [`Layout`].

pub mod action;
pub mod geom;
pub mod goals;
pub mod grid;
pub mod layout;
pub mod mapgen;
pub mod problem;
pub mod space;

pub use action::{Action, Path};
pub use geom::{Point, Range};
pub use goals::{ForageState, GoalSet};
pub use grid::WallGrid;
pub use layout::{Layout, LayoutError};
pub use mapgen::LayoutGen;
pub use problem::{ForageProblem, PositionProblem};
pub use space::{GoalSpace, StateSpace, Successor, TargetSpace};
