use forage_core::Action;
use thiserror::Error;

/// An action sequence that the state space does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("action {action} at step {step} matches no successor")]
    IllegalAction { step: usize, action: Action },
}

/// A strategy stopped for a reason other than budget or unreachability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("strategy produced an unreplayable path: {0}")]
    Replay(#[from] ReplayError),
    #[error("strategy panicked: {0}")]
    Panicked(String),
}

/// Invalid [`SearchConfig`](crate::SearchConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time limit must be positive")]
    ZeroTimeLimit,
    #[error("{name} must be in (0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
    #[error("{0} must be positive")]
    ZeroCeiling(&'static str),
}
