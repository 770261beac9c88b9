//! Search tunables.
//!
//! The defaults reproduce the benchmark setting: a 9 second overall budget,
//! goal-count thresholds of 15 (budget split, node ceilings) and 8
//! (heuristic selection), and node ceilings of 5000 / 3000 / 10000.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(9);
pub const DEFAULT_SKIP_FRACTION: f64 = 0.85;
pub const DEFAULT_LARGE_GOAL_THRESHOLD: usize = 15;
pub const DEFAULT_SPANNING_THRESHOLD: usize = 8;
pub const DEFAULT_SPANNING_CUTOFF: usize = 10;
pub const DEFAULT_BEST_FIRST_MAX_NODES: usize = 5000;
pub const DEFAULT_ADAPTIVE_MAX_NODES_LARGE: usize = 3000;
pub const DEFAULT_ADAPTIVE_MAX_NODES: usize = 10_000;
pub const DEFAULT_ADAPTIVE_EARLY_EXIT_FRACTION: f64 = 0.7;
pub const DEFAULT_FALLBACK_MAX_STEPS: usize = 10_000;

/// Configuration for [`Forager`](crate::Forager).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Overall wall-clock budget shared by all strategies.
    pub time_limit: Duration,
    /// Remaining strategies are skipped once this fraction of
    /// `time_limit` has elapsed.
    pub skip_fraction: f64,
    /// Goal counts above this are "large": Adaptive-Optimal gets a smaller
    /// budget share, a tighter node ceiling and an early exit.
    pub large_goal_threshold: usize,
    /// Adaptive-Optimal uses the approximate-spanning heuristic at or below
    /// this many goals, nearest-goal above it.
    pub spanning_threshold: usize,
    /// Above this many goals the approximate-spanning heuristic degrades to
    /// nearest-goal.
    pub spanning_cutoff: usize,
    pub best_first_max_nodes: usize,
    pub adaptive_max_nodes_large: usize,
    pub adaptive_max_nodes: usize,
    /// Fraction of its budget after which Adaptive-Optimal gives up on
    /// large goal counts.
    pub adaptive_early_exit_fraction: f64,
    pub fallback_max_steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            skip_fraction: DEFAULT_SKIP_FRACTION,
            large_goal_threshold: DEFAULT_LARGE_GOAL_THRESHOLD,
            spanning_threshold: DEFAULT_SPANNING_THRESHOLD,
            spanning_cutoff: DEFAULT_SPANNING_CUTOFF,
            best_first_max_nodes: DEFAULT_BEST_FIRST_MAX_NODES,
            adaptive_max_nodes_large: DEFAULT_ADAPTIVE_MAX_NODES_LARGE,
            adaptive_max_nodes: DEFAULT_ADAPTIVE_MAX_NODES,
            adaptive_early_exit_fraction: DEFAULT_ADAPTIVE_EARLY_EXIT_FRACTION,
            fallback_max_steps: DEFAULT_FALLBACK_MAX_STEPS,
        }
    }
}

impl SearchConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_best_first_max_nodes(mut self, n: usize) -> Self {
        self.best_first_max_nodes = n;
        self
    }

    pub fn with_adaptive_max_nodes(mut self, normal: usize, large: usize) -> Self {
        self.adaptive_max_nodes = normal;
        self.adaptive_max_nodes_large = large;
        self
    }

    pub fn with_fallback_max_steps(mut self, n: usize) -> Self {
        self.fallback_max_steps = n;
        self
    }

    /// Whether `goal_count` triggers the large-layout settings.
    #[inline]
    pub fn is_large(&self, goal_count: usize) -> bool {
        goal_count > self.large_goal_threshold
    }

    /// Per-strategy budgets as `(others, adaptive)`.
    ///
    /// Large layouts give Adaptive-Optimal a sixth of the budget and the
    /// other two strategies `time_limit / 2.5` each; otherwise all three get
    /// a third.
    pub fn strategy_budgets(&self, goal_count: usize) -> (Duration, Duration) {
        if self.is_large(goal_count) {
            (self.time_limit * 2 / 5, self.time_limit / 6)
        } else {
            (self.time_limit / 3, self.time_limit / 3)
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit.is_zero() {
            return Err(ConfigError::ZeroTimeLimit);
        }
        for (name, v) in [
            ("skip_fraction", self.skip_fraction),
            ("adaptive_early_exit_fraction", self.adaptive_early_exit_fraction),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(ConfigError::FractionOutOfRange { name, value: v });
            }
        }
        for (name, v) in [
            ("best_first_max_nodes", self.best_first_max_nodes),
            ("adaptive_max_nodes", self.adaptive_max_nodes),
            ("adaptive_max_nodes_large", self.adaptive_max_nodes_large),
            ("fallback_max_steps", self.fallback_max_steps),
        ] {
            if v == 0 {
                return Err(ConfigError::ZeroCeiling(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = SearchConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.time_limit, Duration::from_secs(9));
        assert_eq!(c.best_first_max_nodes, 5000);
    }

    #[test]
    fn budget_split_switches_above_threshold() {
        let c = SearchConfig::default();
        let (others, adaptive) = c.strategy_budgets(15);
        assert_eq!(others, Duration::from_secs(3));
        assert_eq!(adaptive, Duration::from_secs(3));

        let (others, adaptive) = c.strategy_budgets(16);
        assert_eq!(others, Duration::from_millis(3600));
        assert_eq!(adaptive, Duration::from_millis(1500));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let c = SearchConfig::default().with_time_limit(Duration::ZERO);
        assert_eq!(c.validate(), Err(ConfigError::ZeroTimeLimit));

        let c = SearchConfig {
            skip_fraction: 1.5,
            ..SearchConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::FractionOutOfRange {
                name: "skip_fraction",
                ..
            })
        ));

        let c = SearchConfig::default().with_best_first_max_nodes(0);
        assert_eq!(c.validate(), Err(ConfigError::ZeroCeiling("best_first_max_nodes")));
    }
}
