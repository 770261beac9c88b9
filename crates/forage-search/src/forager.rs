use std::any::Any;
use std::cmp::Reverse;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use forage_core::{GoalSpace, Path, TargetSpace};
use log::{debug, info, warn};

use crate::astar;
use crate::config::SearchConfig;
use crate::deadline::Deadline;
use crate::error::{ConfigError, ReplayError, StrategyError};
use crate::scorer::{ScoreCard, score_path};

/// The search strategies the orchestrator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    NearestGreedy,
    BestFirst,
    AdaptiveOptimal,
    Fallback,
}

impl StrategyKind {
    /// Primary strategies in the order they run.
    pub const PRIMARY: [StrategyKind; 3] = [
        StrategyKind::NearestGreedy,
        StrategyKind::BestFirst,
        StrategyKind::AdaptiveOptimal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::NearestGreedy => "nearest-greedy",
            StrategyKind::BestFirst => "best-first",
            StrategyKind::AdaptiveOptimal => "adaptive-optimal",
            StrategyKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What came of running one strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A non-empty, replayable path with its score.
    Scored(ScoreCard),
    /// The strategy ran but returned an empty path.
    NoPath,
    /// The returned path does not replay against the space.
    Invalid(ReplayError),
    /// The strategy failed or panicked.
    Failed(StrategyError),
    /// Not run: the overall budget was nearly spent.
    Skipped,
}

/// Per-strategy entry in a [`Solution`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport {
    pub kind: StrategyKind,
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub budget: Duration,
}

/// Result of [`Forager::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The winning path; empty when nothing, not even the fallback, moved.
    pub path: Path,
    pub winner: Option<StrategyKind>,
    pub score: Option<ScoreCard>,
    pub reports: Vec<StrategyReport>,
    pub elapsed: Duration,
}

impl Solution {
    /// The report for `kind`, if that strategy was considered.
    pub fn report(&self, kind: StrategyKind) -> Option<&StrategyReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// Scored strategies, highest score first. Equal scores keep run order.
    pub fn ranking(&self) -> Vec<(&StrategyReport, ScoreCard)> {
        let mut ranked: Vec<_> = self
            .reports
            .iter()
            .filter_map(|r| match r.outcome {
                Outcome::Scored(card) => Some((r, card)),
                _ => None,
            })
            .collect();
        ranked.sort_by_key(|&(_, card)| Reverse(card.score));
        ranked
    }
}

/// Time-bounded multi-strategy solver.
///
/// A `Forager` holds only configuration; each call to [`solve`](Self::solve)
/// or [`shortest_path`](Self::shortest_path) starts a fresh budget.
#[derive(Debug, Clone, Default)]
pub struct Forager {
    pub(crate) config: SearchConfig,
}

impl Forager {
    /// A forager with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A forager with a validated custom configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Single-goal shortest path, bounded by the configured time limit.
    ///
    /// Returns an empty path if the target is unreachable, the budget runs
    /// out, or the space panics.
    pub fn shortest_path<S: TargetSpace>(&self, space: &S) -> Path {
        let deadline = Deadline::after(self.config.time_limit);
        catch_unwind(AssertUnwindSafe(|| astar::shortest_path(space, &deadline))).unwrap_or_else(
            |payload| {
                warn!("single-goal A* panicked: {}", panic_message(payload.as_ref()));
                Vec::new()
            },
        )
    }

    /// Run a single strategy under `deadline`, turning panics into
    /// [`StrategyError::Panicked`].
    pub fn run_strategy<S: GoalSpace>(
        &self,
        kind: StrategyKind,
        space: &S,
        deadline: &Deadline,
    ) -> Result<Path, StrategyError> {
        catch_unwind(AssertUnwindSafe(|| match kind {
            StrategyKind::NearestGreedy => self.nearest_greedy(space, deadline),
            StrategyKind::BestFirst => self.best_first(space, deadline),
            StrategyKind::AdaptiveOptimal => self.adaptive_optimal(space, deadline),
            StrategyKind::Fallback => Ok(self.fallback(space, deadline)),
        }))
        .unwrap_or_else(|payload| Err(StrategyError::Panicked(panic_message(payload.as_ref()))))
    }

    /// Run the primary strategies in order under the overall time limit and
    /// return the highest-scoring valid path.
    ///
    /// Strategies still pending once the skip fraction of the budget is used
    /// are not started. Ties keep the earlier strategy. When no primary
    /// strategy yields a usable path the fallback walker gets whatever time
    /// is left.
    pub fn solve<S: GoalSpace>(&self, space: &S) -> Solution {
        let overall = Deadline::after(self.config.time_limit);
        let goal_count = space.start_state().remaining.len();
        let (others, adaptive) = self.config.strategy_budgets(goal_count);
        debug!(
            "solving {goal_count} goals in {:?}: {others:?} per strategy, {adaptive:?} for adaptive-optimal",
            overall.limit()
        );

        let mut reports = Vec::with_capacity(StrategyKind::PRIMARY.len() + 1);
        let mut best: Option<(Path, ScoreCard, StrategyKind)> = None;

        for kind in StrategyKind::PRIMARY {
            let budget = match kind {
                StrategyKind::AdaptiveOptimal => adaptive,
                _ => others,
            };
            if overall.consumed_beyond(self.config.skip_fraction) {
                debug!("{kind}: skipped after {:?}", overall.elapsed());
                reports.push(StrategyReport {
                    kind,
                    outcome: Outcome::Skipped,
                    elapsed: Duration::ZERO,
                    budget,
                });
                continue;
            }

            let (report, path) = self.attempt(kind, space, overall.sub(budget));
            if let (Outcome::Scored(card), Some(path)) = (&report.outcome, path) {
                if best.as_ref().is_none_or(|(_, b, _)| card.score > b.score) {
                    best = Some((path, *card, kind));
                }
            }
            reports.push(report);
        }

        if best.is_none() {
            warn!("no primary strategy found a path, running fallback");
            let remaining = overall.remaining();
            let (report, path) = self.attempt(StrategyKind::Fallback, space, overall.sub(remaining));
            if let (Outcome::Scored(card), Some(path)) = (&report.outcome, path) {
                best = Some((path, *card, StrategyKind::Fallback));
            }
            reports.push(report);
        }

        let elapsed = overall.elapsed();
        let solution = match best {
            Some((path, card, kind)) => Solution {
                path,
                winner: Some(kind),
                score: Some(card),
                reports,
                elapsed,
            },
            None => Solution {
                path: Vec::new(),
                winner: None,
                score: None,
                reports,
                elapsed,
            },
        };

        for (rank, (report, card)) in solution.ranking().into_iter().enumerate() {
            info!(
                "#{} {}: score {}, {} goals, {} steps, {:?}",
                rank + 1,
                report.kind,
                card.score,
                card.goals_collected,
                card.path_len,
                report.elapsed
            );
        }
        match (solution.winner, solution.score) {
            (Some(kind), Some(card)) => info!(
                "{kind} wins with score {} ({} goals, {} steps) in {elapsed:?}",
                card.score, card.goals_collected, card.path_len
            ),
            _ => info!("no path found in {elapsed:?}"),
        }
        solution
    }

    fn attempt<S: GoalSpace>(
        &self,
        kind: StrategyKind,
        space: &S,
        deadline: Deadline,
    ) -> (StrategyReport, Option<Path>) {
        let (outcome, path) = match self.run_strategy(kind, space, &deadline) {
            Err(err) => {
                warn!("{kind}: {err}");
                (Outcome::Failed(err), None)
            }
            Ok(path) if path.is_empty() => (Outcome::NoPath, None),
            Ok(path) => match score_path(space, &path) {
                Ok(card) => (Outcome::Scored(card), Some(path)),
                Err(err) => {
                    warn!("{kind}: discarding path: {err}");
                    (Outcome::Invalid(err), None)
                }
            },
        };
        let elapsed = deadline.elapsed();
        match &outcome {
            Outcome::Scored(card) => debug!("{kind}: score {} in {elapsed:?}", card.score),
            other => debug!("{kind}: {other:?} in {elapsed:?}"),
        }
        let report = StrategyReport {
            kind,
            outcome,
            elapsed,
            budget: deadline.limit(),
        };
        (report, path)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
