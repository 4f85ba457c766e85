//! The search engine: request validation, solver dispatch, reporting.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use targetseek_config::SearchConfig;
use targetseek_core::{Mode, Result, SeekError, Solution, Tolerance, ValueSet};
use tracing::{debug, info};

use crate::event::{SearchEventListener, SearchEventSupport};
use crate::solvers::{
    DifferencePairSearch, QuotientPairSearch, SolveOutcome, SubsetProductSearch, SubsetSumSolver,
};
use crate::statistics::SearchStatistics;

/// One search request: targets, mode, and tolerance.
///
/// A request is consumed against a single value set and holds no state
/// afterwards. Repeating the same request against the same value set
/// produces an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Targets to search for, in order.
    pub targets: Vec<f64>,

    /// Aggregation mode.
    pub mode: Mode,

    /// Match tolerance.
    #[serde(default)]
    pub tolerance: Tolerance,
}

impl SearchRequest {
    /// Creates a single-target exact request.
    pub fn new(mode: Mode, target: f64) -> Self {
        Self {
            targets: vec![target],
            mode,
            tolerance: Tolerance::Exact,
        }
    }

    /// Creates a multi-target exact request.
    pub fn with_targets(mode: Mode, targets: Vec<f64>) -> Self {
        Self {
            targets,
            mode,
            tolerance: Tolerance::Exact,
        }
    }

    /// Sets the tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(SeekError::InvalidInput(
                "request must contain at least one target".to_string(),
            ));
        }
        for target in &self.targets {
            if !target.is_finite() {
                return Err(SeekError::InvalidInput(format!(
                    "target {target} is not finite"
                )));
            }
        }
        self.tolerance.validate()
    }
}

/// A matched target with its witnessing subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetMatch {
    /// The requested target.
    pub target: f64,

    /// The subset whose aggregation matched it.
    pub solution: Solution,
}

/// The result of a complete search request.
///
/// Targets with no solution are simply absent from `matches`; an all-miss
/// request still produces an `Ok` report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// The mode the request was searched under.
    pub mode: Mode,

    /// One entry per matched target, in request order.
    pub matches: Vec<TargetMatch>,

    /// Timing and exploration counters.
    pub statistics: SearchStatistics,
}

impl SearchReport {
    /// Returns whether no target matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the match for `target`, if it was found.
    pub fn match_for(&self, target: f64) -> Option<&TargetMatch> {
        self.matches.iter().find(|m| m.target == target)
    }
}

/// Executes search requests against value sets.
///
/// The engine is synchronous and single-threaded: each call to
/// [`SearchEngine::search`] runs one complete computation on the caller's
/// thread with no shared mutable state, so one engine can serve requests
/// back to back.
///
/// # Example
///
/// ```
/// use targetseek_config::SearchConfig;
/// use targetseek_core::{Mode, ValueSet};
/// use targetseek_solver::{SearchEngine, SearchRequest};
///
/// let engine = SearchEngine::new(SearchConfig::default());
/// let set = ValueSet::from_values([2.0, 3.0, 5.0]).unwrap();
/// let report = engine
///     .search(&set, &SearchRequest::new(Mode::Product, 30.0))
///     .unwrap();
/// assert_eq!(report.matches.len(), 1);
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    events: SearchEventSupport,
}

impl SearchEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            events: SearchEventSupport::new(),
        }
    }

    /// Registers a progress listener.
    pub fn add_listener(&mut self, listener: Arc<dyn SearchEventListener>) {
        self.events.add_listener(listener);
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs a request against a value set.
    ///
    /// # Errors
    ///
    /// - [`SeekError::InvalidInput`] for an empty target list, non-finite
    ///   targets, a negative tolerance, or values the mode cannot accept.
    /// - [`SeekError::SizeLimitExceeded`] when a configured limit would be
    ///   breached; the request fails as a whole since results so far would
    ///   be misleading.
    pub fn search(&self, set: &ValueSet, request: &SearchRequest) -> Result<SearchReport> {
        request.validate()?;
        if set.len() > self.config.limits.max_values {
            return Err(SeekError::SizeLimitExceeded(format!(
                "{} values exceed the configured limit of {}",
                set.len(),
                self.config.limits.max_values
            )));
        }

        info!(
            event = "search_start",
            mode = %request.mode,
            value_count = set.len(),
            target_count = request.targets.len(),
        );
        self.events
            .fire_search_started(set.len(), request.targets.len());

        let started = Instant::now();
        let mut matches = Vec::new();
        let mut explored: u64 = 0;
        for (target_index, &target) in request.targets.iter().enumerate() {
            self.events.fire_target_started(target_index, target);

            let outcome = self.solve_one(set, target, request)?;
            explored += outcome.explored;
            match outcome.solution {
                Some(solution) => {
                    debug!(
                        event = "target_matched",
                        target,
                        subset_size = solution.len(),
                        aggregate = solution.aggregate(),
                    );
                    self.events.fire_match_found(target, &solution);
                    matches.push(TargetMatch { target, solution });
                }
                None => {
                    debug!(event = "target_missed", target);
                }
            }
        }

        let duration = started.elapsed();
        let statistics = SearchStatistics {
            duration,
            targets_searched: request.targets.len(),
            matches_found: matches.len(),
            explored,
        };
        info!(
            event = "search_end",
            matches_found = statistics.matches_found,
            explored = statistics.explored,
            duration_ms = duration.as_millis() as u64,
        );
        self.events.fire_search_ended(matches.len(), duration);

        Ok(SearchReport {
            mode: request.mode,
            matches,
            statistics,
        })
    }

    fn solve_one(
        &self,
        set: &ValueSet,
        target: f64,
        request: &SearchRequest,
    ) -> Result<SolveOutcome> {
        let tolerance: Tolerance = request.tolerance;
        match request.mode {
            Mode::Sum => SubsetSumSolver::new(&self.config).solve(set, target, tolerance),
            Mode::Product => SubsetProductSearch::new(&self.config).solve(set, target, tolerance),
            Mode::Difference => {
                DifferencePairSearch::new(&self.config).solve(set, target, tolerance)
            }
            Mode::Quotient => QuotientPairSearch::new(&self.config).solve(set, target, tolerance),
        }
    }
}
