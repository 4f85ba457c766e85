//! TargetSeek Solver - the target-value search engine.
//!
//! Given a [`ValueSet`](targetseek_core::ValueSet) and one or more targets,
//! the engine finds subsets whose aggregation matches each target:
//! - **Sum**: dynamic programming over a reachability table
//! - **Product**: pruned depth-first subset enumeration
//! - **Difference** / **Quotient**: pairwise search
//!
//! All searches are synchronous and request-scoped; runaway inputs are
//! rejected up front by configured limits rather than cancelled mid-flight.
//!
//! Logging levels:
//! - **INFO**: Search start/end with problem scale and timing
//! - **DEBUG**: Per-target outcomes

pub mod engine;
pub mod event;
pub mod solvers;
pub mod statistics;

#[cfg(test)]
mod engine_tests;

pub use engine::{SearchEngine, SearchReport, SearchRequest, TargetMatch};
pub use event::{SearchEventListener, SearchEventSupport};
pub use solvers::{
    DifferencePairSearch, QuotientPairSearch, SolveOutcome, SubsetProductSearch, SubsetSumSolver,
};
pub use statistics::SearchStatistics;
