//! TargetSeek - find subsets of a dataset that hit a target value.
//!
//! Zero-wiring API: build a [`ValueSet`], describe what you want with a
//! [`SearchRequest`], and call [`run_search`].
//!
//! # Example
//!
//! ```rust
//! use targetseek::prelude::*;
//!
//! let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
//! let report = run_search(&set, &SearchRequest::new(Mode::Sum, 9.0)).unwrap();
//! assert!(!report.is_empty());
//! ```

// Core types
pub use targetseek_core::{DataPoint, Mode, Result, SeekError, Solution, Tolerance, ValueSet};

// Engine and reporting
pub use targetseek_solver::{
    SearchEngine, SearchEventListener, SearchReport, SearchRequest, SearchStatistics, TargetMatch,
};

// Configuration
pub use targetseek_config::{ConfigError, LimitsConfig, SearchConfig};

// Tabular ingestion boundary
pub use targetseek_ingest::CsvSource;

// Console rendering (optional)
#[cfg(feature = "console")]
pub use targetseek_console::ReportRenderer;

mod search;
pub use search::{run_search, run_search_with_config};

pub mod prelude {
    pub use super::run_search;
    pub use super::{DataPoint, Mode, Solution, Tolerance, ValueSet};
    pub use super::{SearchConfig, SearchEngine, SearchReport, SearchRequest};
}
