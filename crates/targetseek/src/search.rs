//! Search entry point that hides the engine wiring.

use targetseek_config::SearchConfig;
use targetseek_core::{Result, ValueSet};
use targetseek_solver::{SearchEngine, SearchReport, SearchRequest};

/// Runs a search request with configuration from `targetseek.toml`.
///
/// Falls back to the default configuration when no config file is present
/// in the working directory.
pub fn run_search(set: &ValueSet, request: &SearchRequest) -> Result<SearchReport> {
    let config = SearchConfig::load("targetseek.toml").unwrap_or_default();
    run_search_with_config(set, request, config)
}

/// Runs a search request with an explicit configuration.
pub fn run_search_with_config(
    set: &ValueSet,
    request: &SearchRequest,
    config: SearchConfig,
) -> Result<SearchReport> {
    SearchEngine::new(config).search(set, request)
}
