use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use targetseek_config::SearchConfig;
use targetseek_core::{Mode, SeekError, Solution, Tolerance, ValueSet};

use crate::engine::{SearchEngine, SearchRequest};
use crate::event::SearchEventListener;

fn engine() -> SearchEngine {
    SearchEngine::new(SearchConfig::default())
}

#[test]
fn test_single_target_sum() {
    let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
    let report = engine()
        .search(&set, &SearchRequest::new(Mode::Sum, 9.0))
        .unwrap();

    assert!(!report.is_empty());
    assert_eq!(report.mode, Mode::Sum);
    let found = report.match_for(9.0).expect("9 is reachable");
    assert_eq!(found.solution.values().sum::<f64>(), 9.0);
}

#[test]
fn test_multi_target_collects_hits_and_skips_misses() {
    let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
    let request = SearchRequest::with_targets(Mode::Sum, vec![9.0, 50.0, 5.0]);
    let report = engine().search(&set, &request).unwrap();

    assert_eq!(report.matches.len(), 2);
    assert!(report.match_for(9.0).is_some());
    assert!(report.match_for(50.0).is_none());
    assert!(report.match_for(5.0).is_some());

    assert_eq!(report.statistics.targets_searched, 3);
    assert_eq!(report.statistics.matches_found, 2);
    assert!(report.statistics.explored > 0);
}

#[test]
fn test_product_dispatch() {
    let set = ValueSet::from_values([2.0, 3.0, 5.0]).unwrap();
    let report = engine()
        .search(&set, &SearchRequest::new(Mode::Product, 30.0))
        .unwrap();
    let found = report.match_for(30.0).expect("2 * 3 * 5 reaches 30");
    assert_eq!(found.solution.aggregate(), 30.0);
}

#[test]
fn test_difference_and_quotient_dispatch() {
    let set = ValueSet::from_values([3.0, 12.0]).unwrap();

    let diff = engine()
        .search(&set, &SearchRequest::new(Mode::Difference, 9.0))
        .unwrap();
    assert_eq!(diff.matches[0].solution.aggregate(), 9.0);

    let quot = engine()
        .search(&set, &SearchRequest::new(Mode::Quotient, 4.0))
        .unwrap();
    assert_eq!(quot.matches[0].solution.aggregate(), 4.0);
}

#[test]
fn test_all_miss_report_is_ok_and_empty() {
    let set = ValueSet::from_values([1.0, 2.0, 4.0]).unwrap();
    let report = engine()
        .search(&set, &SearchRequest::new(Mode::Sum, 50.0))
        .unwrap();
    assert!(report.is_empty());
    assert_eq!(report.statistics.matches_found, 0);
}

#[test]
fn test_rejects_empty_target_list() {
    let set = ValueSet::from_values([1.0]).unwrap();
    let request = SearchRequest::with_targets(Mode::Sum, vec![]);
    let err = engine().search(&set, &request).unwrap_err();
    assert!(matches!(err, SeekError::InvalidInput(_)));
}

#[test]
fn test_rejects_non_finite_target() {
    let set = ValueSet::from_values([1.0]).unwrap();
    let err = engine()
        .search(&set, &SearchRequest::new(Mode::Sum, f64::NAN))
        .unwrap_err();
    assert!(matches!(err, SeekError::InvalidInput(_)));
}

#[test]
fn test_rejects_negative_tolerance() {
    let set = ValueSet::from_values([1.0]).unwrap();
    let request = SearchRequest::new(Mode::Sum, 1.0).with_tolerance(Tolerance::Absolute(-0.5));
    let err = engine().search(&set, &request).unwrap_err();
    assert!(matches!(err, SeekError::InvalidInput(_)));
}

#[test]
fn test_value_count_limit() {
    let engine = SearchEngine::new(SearchConfig::new().with_max_values(2));
    let set = ValueSet::from_values([1.0, 2.0, 3.0]).unwrap();
    let err = engine
        .search(&set, &SearchRequest::new(Mode::Sum, 3.0))
        .unwrap_err();
    assert!(matches!(err, SeekError::SizeLimitExceeded(_)));
}

#[test]
fn test_idempotent_matches() {
    let set = ValueSet::from_values([4.0, 1.0, 6.0, 3.0]).unwrap();
    let request = SearchRequest::with_targets(Mode::Sum, vec![7.0, 10.0]);
    let engine = engine();

    let first = engine.search(&set, &request).unwrap();
    let second = engine.search(&set, &request).unwrap();
    assert_eq!(first.matches, second.matches);
}

#[derive(Debug, Default)]
struct CountingListener {
    started: AtomicUsize,
    targets: AtomicUsize,
    matches: AtomicUsize,
    ended: AtomicUsize,
}

impl SearchEventListener for CountingListener {
    fn on_search_started(&self, _value_count: usize, _target_count: usize) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_target_started(&self, _target_index: usize, _target: f64) {
        self.targets.fetch_add(1, Ordering::SeqCst);
    }

    fn on_match_found(&self, _target: f64, _solution: &Solution) {
        self.matches.fetch_add(1, Ordering::SeqCst);
    }

    fn on_search_ended(&self, _matches_found: usize, _duration: Duration) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_listener_receives_lifecycle_events() {
    let listener = Arc::new(CountingListener::default());
    let mut engine = engine();
    engine.add_listener(listener.clone());

    let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
    let request = SearchRequest::with_targets(Mode::Sum, vec![9.0, 50.0]);
    engine.search(&set, &request).unwrap();

    assert_eq!(listener.started.load(Ordering::SeqCst), 1);
    assert_eq!(listener.targets.load(Ordering::SeqCst), 2);
    assert_eq!(listener.matches.load(Ordering::SeqCst), 1);
    assert_eq!(listener.ended.load(Ordering::SeqCst), 1);
}
