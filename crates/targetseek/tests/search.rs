//! End-to-end searches through the facade API.

use targetseek::prelude::*;
use targetseek::{run_search_with_config, CsvSource, Tolerance};

#[test]
fn sum_target_reachable_two_ways() {
    let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
    let report = run_search_with_config(
        &set,
        &SearchRequest::new(Mode::Sum, 9.0),
        SearchConfig::default(),
    )
    .unwrap();

    let solution = &report.matches[0].solution;
    // Either [7, 2] or [9] is a valid witness.
    assert_eq!(solution.values().sum::<f64>(), 9.0);
}

#[test]
fn product_of_all_values() {
    let set = ValueSet::from_values([2.0, 3.0, 5.0]).unwrap();
    let report = run_search_with_config(
        &set,
        &SearchRequest::new(Mode::Product, 30.0),
        SearchConfig::default(),
    )
    .unwrap();

    let solution = &report.matches[0].solution;
    assert_eq!(solution.values().collect::<Vec<_>>(), vec![2.0, 3.0, 5.0]);
}

#[test]
fn unreachable_sum_is_an_empty_report() {
    let set = ValueSet::from_values([1.0, 2.0, 4.0]).unwrap();
    let report = run_search_with_config(
        &set,
        &SearchRequest::new(Mode::Sum, 50.0),
        SearchConfig::default(),
    )
    .unwrap();
    assert!(report.is_empty());
}

#[test]
fn empty_value_set_matches_sum_zero() {
    let set = ValueSet::from_values([]).unwrap();
    let report = run_search_with_config(
        &set,
        &SearchRequest::new(Mode::Sum, 0.0),
        SearchConfig::default(),
    )
    .unwrap();
    assert!(report.matches[0].solution.is_empty());
}

#[test]
fn csv_to_report_round_trip() {
    let csv = "\
amount,memo
3,rent
7,food
2,bus
9,books
";
    let source = CsvSource::from_reader(csv.as_bytes()).unwrap();
    let set = source.value_set(&["amount"]).unwrap();

    let report = run_search_with_config(
        &set,
        &SearchRequest::with_targets(Mode::Sum, vec![9.0, 50.0]),
        SearchConfig::default(),
    )
    .unwrap();

    assert_eq!(report.matches.len(), 1);
    let solution = &report.matches[0].solution;
    assert_eq!(solution.values().sum::<f64>(), 9.0);
    // Provenance survives the trip from file to report.
    assert_eq!(solution.points()[0].column(), Some("amount"));
}

#[test]
fn approximate_search_through_the_facade() {
    let set = ValueSet::from_values([10.0, 20.0]).unwrap();
    let request =
        SearchRequest::new(Mode::Sum, 29.0).with_tolerance(Tolerance::Absolute(1.0));
    let report =
        run_search_with_config(&set, &request, SearchConfig::default()).unwrap();
    assert_eq!(report.matches[0].solution.aggregate(), 30.0);
}
