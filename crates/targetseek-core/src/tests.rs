use crate::{DataPoint, Mode, SeekError, Solution, Tolerance, ValueSet};

#[test]
fn test_value_set_from_values() {
    let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
    assert_eq!(set.len(), 4);
    assert!(!set.is_empty());
    assert_eq!(set.value(0), Some(3.0));
    assert_eq!(set.value(3), Some(9.0));
    assert_eq!(set.value(4), None);
}

#[test]
fn test_value_set_rejects_nan() {
    let err = ValueSet::from_values([1.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, SeekError::InvalidInput(_)));
}

#[test]
fn test_value_set_rejects_infinity() {
    let err = ValueSet::from_values([f64::INFINITY]).unwrap_err();
    assert!(matches!(err, SeekError::InvalidInput(_)));
}

#[test]
fn test_value_set_allows_duplicates() {
    let set = ValueSet::from_values([5.0, 5.0, 5.0]).unwrap();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_data_point_provenance() {
    let point = DataPoint::with_provenance(12.5, "Amount", 7);
    assert_eq!(point.value(), 12.5);
    assert_eq!(point.column(), Some("Amount"));
    assert_eq!(point.row(), Some(7));

    let bare = DataPoint::new(1.0);
    assert_eq!(bare.column(), None);
    assert_eq!(bare.row(), None);
}

#[test]
fn test_mode_display_and_parse() {
    assert_eq!(Mode::Sum.to_string(), "sum");
    assert_eq!(Mode::Product.to_string(), "product");
    assert_eq!("Quotient".parse::<Mode>().unwrap(), Mode::Quotient);
    assert_eq!(" difference ".parse::<Mode>().unwrap(), Mode::Difference);
    assert!("average".parse::<Mode>().is_err());
}

#[test]
fn test_mode_pairwise() {
    assert!(!Mode::Sum.is_pairwise());
    assert!(!Mode::Product.is_pairwise());
    assert!(Mode::Difference.is_pairwise());
    assert!(Mode::Quotient.is_pairwise());
}

#[test]
fn test_tolerance_exact() {
    let tol = Tolerance::Exact;
    assert!(tol.matches(30.0, 30.0));
    assert!(!tol.matches(30.0, 30.5));
    assert_eq!(tol.absolute_for(100.0), 0.0);
}

#[test]
fn test_tolerance_absolute() {
    let tol = Tolerance::Absolute(0.5);
    assert!(tol.matches(9.4, 9.0));
    assert!(!tol.matches(9.6, 9.0));
}

#[test]
fn test_tolerance_relative() {
    let tol = Tolerance::Relative(0.05);
    assert!(tol.matches(104.0, 100.0));
    assert!(!tol.matches(106.0, 100.0));
    assert_eq!(tol.absolute_for(-200.0), 10.0);
}

#[test]
fn test_tolerance_validation() {
    assert!(Tolerance::Exact.validate().is_ok());
    assert!(Tolerance::Absolute(0.0).validate().is_ok());
    assert!(Tolerance::Absolute(-1.0).validate().is_err());
    assert!(Tolerance::Relative(f64::NAN).validate().is_err());
}

#[test]
fn test_solution_from_indices() {
    let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
    let solution = Solution::from_indices(&set, vec![1, 2], 9.0);
    assert_eq!(solution.len(), 2);
    assert_eq!(solution.indices(), &[1, 2]);
    assert_eq!(solution.values().collect::<Vec<_>>(), vec![7.0, 2.0]);
    assert_eq!(solution.aggregate(), 9.0);
}

#[test]
fn test_empty_solution() {
    let solution = Solution::empty(0.0);
    assert!(solution.is_empty());
    assert_eq!(solution.len(), 0);
    assert_eq!(solution.aggregate(), 0.0);
}
