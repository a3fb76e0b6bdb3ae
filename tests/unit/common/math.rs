//! Unit tests for numeric helpers

use coin_sentiment::common::math::{
    is_above, is_below, last_value, mean, nearest, percent_change, population_std_dev,
};

#[test]
fn test_mean() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    assert_eq!(mean(&[]), None);
}

#[test]
fn test_population_std_dev_divides_by_n() {
    let values = [1.0, 2.0, 3.0];
    let sigma = population_std_dev(&values, 2.0);
    assert!((sigma - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert_eq!(population_std_dev(&[5.0, 5.0, 5.0], 5.0), 0.0);
}

#[test]
fn test_percent_change() {
    assert_eq!(percent_change(&[100.0, 110.0], 1), 10.0);
    assert_eq!(percent_change(&[100.0, 90.0, 95.0, 96.0, 97.0, 98.0, 99.0, 150.0], 7), 50.0);
}

#[test]
fn test_percent_change_short_series_is_zero() {
    assert_eq!(percent_change(&[100.0], 1), 0.0);
    assert_eq!(percent_change(&[100.0, 120.0, 130.0], 7), 0.0);
}

#[test]
fn test_nearest_level() {
    assert_eq!(nearest(&[10.0, 20.0, 30.0], 24.0), Some(20.0));
    assert_eq!(nearest(&[], 24.0), None);
}

#[test]
fn test_nearest_level_tie_keeps_first() {
    assert_eq!(nearest(&[10.0, 20.0], 15.0), Some(10.0));
}

#[test]
fn test_last_value() {
    assert_eq!(last_value(&[None, Some(1.0), Some(2.0)]), Some(2.0));
    assert_eq!(last_value(&[Some(1.0), None]), None);
    assert_eq!(last_value(&[]), None);
}

#[test]
fn test_comparisons_with_undefined_are_false() {
    assert!(is_above(Some(2.0), Some(1.0)));
    assert!(!is_above(Some(1.0), Some(1.0)));
    assert!(!is_above(None, Some(1.0)));
    assert!(!is_above(Some(1.0), None));
    assert!(is_below(Some(1.0), Some(2.0)));
    assert!(!is_below(None, None));
}
