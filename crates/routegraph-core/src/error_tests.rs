//! Tests for error display and matching.

use super::error::Error;

#[test]
fn test_node_exists_display() {
    let err = Error::NodeExists("depot".to_string());
    assert_eq!(err.to_string(), "Node already exists: depot");
}

#[test]
fn test_invalid_weight_display() {
    let err = Error::InvalidWeight { weight: -2.5 };
    assert_eq!(err.to_string(), "Invalid edge weight: -2.5");
}

#[test]
fn test_invalid_weight_matches() {
    let err = Error::InvalidWeight { weight: f64::NAN };
    assert!(matches!(err, Error::InvalidWeight { .. }));
}
