//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the ring selection API. The prelude should provide a
//! one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use ringmin::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for basic usage.
#[test]
fn test_prelude_imports() {
    let ring: Ring<i64> = vec![3, 1, 2].into();

    // Verify RingMin (RingMinBuilder), strategy markers, and Result are useable
    let result = RingMin::new().strategy(Readable).build().unwrap().evaluate(&ring);

    assert!(result.is_ok(), "Basic selection should work with prelude imports");
}

/// Test strategy markers are available.
///
/// Verifies that all three strategy markers are exported.
#[test]
fn test_prelude_strategies() {
    let int_ring: Ring<i64> = vec![3, 1, 2].into();
    let mixed_ring: Ring<Value> = vec![Value::from(3_i64), Value::from(1_i64)].into();

    // Readable strategy
    let _ = RingMin::new()
        .strategy(Readable)
        .build()
        .unwrap()
        .evaluate(&int_ring);

    // Flexible strategy
    let _ = RingMin::new().strategy(Flexible).build();

    // Performant strategy
    let _ = RingMin::new()
        .strategy(Performant)
        .build()
        .unwrap()
        .evaluate(&mixed_ring);
}

/// Test complete workflow with prelude.
///
/// Verifies that a complete rank-selection workflow works with only
/// prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let ring: Ring<Value> = vec![
        Value::from(5_i64),
        Value::from("3.5"),
        Value::from(2.0_f64),
    ]
    .into();

    let pick: Selection<f64> = RingMin::new()
        .rank(1)
        .strategy(Flexible)
        .build()
        .unwrap()
        .evaluate(&ring)
        .expect("Complete workflow should succeed");

    assert_eq!(pick.value, 3.5);
    assert_eq!(pick.rank, 1);
    assert_eq!(pick.len, 3);
}

/// Test error types are available.
///
/// Verifies that error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let ring: Ring<Value> = Ring::new();

    let result = RingMin::new()
        .strategy(Flexible)
        .build()
        .unwrap()
        .evaluate(&ring);

    // Should be able to match on error types from prelude
    assert!(matches!(result, Err(RingMinError::EmptyInput)));
}
