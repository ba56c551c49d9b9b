#![cfg(feature = "dev")]
//! Tests for internal validation and sorting utilities.
//!
//! These tests exercise the internal layers directly:
//! - Validator checks (emptiness, rank bounds, duplicate parameters)
//! - Sorting helpers (ascending copies, fast paths)
//! - Algorithm passes called without the strategy wrappers
//!
//! ## Test Organization
//!
//! 1. **Validator** - Fail-fast checks
//! 2. **Sorting** - Ascending copies
//! 3. **Algorithms** - Direct pass invocation

use ringmin::internals::algorithms::{rank, scan, sorted};
use ringmin::internals::engine::validator::Validator;
use ringmin::internals::primitives::errors::RingMinError;
use ringmin::internals::primitives::ring::Ring;
use ringmin::internals::primitives::sorting::{ascending, ascending_floats};
use ringmin::internals::primitives::value::Value;

// ============================================================================
// Validator Tests
// ============================================================================

/// Test emptiness validation.
#[test]
fn test_validate_nonempty() {
    assert!(matches!(
        Validator::validate_nonempty(0),
        Err(RingMinError::EmptyInput)
    ));
    assert!(Validator::validate_nonempty(1).is_ok());
}

/// Test rank bound validation.
///
/// Verifies the boundary at rank == len.
#[test]
fn test_validate_rank_boundaries() {
    assert!(Validator::validate_rank(0, 3).is_ok());
    assert!(Validator::validate_rank(2, 3).is_ok());

    assert!(matches!(
        Validator::validate_rank(3, 3),
        Err(RingMinError::RankOutOfRange { rank: 3, len: 3 })
    ));
    assert!(Validator::validate_rank(10, 3).is_err());
}

/// Test duplicate parameter validation.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    assert!(matches!(
        Validator::validate_no_duplicates(Some("rank")),
        Err(RingMinError::DuplicateParameter { parameter: "rank" })
    ));
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test ascending copies of integer slices.
///
/// Verifies sorting and that the input is untouched.
#[test]
fn test_ascending() {
    let values = [3_i64, 1, 2];
    let sorted = ascending(&values);

    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(values, [3, 1, 2], "Input should not be mutated");
}

/// Test the already-sorted fast path.
#[test]
fn test_ascending_fast_path() {
    let values = [1_i64, 2, 2, 3];
    assert_eq!(ascending(&values), vec![1, 2, 2, 3]);
}

/// Test ascending copies of float slices.
#[test]
fn test_ascending_floats() {
    let values = [2.5_f64, -1.0, 0.5];
    let sorted = ascending_floats(&values);

    assert_eq!(sorted, vec![-1.0, 0.5, 2.5]);
}

// ============================================================================
// Algorithm Tests
// ============================================================================

/// Test the sort-based pass directly.
#[test]
fn test_sorted_smallest() {
    let ring: Ring<i64> = vec![9, 4, 7].into();
    assert_eq!(sorted::smallest(&ring).unwrap(), 4);

    let empty: Ring<i64> = Ring::new();
    assert!(matches!(
        sorted::smallest(&empty),
        Err(RingMinError::EmptyInput)
    ));
}

/// Test the rank-0 wrapper delegates to rank selection.
#[test]
fn test_rank_smallest_wrapper() {
    let ring: Ring<Value> = vec![Value::from(9_i64), Value::from(4_i64)].into();

    assert_eq!(
        rank::smallest(&ring).unwrap(),
        rank::nth_smallest(&ring, 0).unwrap()
    );
}

/// Test the scan pass over a rotated ring.
///
/// Verifies the accumulator seeds from the head wherever it points.
#[test]
fn test_scan_smallest_rotated() {
    let mut ring: Ring<Value> = [5_i64, 1, 4, 2].iter().copied().map(Value::from).collect();

    for steps in 0..ring.len() {
        assert_eq!(scan::smallest(&ring).unwrap(), 1);
        ring.rotate(steps);
    }
}
