//! Ring Selection Examples
//!
//! This example demonstrates the three selection strategies:
//! - Sort-based minimum over an integer ring (Readable)
//! - Rank selection over mixed representations (Flexible)
//! - Single-pass linear scan (Performant)
//! - Error reporting for unparsable, unsupported, and non-integer elements
//!
//! Each scenario includes the expected output as comments.

use ringmin::prelude::*;

fn main() -> Result<(), RingMinError> {
    println!("{}", "=".repeat(72));
    println!("Ring Selection - Examples");
    println!("{}", "=".repeat(72));
    println!();

    // Run all example scenarios
    example_1_three_strategies()?;
    example_2_rank_selection()?;
    example_3_error_reporting()?;

    Ok(())
}

/// Example 1: Three Strategies, One Answer
/// Runs every strategy over the same sample ring.
fn example_1_three_strategies() -> Result<(), RingMinError> {
    println!("Example 1: Three Strategies, One Answer");
    println!("{}", "-".repeat(72));

    // Static sample data arranged in a ring
    let samples: [i64; 11] = [42, 49, 86, 143, 234, 334, 401, 435, 2, 14, 21];

    let int_ring: Ring<i64> = samples.to_vec().into();
    let mixed_ring: Ring<Value> = samples.iter().copied().map(Value::from).collect();

    let readable = RingMin::new().strategy(Readable).build()?;
    let flexible = RingMin::new().strategy(Flexible).build()?;
    let performant = RingMin::new().strategy(Performant).build()?;

    println!("smallest via sorted copy    : {}", readable.evaluate(&int_ring)?.value);
    println!("smallest via rank selection : {}", flexible.evaluate(&mixed_ring)?.value);
    println!("smallest via linear scan    : {}", performant.evaluate(&mixed_ring)?.value);

    /* Expected Output:
    smallest via sorted copy    : 2
    smallest via rank selection : 2
    smallest via linear scan    : 2
    */

    println!();
    Ok(())
}

/// Example 2: Rank Selection over Mixed Representations
/// Integers, numeric text, and floats in one ring, selected by rank.
fn example_2_rank_selection() -> Result<(), RingMinError> {
    println!("Example 2: Rank Selection over Mixed Representations");
    println!("{}", "-".repeat(72));

    let ring: Ring<Value> = vec![
        Value::from(5_i64),
        Value::from("3.5"),
        Value::from(2.0_f64),
    ]
    .into();

    for rank in 0..ring.len() {
        let finder = RingMin::new().rank(rank).strategy(Flexible).build()?;
        let pick = finder.evaluate(&ring)?;
        println!("rank {} -> {}", rank, pick.value);
    }

    // The full report form of the last selection
    let finder = RingMin::new().rank(2).strategy(Flexible).build()?;
    println!("{}", finder.evaluate(&ring)?);

    /* Expected Output:
    rank 0 -> 2
    rank 1 -> 3.5
    rank 2 -> 5

    Selection:
      Strategy: rank selection
      Elements: 3
      Rank:     2
      Value:    5
    */

    println!();
    Ok(())
}

/// Example 3: Error Reporting
/// Selection failures are printed and execution continues.
fn example_3_error_reporting() -> Result<(), RingMinError> {
    println!("Example 3: Error Reporting");
    println!("{}", "-".repeat(72));

    let flexible = RingMin::new().strategy(Flexible).build()?;
    let performant = RingMin::new().strategy(Performant).build()?;

    // Unparsable text under the flexible strategy
    let bad_text: Ring<Value> = vec![Value::from(7_i64), Value::from("not_a_number")].into();
    match flexible.evaluate(&bad_text) {
        Ok(pick) => println!("unexpected success: {}", pick.value),
        Err(e) => println!("flexible   : {}", e),
    }

    // A boolean is not a recognized numeric representation
    let bad_kind: Ring<Value> = vec![Value::from(7_i64), Value::from(true)].into();
    match flexible.evaluate(&bad_kind) {
        Ok(pick) => println!("unexpected success: {}", pick.value),
        Err(e) => println!("flexible   : {}", e),
    }

    // The scan strategy insists on integers
    let not_integers: Ring<Value> = vec![Value::from(7_i64), Value::from(1.5_f64)].into();
    match performant.evaluate(&not_integers) {
        Ok(pick) => println!("unexpected success: {}", pick.value),
        Err(e) => println!("performant : {}", e),
    }

    /* Expected Output:
    flexible   : Unparsable numeric text: "not_a_number"
    flexible   : Unsupported element representation: bool
    performant : Expected an integer element, found f64
    */

    println!();
    Ok(())
}
