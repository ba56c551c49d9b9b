//! # ringmin — minimum and rank selection over circular sequences
//!
//! Given a fixed collection of numeric values arranged in a circular list,
//! find the smallest one. The same question is answered by three
//! interchangeable strategies, each with a different trade-off:
//!
//! * **Readable**: copy the ring, sort ascending, take the first element.
//!   O(n log n), integers only, as obvious as it gets.
//! * **Flexible**: normalize mixed representations (integers, both float
//!   widths, numeric text) to `f64`, sort, and select by rank (0 = the
//!   smallest, 1 = the second smallest, ...).
//! * **Performant**: a single O(n) pass over integers tracking the running
//!   minimum, with no sorting and no allocation.
//!
//! ## Quick Start
//!
//! ```rust
//! use ringmin::prelude::*;
//!
//! let ring: Ring<i64> = vec![42, 49, 86, 143, 234, 334, 401, 435, 2, 14, 21].into();
//!
//! let finder = RingMin::new().strategy(Readable).build()?;
//! let pick = finder.evaluate(&ring)?;
//!
//! assert_eq!(pick.value, 2);
//! # Result::<(), RingMinError>::Ok(())
//! ```
//!
//! ### Mixed representations and rank selection
//!
//! ```rust
//! use ringmin::prelude::*;
//!
//! let ring: Ring<Value> = vec![
//!     Value::from(5_i64),
//!     Value::from("3.5"),
//!     Value::from(2.0_f64),
//! ]
//! .into();
//!
//! let second_smallest = RingMin::new().rank(1).strategy(Flexible).build()?;
//! let pick = second_smallest.evaluate(&ring)?;
//!
//! assert_eq!(pick.value, 3.5);
//! # Result::<(), RingMinError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every runner returns `Result<Selection<_>, RingMinError>`. The `?`
//! operator is idiomatic, but errors can also be matched explicitly:
//!
//! ```rust
//! use ringmin::prelude::*;
//!
//! let ring: Ring<Value> = vec![Value::from(7_i64), Value::from("not_a_number")].into();
//!
//! let finder = RingMin::new().strategy(Flexible).build()?;
//!
//! match finder.evaluate(&ring) {
//!     Ok(pick) => println!("smallest: {}", pick.value),
//!     Err(e) => eprintln!("selection failed: {}", e),
//! }
//! # Result::<(), RingMinError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ringmin = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - the three selection passes.
mod algorithms;

// Layer 3: Engine - validation and output types.
mod engine;

// Layer 4: Strategies - strategy builders and runners.
mod strategies;

// High-level fluent API for ring selection.
mod api;

// Standard ring selection prelude.
pub mod prelude {
    pub use crate::api::{
        Ring, RingMinBuilder as RingMin, RingMinError, Selection,
        Strategy::{Flexible, Performant, Readable},
        Value,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod strategies {
        pub use crate::strategies::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
