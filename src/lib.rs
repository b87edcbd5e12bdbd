// Copyright 2026 Martin Pool

//! Exact factorials.
//!
//! [factorial] computes `n!` in a native `u128` and reports overflow rather
//! than wrapping; [factorial_big] computes it with arbitrary precision.
//! Both reject negative inputs.
//!
//! ```
//! assert_eq!(factorial::factorial(10), Ok(3_628_800));
//! assert!(factorial::factorial(-1).is_err());
//! ```

mod error;
mod factorial;

pub use crate::error::{Error, Result};
pub use crate::factorial::{factorial, factorial_big, MAX_NATIVE_INPUT};
