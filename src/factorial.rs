// Copyright 2026 Martin Pool

//! The factorial function, in native and arbitrary precision.

use num_bigint::BigUint;
use tracing::trace;

use crate::{Error, Result};

/// The largest `n` whose factorial fits in a `u128`.
pub const MAX_NATIVE_INPUT: i64 = 34;

/// Compute `n!` as a `u128`.
///
/// `factorial(0)` is 1. Negative inputs are rejected with
/// [Error::InvalidArgument], and inputs above [MAX_NATIVE_INPUT] with
/// [Error::Overflow]: the product is never truncated.
pub fn factorial(n: i64) -> Result<u128> {
    let count = non_negative(n)?;
    (1..=count)
        .try_fold(1u128, |product, i| product.checked_mul(u128::from(i)))
        .ok_or_else(|| {
            trace!(n, "factorial overflows u128");
            Error::Overflow { n }
        })
}

/// Compute `n!` with arbitrary precision.
///
/// Only negative inputs fail; large inputs cost time and memory proportional
/// to the size of the result.
pub fn factorial_big(n: i64) -> Result<BigUint> {
    let count = non_negative(n)?;
    Ok((1..=count).fold(BigUint::from(1u32), |product, i| product * i))
}

fn non_negative(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| {
        trace!(n, "factorial of negative number");
        Error::InvalidArgument { n }
    })
}
