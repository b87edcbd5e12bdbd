// Copyright 2026 Martin Pool

//! Errors from computing factorials.

use std::fmt;

/// Why a factorial could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input was negative.
    InvalidArgument { n: i64 },
    /// The result does not fit in a `u128`.
    Overflow { n: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { n } => {
                write!(f, "invalid argument {n}: factorial is undefined for negative numbers")
            }
            Error::Overflow { n } => write!(
                f,
                "{n}! overflows a 128-bit integer (largest native input is {max}); try --big",
                max = crate::MAX_NATIVE_INPUT
            ),
        }
    }
}

impl std::error::Error for Error {}
