// Copyright 2026 Martin Pool

//! Exit codes from `factorial`.
//!
//! These are distinct so that scripts can tell bad input apart from a result
//! that is too large for native precision.

use std::process::ExitCode;

/// Every factorial was computed and printed.
pub const SUCCESS: i32 = 0;

/// The wrong arguments, etc.
pub const USAGE: i32 = 1;

/// One of the numbers was negative.
pub const INVALID_ARGUMENT: i32 = 2;

/// A factorial was too large for 128 bits, and `--big` was not given.
pub const OVERFLOW: i32 = 3;

/// An internal software error, from sysexit.
pub const SOFTWARE: i32 = 70;

/// Choose the exit code for an error that stopped the program.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err
        .chain()
        .find_map(|cause| cause.downcast_ref::<factorial::Error>())
    {
        Some(factorial::Error::InvalidArgument { .. }) => INVALID_ARGUMENT,
        Some(factorial::Error::Overflow { .. }) => OVERFLOW,
        None => SOFTWARE,
    }
}

/// Convert an i32 exit code to `ExitCode`.
///
/// All exit codes defined in this module fit in u8.
///
/// # Panics
///
/// Panics if the exit code is not in the valid range 0-255.
pub fn code_to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(
        u8::try_from(code).unwrap_or_else(|_| panic!("exit code out of range: {code}")),
    )
}
