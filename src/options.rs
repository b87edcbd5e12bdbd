// Copyright 2026 Martin Pool

//! Resolved options for one run, from the command line and environment.

use crate::Args;

/// How factorials are computed.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Precision {
    /// 128-bit unsigned integers; larger results are an error.
    #[default]
    Native,
    /// Arbitrary precision.
    Big,
}

/// How results are printed.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    /// One `N! = VALUE` line per number.
    #[default]
    Text,
    /// A single JSON array.
    Json,
}

#[derive(Default, Debug, Clone)]
pub struct Options {
    pub precision: Precision,
    pub format: Format,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Options {
        Options {
            precision: if args.big {
                Precision::Big
            } else {
                Precision::Native
            },
            format: if args.json { Format::Json } else { Format::Text },
        }
    }
}
