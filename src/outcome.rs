// Copyright 2026 Martin Pool

//! Computed factorials, and how they're printed.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::trace;

use crate::options::{Format, Precision};

/// One computed factorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub n: i64,
    /// Decimal digits of `n!`, as a string so that wide values survive JSON readers.
    pub factorial: String,
}

impl Outcome {
    pub fn evaluate(n: i64, precision: Precision) -> factorial::Result<Outcome> {
        let factorial = match precision {
            Precision::Native => factorial::factorial(n)?.to_string(),
            Precision::Big => factorial::factorial_big(n)?.to_string(),
        };
        trace!(n, ?precision, digits = factorial.len(), "evaluated");
        Ok(Outcome { n, factorial })
    }
}

pub fn format_outcomes(outcomes: &[Outcome], format: Format) -> Result<String> {
    let mut s = String::new();
    match format {
        Format::Text => {
            for Outcome { n, factorial } in outcomes {
                writeln!(s, "{n}! = {factorial}")?;
            }
        }
        Format::Json => {
            s.push_str(&serde_json::to_string(outcomes)?);
            s.push('\n');
        }
    }
    Ok(s)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_and_big_print_the_same_digits() {
        assert_eq!(
            Outcome::evaluate(10, Precision::Native).unwrap(),
            Outcome::evaluate(10, Precision::Big).unwrap()
        );
    }

    #[test]
    fn native_overflow_is_reported() {
        assert_eq!(
            Outcome::evaluate(35, Precision::Native),
            Err(factorial::Error::Overflow { n: 35 })
        );
        assert!(Outcome::evaluate(35, Precision::Big).is_ok());
    }

    #[test]
    fn text_lines() {
        let outcomes = [0, 3].map(|n| Outcome::evaluate(n, Precision::Native).unwrap());
        assert_eq!(
            format_outcomes(&outcomes, Format::Text).unwrap(),
            "0! = 1\n3! = 6\n"
        );
    }

    #[test]
    fn json_array() {
        let outcomes = [Outcome::evaluate(2, Precision::Native).unwrap()];
        assert_eq!(
            format_outcomes(&outcomes, Format::Json).unwrap(),
            "[{\"n\":2,\"factorial\":\"2\"}]\n"
        );
    }

    #[test]
    fn nothing_to_print() {
        assert_eq!(format_outcomes(&[], Format::Text).unwrap(), "");
        assert_eq!(format_outcomes(&[], Format::Json).unwrap(), "[]\n");
    }
}
