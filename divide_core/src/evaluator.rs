//! # Division Evaluator
//!
//! Validates a pair of raw field values and computes their floored quotient.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. either field empty → [`DivisionError::NoInput`]
//! 2. either value below zero → [`DivisionError::InvalidInput`]
//! 3. either value not a number → [`DivisionError::Critical`]
//!
//! Step 2 compares the coerced value, and NaN never compares below zero, so
//! text like `"-abc"` is reported as critical rather than invalid.
//!
//! A zero divider is not special-cased: the IEEE-754 result (`Infinity`,
//! `-Infinity` or `NaN`) is floored and displayed like any other quotient.
//!
//! ## Example
//!
//! ```rust
//! use divide_core::evaluator::{evaluate, Operands};
//!
//! let quotient = evaluate(&Operands::new("20", "3")).unwrap();
//! assert_eq!(quotient.to_string(), "6");
//!
//! let by_zero = evaluate(&Operands::new("10", "0")).unwrap();
//! assert_eq!(by_zero.to_string(), "Infinity");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::diagnostics::DiagnosticLog;
use crate::errors::{DivisionError, DivisionResult, Operand};
use crate::numeric::coerce;
use crate::sink::DisplaySink;

/// Raw text captured from the two form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    pub dividend: String,
    pub divider: String,
}

impl Operands {
    pub fn new(dividend: impl Into<String>, divider: impl Into<String>) -> Self {
        Operands {
            dividend: dividend.into(),
            divider: divider.into(),
        }
    }
}

/// Floored result of a division.
///
/// Displays the way a browser prints numbers, so `5`, not `5.0`, and
/// `Infinity` rather than `inf`. Serializes as that same text because JSON
/// has no spelling for the non-finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotient(f64);

impl Quotient {
    /// Floor `dividend / divider`
    pub fn from_division(dividend: f64, divider: f64) -> Self {
        Quotient((dividend / divider).floor())
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            // Covers negative zero too
            f.write_str("0")
        } else if value.abs() < 1e21 {
            write!(f, "{}", value)
        } else {
            let exponent_form = format!("{:e}", value);
            match exponent_form.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exponent)
                }
                _ => f.write_str(&exponent_form),
            }
        }
    }
}

impl Serialize for Quotient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Validate both fields and compute the floored quotient.
///
/// Pure: no display, no logging. See [`divide_into`] for the version that
/// applies the side effects.
pub fn evaluate(operands: &Operands) -> DivisionResult<Quotient> {
    for (operand, text) in fields(operands) {
        if text.is_empty() {
            return Err(DivisionError::NoInput { operand });
        }
    }

    let dividend = coerce(&operands.dividend);
    let divider = coerce(&operands.divider);

    for (operand, value) in [(Operand::Dividend, dividend), (Operand::Divider, divider)] {
        if value < 0.0 {
            return Err(DivisionError::InvalidInput { operand });
        }
    }

    for (operand, value) in [(Operand::Dividend, dividend), (Operand::Divider, divider)] {
        if value.is_nan() {
            return Err(DivisionError::Critical { operand });
        }
    }

    Ok(Quotient::from_division(dividend, divider))
}

/// Evaluate and write the outcome to `sink`, logging errors that warrant it.
///
/// The sink receives the quotient text or the error's catalog message. The
/// error is still returned so the caller can react to fatal ones.
pub fn divide_into<S, L>(
    operands: &Operands,
    sink: &mut S,
    log: &mut L,
) -> DivisionResult<Quotient>
where
    S: DisplaySink + ?Sized,
    L: DiagnosticLog + ?Sized,
{
    match evaluate(operands) {
        Ok(quotient) => {
            tracing::debug!(
                dividend = %operands.dividend,
                divider = %operands.divider,
                quotient = %quotient,
                "division performed"
            );
            sink.display(&quotient.to_string());
            Ok(quotient)
        }
        Err(error) => {
            sink.display(error.message());
            if error.logs_diagnostic() {
                log.record(&error, operands);
            }
            Err(error)
        }
    }
}

fn fields(operands: &Operands) -> [(Operand, &str); 2] {
    [
        (Operand::Dividend, operands.dividend.as_str()),
        (Operand::Divider, operands.divider.as_str()),
    ]
}
