//! # Error Types
//!
//! The three ways a submission can fail. Each variant's `Display` output is
//! the fixed user-facing message from the error catalog, so front-ends can
//! show `error.to_string()` directly.
//!
//! ## Example
//!
//! ```rust
//! use divide_core::errors::{DivisionError, Operand};
//!
//! let error = DivisionError::NoInput { operand: Operand::Divider };
//! assert_eq!(error.error_code(), "NO_INPUT");
//! assert!(!error.logs_diagnostic());
//! assert!(error.to_string().ends_with("Try again"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for divide_core operations
pub type DivisionResult<T> = Result<T, DivisionError>;

/// Fixed user-facing messages, one per error kind.
pub mod catalog {
    /// Shown when either field is left empty. The misspelling is part of the
    /// text users have always seen.
    pub const NO_INPUT: &str =
        "Divison not performed. Both values are required in inputs. Try again";

    /// Shown when either value is below zero
    pub const INVALID_INPUT: &str = "Division not performed. Invalid number provided. Try Again";

    /// Shown when a value is not a number at all; also replaces the page
    pub const CRITICAL: &str = "Something critical went wrong. Please reload the page.";
}

/// Which form field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Dividend,
    Divider,
}

impl Operand {
    /// Form field name
    pub fn field_name(&self) -> &'static str {
        match self {
            Operand::Dividend => "dividend",
            Operand::Divider => "divider",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Structured error for a rejected submission.
///
/// Variants are listed in the order the evaluator checks them. The offending
/// operand is kept for diagnostics only; it never changes the message.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DivisionError {
    /// A field was left empty
    #[error("{}", catalog::NO_INPUT)]
    NoInput { operand: Operand },

    /// A field coerced to a negative number
    #[error("{}", catalog::INVALID_INPUT)]
    InvalidInput { operand: Operand },

    /// A field did not coerce to a number. Fatal for the session.
    #[error("{}", catalog::CRITICAL)]
    Critical { operand: Operand },
}

impl DivisionError {
    /// The field that triggered the error
    pub fn operand(&self) -> Operand {
        match self {
            DivisionError::NoInput { operand }
            | DivisionError::InvalidInput { operand }
            | DivisionError::Critical { operand } => *operand,
        }
    }

    /// The fixed catalog message for this error
    pub fn message(&self) -> &'static str {
        match self {
            DivisionError::NoInput { .. } => catalog::NO_INPUT,
            DivisionError::InvalidInput { .. } => catalog::INVALID_INPUT,
            DivisionError::Critical { .. } => catalog::CRITICAL,
        }
    }

    /// Whether this error is written to the diagnostic log.
    ///
    /// Empty fields are a normal user slip and are only displayed.
    pub fn logs_diagnostic(&self) -> bool {
        !matches!(self, DivisionError::NoInput { .. })
    }

    /// Whether this error terminates the session
    pub fn is_fatal(&self) -> bool {
        matches!(self, DivisionError::Critical { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DivisionError::NoInput { .. } => "NO_INPUT",
            DivisionError::InvalidInput { .. } => "INVALID_INPUT",
            DivisionError::Critical { .. } => "CRITICAL",
        }
    }
}
