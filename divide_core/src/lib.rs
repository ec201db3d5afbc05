//! # divide_core - Floored Division Form Engine
//!
//! `divide_core` holds all of the logic behind the division form: turning
//! field text into numbers, validating the pair, computing the floored
//! quotient and deciding what the user and the developer get to see.
//! Front-ends (`divide_gui`, `divide_cli`) only own widgets and I/O.
//!
//! ## Design Philosophy
//!
//! - **Explicit targets**: the display sink and diagnostic log are passed in,
//!   never looked up globally
//! - **Errors as values**: the three failure kinds are a `DivisionError`
//!   returned by value, not strings compared after the fact
//! - **Terminal state**: a critical error ends the [`Session`], observable
//!   without a real page
//!
//! ## Quick Start
//!
//! ```rust
//! use divide_core::Session;
//!
//! let mut session = Session::new();
//! let outcome = session.submit("17", "5");
//!
//! assert!(outcome.is_success());
//! assert_eq!(session.sink().text(), "3");
//! ```
//!
//! ## Modules
//!
//! - [`numeric`] - Field text to number coercion
//! - [`evaluator`] - Validation order and floored division
//! - [`session`] - Ready/Terminated lifecycle of one form
//! - [`sink`] - Display targets
//! - [`diagnostics`] - Developer-facing log channel
//! - [`errors`] - Error kinds and the message catalog

pub mod diagnostics;
pub mod errors;
pub mod evaluator;
pub mod numeric;
pub mod session;
pub mod sink;

// Re-export commonly used types at crate root for convenience
pub use diagnostics::{DiagnosticLog, RecordingLog, TracingLog};
pub use errors::{catalog, DivisionError, DivisionResult, Operand};
pub use evaluator::{divide_into, evaluate, Operands, Quotient};
pub use numeric::{coerce, is_number};
pub use session::{Outcome, Page, Session, SessionState};
pub use sink::{DisplaySink, TextSink};
