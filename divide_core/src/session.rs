//! # Form Session
//!
//! The lifetime of one open form. A session starts `Ready` and accepts
//! submissions until a critical error moves it to `Terminated`. There is no
//! way back: the page is replaced with the critical message and a new session
//! (a reload) is the only recovery.
//!
//! ```text
//! Ready ──submit(ok / no input / invalid)──> Ready
//!   │
//!   └──submit(critical)──> Terminated ──submit──> Terminated (ignored)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use divide_core::session::{Outcome, Session, SessionState};
//!
//! let mut session = Session::recording();
//! assert!(matches!(session.submit("10", "4"), Outcome::Quotient { .. }));
//! assert_eq!(session.sink().text(), "2");
//!
//! session.submit("ten", "4");
//! assert_eq!(session.state(), SessionState::Terminated);
//! assert_eq!(session.submit("10", "4"), Outcome::Ignored);
//! ```

use serde::Serialize;

use crate::diagnostics::{DiagnosticLog, RecordingLog, TracingLog};
use crate::errors::{catalog, DivisionError};
use crate::evaluator::{divide_into, Operands, Quotient};
use crate::sink::{DisplaySink, TextSink};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Ready,
    Terminated,
}

/// What a front-end should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The normal form with its result line
    Form,
    /// The whole page replaced by this text
    Replaced(&'static str),
}

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Division performed; the quotient is on the sink
    Quotient { value: Quotient },
    /// Recoverable error; its message is on the sink
    Rejected { error: DivisionError },
    /// Critical error; the session is now terminated
    Halted { error: DivisionError },
    /// Submitted after termination; nothing happened
    Ignored,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Quotient { .. })
    }
}

/// One open form: a sink, a diagnostic log and the lifecycle state.
#[derive(Debug, Clone, Default)]
pub struct Session<S = TextSink, L = TracingLog> {
    sink: S,
    log: L,
    state: SessionState,
}

impl Session<TextSink, TracingLog> {
    /// Session with an in-memory sink that logs through `tracing`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Session<TextSink, RecordingLog> {
    /// Session that keeps its diagnostic entries in memory
    pub fn recording() -> Self {
        Self::with_parts(TextSink::default(), RecordingLog::default())
    }
}

impl<S: DisplaySink, L: DiagnosticLog> Session<S, L> {
    pub fn with_parts(sink: S, log: L) -> Self {
        Session {
            sink,
            log,
            state: SessionState::Ready,
        }
    }

    /// Submit the two field values.
    ///
    /// In `Ready` this evaluates, writes the sink and logs as needed. A
    /// critical error terminates the session. In `Terminated` nothing is
    /// touched.
    pub fn submit(&mut self, dividend: &str, divider: &str) -> Outcome {
        self.submit_operands(&Operands::new(dividend, divider))
    }

    pub fn submit_operands(&mut self, operands: &Operands) -> Outcome {
        if self.is_terminated() {
            tracing::debug!("submission ignored, session terminated");
            return Outcome::Ignored;
        }

        match divide_into(operands, &mut self.sink, &mut self.log) {
            Ok(value) => Outcome::Quotient { value },
            Err(error) if error.is_fatal() => {
                self.state = SessionState::Terminated;
                Outcome::Halted { error }
            }
            Err(error) => Outcome::Rejected { error },
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// The page a front-end should render right now
    pub fn page(&self) -> Page {
        match self.state {
            SessionState::Ready => Page::Form,
            SessionState::Terminated => Page::Replaced(catalog::CRITICAL),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Operand;

    #[test]
    fn test_valid_submission() {
        let mut session = Session::recording();
        let outcome = session.submit("10", "2");

        assert!(outcome.is_success());
        assert_eq!(session.sink().text(), "5");
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.page(), Page::Form);
    }

    #[test]
    fn test_no_input_displays_without_logging() {
        let mut session = Session::recording();
        let outcome = session.submit("", "2");

        assert_eq!(
            outcome,
            Outcome::Rejected { error: DivisionError::NoInput { operand: Operand::Dividend } }
        );
        assert_eq!(session.sink().text(), catalog::NO_INPUT);
        assert!(session.log().entries().is_empty());
        assert!(!session.is_terminated());
    }

    #[test]
    fn test_invalid_input_displays_and_logs_once() {
        let mut session = Session::recording();
        session.submit("-5", "2");

        assert_eq!(session.sink().text(), catalog::INVALID_INPUT);
        assert_eq!(session.log().entries().len(), 1);
        assert!(!session.is_terminated());

        // Session stays usable
        session.submit("9", "3");
        assert_eq!(session.sink().text(), "3");
    }

    #[test]
    fn test_critical_terminates() {
        let mut session = Session::recording();
        let outcome = session.submit("abc", "2");

        assert_eq!(
            outcome,
            Outcome::Halted { error: DivisionError::Critical { operand: Operand::Dividend } }
        );
        assert_eq!(session.sink().text(), catalog::CRITICAL);
        assert_eq!(session.log().entries().len(), 1);
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(session.page(), Page::Replaced(catalog::CRITICAL));
    }

    #[test]
    fn test_terminated_session_ignores_submissions() {
        let mut session = Session::recording();
        session.submit("abc", "2");

        assert_eq!(session.submit("10", "2"), Outcome::Ignored);
        assert_eq!(session.submit("", ""), Outcome::Ignored);
        assert_eq!(session.sink().text(), catalog::CRITICAL);
        assert_eq!(session.log().entries().len(), 1);
    }

    #[test]
    fn test_outcome_json() {
        let mut session = Session::recording();

        let json = serde_json::to_value(session.submit("10", "0")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "quotient", "value": "Infinity" }));

        let json = serde_json::to_value(session.submit("1", "")).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["error"]["type"], "NoInput");
        assert_eq!(json["error"]["details"]["operand"], "divider");

        let json = serde_json::to_value(session.submit("x", "1")).unwrap();
        assert_eq!(json["status"], "halted");

        let json = serde_json::to_value(session.submit("1", "1")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ignored" }));
    }

    #[test]
    fn test_custom_sink() {
        let mut session = Session::with_parts(String::new(), RecordingLog::default());
        session.submit("8", "3");
        assert_eq!(session.sink(), "2");
    }
}
