//! # Diagnostic Log
//!
//! Developer-facing channel for rejected submissions. Users never see it.
//! Which errors reach it is decided by [`DivisionError::logs_diagnostic`].
//!
//! [`TracingLog`] forwards to `tracing`; [`RecordingLog`] keeps entries in
//! memory so tests can count them.

use serde::Serialize;

use crate::errors::DivisionError;
use crate::evaluator::Operands;

/// Receives errors worth a developer's attention.
pub trait DiagnosticLog {
    fn record(&mut self, error: &DivisionError, operands: &Operands);
}

/// Emits each entry as a `tracing` event.
///
/// Fatal errors are logged at `error`, the rest at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn record(&mut self, error: &DivisionError, operands: &Operands) {
        if error.is_fatal() {
            tracing::error!(
                code = error.error_code(),
                operand = %error.operand(),
                dividend = ?operands.dividend,
                divider = ?operands.divider,
                "{}",
                error
            );
        } else {
            tracing::warn!(
                code = error.error_code(),
                operand = %error.operand(),
                dividend = ?operands.dividend,
                divider = ?operands.divider,
                "{}",
                error
            );
        }
    }
}

/// One captured log entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    pub error: DivisionError,
    pub operands: Operands,
}

/// Keeps every entry in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    entries: Vec<DiagnosticEntry>,
}

impl RecordingLog {
    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }
}

impl DiagnosticLog for RecordingLog {
    fn record(&mut self, error: &DivisionError, operands: &Operands) {
        self.entries.push(DiagnosticEntry {
            error: *error,
            operands: operands.clone(),
        });
    }
}
