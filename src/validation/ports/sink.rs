//! Diagnostic sink port.
//!
//! A sink is the write-only channel diagnostics end up in: a console, a log
//! pipeline, or a recorder in tests.

use crate::validation::domain::{StyledMessage, ValueDump};

/// Port for writing rendered diagnostics.
///
/// Writes are fire-and-forget. Implementations must not fail the caller;
/// any I/O trouble is theirs to absorb.
///
/// # Implementation Notes
///
/// A minimal sink may ignore [`StyledMessage::css`] and print plain text.
pub trait DiagnosticSink {
    /// Writes the styled message and its detail line.
    fn write_message(&self, message: &StyledMessage);

    /// Writes the secondary dump of an array or object value.
    fn write_dump(&self, dump: &ValueDump);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn write_message(&self, message: &StyledMessage) {
        (**self).write_message(message);
    }

    fn write_dump(&self, dump: &ValueDump) {
        (**self).write_dump(dump);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn write_message(&self, message: &StyledMessage) {
        (**self).write_message(message);
    }

    fn write_dump(&self, dump: &ValueDump) {
        (**self).write_dump(dump);
    }
}
