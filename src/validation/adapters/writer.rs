//! Plain-text console sink.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::validation::{
    domain::{StyledMessage, ValueDump},
    ports::DiagnosticSink,
};

/// Writes diagnostics as plain text to any [`Write`] target.
///
/// Styling is ignored. Write failures are logged and swallowed: a broken
/// console must never break the component being validated.
///
/// # Example
///
/// ```
/// use prop_validator::validation::adapters::writer::WriterSink;
/// use prop_validator::validation::domain::{PropValue, ValidationConfig};
/// use prop_validator::validation::rules::check_for_empty;
///
/// let sink = WriterSink::new(Vec::new());
/// let config = ValidationConfig::new("App", "title");
/// let outcome = check_for_empty(&config, &PropValue::from(""), &sink);
///
/// assert!(outcome.is_reported());
/// let output = String::from_utf8(sink.into_inner()).expect("utf-8 output");
/// assert!(output.contains("\"title\" must be defined"));
/// assert!(output.contains("title => (:string)"));
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl WriterSink<io::Stderr> {
    /// Creates a sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink around `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_text(&self, text: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
            tracing::warn!(%error, "failed to write diagnostic");
        }
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn write_message(&self, message: &StyledMessage) {
        self.write_text(&format!("{}\n{}\n", message.text, message.detail));
    }

    fn write_dump(&self, dump: &ValueDump) {
        match dump {
            ValueDump::Table(table) => self.write_text(&table.to_string()),
            ValueDump::Plain(text) => self.write_text(&format!("{text}\n")),
        }
    }
}
