//! Sink forwarding diagnostics to `tracing`.

use crate::validation::{
    domain::{StyleSpec, StyledMessage, ValueDump},
    ports::DiagnosticSink,
};

/// Emits diagnostics as `tracing` events.
///
/// The error style maps to `ERROR`, the warning style to `WARN`, and every
/// other style to `INFO`. Dumps are logged at `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn write_message(&self, message: &StyledMessage) {
        let text = message.text.as_str();
        let detail = message.detail.as_str();
        let style = message.style.as_str();
        match message.style {
            StyleSpec::Error => tracing::error!(detail, style, "{text}"),
            StyleSpec::Warning => tracing::warn!(detail, style, "{text}"),
            StyleSpec::Custom(_) | StyleSpec::Neutral => {
                tracing::info!(detail, style, "{text}");
            }
        }
    }

    fn write_dump(&self, dump: &ValueDump) {
        tracing::debug!("\n{dump}");
    }
}
