//! In-memory implementation of the `DiagnosticSink` port.
//!
//! Captures every write so tests can inspect emitted diagnostics without a
//! real console.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::validation::{
    domain::{StyledMessage, ValueDump},
    ports::DiagnosticSink,
};

/// One captured sink write, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A styled message write.
    Message(StyledMessage),
    /// A value dump write.
    Dump(ValueDump),
}

/// Recording implementation of [`DiagnosticSink`].
///
/// Thread-safe via an internal [`Mutex`]; clones share the same record.
///
/// # Example
///
/// ```
/// use prop_validator::validation::adapters::memory::RecordingSink;
///
/// let sink = RecordingSink::new();
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every captured write in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().clone()
    }

    /// Returns the captured messages in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<StyledMessage> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Message(message) => Some(message.clone()),
                SinkEvent::Dump(_) => None,
            })
            .collect()
    }

    /// Returns the captured dumps in emission order.
    #[must_use]
    pub fn dumps(&self) -> Vec<ValueDump> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Dump(dump) => Some(dump.clone()),
                SinkEvent::Message(_) => None,
            })
            .collect()
    }

    /// Returns the number of captured writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every captured write.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while recording leaves the vector intact, so a poisoned lock
    // is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Vec<SinkEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for RecordingSink {
    fn write_message(&self, message: &StyledMessage) {
        self.lock().push(SinkEvent::Message(message.clone()));
    }

    fn write_dump(&self, dump: &ValueDump) {
        self.lock().push(SinkEvent::Dump(dump.clone()));
    }
}
