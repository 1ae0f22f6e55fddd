//! Sink and gate adapters.
//!
//! Concrete implementations of the [`DiagnosticSink`] and [`ValidationGate`]
//! ports.
//!
//! # Available Adapters
//!
//! - [`memory::RecordingSink`]: captures diagnostics for tests
//! - [`writer::WriterSink`]: plain-text output to any writer
//! - [`tracing_sink::TracingSink`]: forwards diagnostics as `tracing` events
//! - [`gate::StaticGate`] and [`gate::EnvironmentGate`]: enable switches
//!
//! [`DiagnosticSink`]: crate::validation::ports::DiagnosticSink
//! [`ValidationGate`]: crate::validation::ports::ValidationGate

pub mod gate;
pub mod memory;
pub mod tracing_sink;
pub mod writer;

pub use gate::{EnvironmentGate, StaticGate};
pub use memory::{RecordingSink, SinkEvent};
pub use tracing_sink::TracingSink;
pub use writer::WriterSink;
