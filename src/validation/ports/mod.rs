//! Port trait definitions for property validation.
//!
//! Ports are the narrow effectful boundaries the rule engine needs: a sink
//! to write diagnostics to and a gate deciding whether to validate at all.

pub mod gate;
pub mod sink;

pub use gate::ValidationGate;
pub use sink::DiagnosticSink;
