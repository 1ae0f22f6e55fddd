//! Property validation and diagnostic reporting.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: values, type labels, configuration and diagnostics
//!   ([`domain::PropValue`], [`domain::TypeLabel`], [`domain::ValidationConfig`])
//! - **Ports**: the sink and gate boundaries ([`ports::DiagnosticSink`],
//!   [`ports::ValidationGate`])
//! - **Adapters**: recording, console and `tracing` sinks plus gates
//! - **Rules**: the five checks, each composing the ones before it
//! - **Formatter**: pure diagnostic rendering with one effectful `emit`
//! - **Services**: [`services::PropValidator`], the gated entry point
//!
//! # Example
//!
//! ```
//! use prop_validator::validation::adapters::memory::RecordingSink;
//! use prop_validator::validation::domain::{PropValue, ValidationConfig};
//! use prop_validator::validation::rules::value_with_options;
//!
//! let sink = RecordingSink::new();
//! let config = ValidationConfig::new("App", "vSelect");
//! let options = [PropValue::from("ciao"), PropValue::from("uno"), PropValue::from(3)];
//!
//! assert!(value_with_options(&config, &PropValue::from("ciao"), &options, &sink).is_passed());
//! assert!(value_with_options(&config, &PropValue::from("due"), &options, &sink).is_reported());
//! assert!(sink.messages()[0].text.contains("\"3\":number"));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod ports;
pub mod rules;
pub mod services;

#[cfg(test)]
mod tests;
