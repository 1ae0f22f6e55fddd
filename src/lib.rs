//! Prop Validator: advisory runtime validation of component properties.
//!
//! Given a named value and a per-call contract, this crate checks the value
//! and writes a human-readable diagnostic when the contract is broken. It
//! never alters the value or the caller's control flow: validation is a
//! development-time aid, not an enforcement gate.
//!
//! # Architecture
//!
//! Prop Validator follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value, type and diagnostic types
//! - **Ports**: Abstract sink and gate interfaces
//! - **Adapters**: Concrete sinks and gates
//!
//! # Modules
//!
//! - [`validation`]: Rule engine, diagnostic formatting, ports and adapters
//!
//! # Example
//!
//! ```
//! use prop_validator::{PropValue, RecordingSink, TypeLabel, ValidationConfig, check_type};
//!
//! let sink = RecordingSink::new();
//! let config = ValidationConfig::new("App", "vBool").with_expected_types([TypeLabel::Boolean]);
//!
//! assert!(check_type(&config, &PropValue::from(true), &sink).is_passed());
//! assert!(check_type(&config, &PropValue::from("notBool"), &sink).is_reported());
//! ```

pub mod validation;

pub use validation::adapters::{
    EnvironmentGate, RecordingSink, StaticGate, TracingSink, WriterSink,
};
pub use validation::domain::{
    Diagnostic, PropValue, RuleOutcome, StyleSpec, TypeLabel, ValidationConfig, classify,
};
pub use validation::error::PatternError;
pub use validation::ports::{DiagnosticSink, ValidationGate};
pub use validation::rules::{
    check_for_empty, check_type, string_is_rich_text, string_match_regex, value_with_options,
};
pub use validation::services::PropValidator;
