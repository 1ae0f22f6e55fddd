//! Domain types for property validation.
//!
//! This module contains pure types with no sink or gate dependencies. Every
//! value here is call-scoped: nothing outlives a single rule invocation.

mod config;
mod diagnostic;
mod type_label;
mod value;

pub use config::{ERROR_STYLE, NEUTRAL_STYLE, StyleSpec, ValidationConfig, WARNING_STYLE};
pub use diagnostic::{
    Diagnostic, DumpRow, DumpTable, INDEX_COLUMN, RuleOutcome, StyledMessage, VALUES_COLUMN,
    ValueDump, Violation,
};
pub use type_label::{ParseTypeLabelError, TypeLabel, classify};
pub use value::PropValue;
