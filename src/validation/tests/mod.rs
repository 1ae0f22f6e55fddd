//! Unit tests for the validation module.
//!
//! Tests are organised by component, covering passing values, violations
//! and the edge cases of rule composition.

mod rule_tests;
