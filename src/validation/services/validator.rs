//! Gated validation service.
//!
//! Pairs a [`ValidationGate`] with a [`DiagnosticSink`] so call sites can
//! validate without checking the gate or threading the sink themselves.

use crate::validation::{
    domain::{PropValue, RuleOutcome, ValidationConfig},
    error::PatternError,
    ports::{DiagnosticSink, ValidationGate},
    rules,
};

/// Runs the validation rules behind a gate.
///
/// The gate is read once per call. While it is closed every method returns
/// `None` and nothing is written to the sink.
///
/// # Examples
///
/// ```
/// use prop_validator::validation::adapters::{RecordingSink, StaticGate};
/// use prop_validator::validation::domain::{PropValue, RuleOutcome, TypeLabel, ValidationConfig};
/// use prop_validator::validation::services::PropValidator;
///
/// let sink = RecordingSink::new();
/// let validator = PropValidator::new(StaticGate::open(), sink.clone());
/// let config = ValidationConfig::new("App", "vBool").with_expected_types([TypeLabel::Boolean]);
///
/// let outcome = validator.check_type(&config, &PropValue::from("notBool"));
///
/// assert_eq!(outcome, Some(RuleOutcome::Reported));
/// assert!(sink.messages()[0].text.contains("\"boolean\""));
/// ```
#[derive(Debug, Clone)]
pub struct PropValidator<G, S> {
    gate: G,
    sink: S,
}

impl<G: ValidationGate, S: DiagnosticSink> PropValidator<G, S> {
    /// Creates a validator from a gate and a sink.
    #[must_use]
    pub const fn new(gate: G, sink: S) -> Self {
        Self { gate, sink }
    }

    /// Returns the gate.
    #[must_use]
    pub const fn gate(&self) -> &G {
        &self.gate
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns `true` when the gate currently allows validation.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.gate.is_open()
    }

    /// Runs [`rules::check_for_empty`] if the gate is open.
    pub fn check_for_empty(
        &self,
        config: &ValidationConfig,
        value: &PropValue,
    ) -> Option<RuleOutcome> {
        self.gated(|sink| rules::check_for_empty(config, value, sink))
    }

    /// Runs [`rules::check_type`] if the gate is open.
    pub fn check_type(&self, config: &ValidationConfig, value: &PropValue) -> Option<RuleOutcome> {
        self.gated(|sink| rules::check_type(config, value, sink))
    }

    /// Runs [`rules::value_with_options`] if the gate is open.
    pub fn value_with_options(
        &self,
        config: &ValidationConfig,
        value: &PropValue,
        options: &[PropValue],
    ) -> Option<RuleOutcome> {
        self.gated(|sink| rules::value_with_options(config, value, options, sink))
    }

    /// Runs [`rules::string_is_rich_text`] if the gate is open.
    pub fn string_is_rich_text(
        &self,
        config: &ValidationConfig,
        value: &PropValue,
    ) -> Option<RuleOutcome> {
        self.gated(|sink| rules::string_is_rich_text(config, value, sink))
    }

    /// Runs [`rules::string_match_regex`] if the gate is open.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the gate is open and `pattern` does not
    /// compile.
    pub fn string_match_regex(
        &self,
        config: &ValidationConfig,
        value: &PropValue,
        pattern: Option<&str>,
    ) -> Result<Option<RuleOutcome>, PatternError> {
        self.gated(|sink| rules::string_match_regex(config, value, pattern, sink))
            .transpose()
    }

    fn gated<T>(&self, rule: impl FnOnce(&dyn DiagnosticSink) -> T) -> Option<T> {
        if !self.gate.is_open() {
            tracing::trace!("validation gate closed, skipping rule");
            return None;
        }
        let sink: &dyn DiagnosticSink = &self.sink;
        Some(rule(sink))
    }
}
