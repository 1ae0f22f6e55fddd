//! The property validation rules.
//!
//! Each rule is a plain function over a [`ValidationConfig`] and a value.
//! Rules compose: every rule first runs the rules it builds on and stops at
//! the first violation. A rule that finds a violation renders and emits the
//! diagnostic itself before returning [`RuleOutcome::Reported`].
//!
//! | Rule | Runs first |
//! |---|---|
//! | [`check_for_empty`] | nothing |
//! | [`check_type`] | [`check_for_empty`] |
//! | [`value_with_options`] | [`check_type`] |
//! | [`string_is_rich_text`] | [`check_type`] with `{string}` |
//! | [`string_match_regex`] | [`check_type`] with `{string}` |
//!
//! `required` only changes the wording of a diagnostic; it never decides
//! whether a check runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::{
    domain::{PropValue, RuleOutcome, TypeLabel, ValidationConfig, Violation},
    error::PatternError,
    formatter,
    ports::DiagnosticSink,
};

/// Tag opening every generated message.
pub const MESSAGE_TAG: &str = "prop_validator";

/// Reports when the value is exactly the empty string.
///
/// `0`, `false`, `null`, `undefined` and empty collections all pass.
///
/// # Examples
///
/// ```
/// use prop_validator::validation::adapters::memory::RecordingSink;
/// use prop_validator::validation::domain::{PropValue, ValidationConfig};
/// use prop_validator::validation::rules::check_for_empty;
///
/// let sink = RecordingSink::new();
/// let config = ValidationConfig::new("App", "vString");
///
/// assert!(check_for_empty(&config, &PropValue::from(""), &sink).is_reported());
/// assert!(check_for_empty(&config, &PropValue::from(0), &sink).is_passed());
/// assert_eq!(sink.messages().len(), 1);
/// ```
pub fn check_for_empty(
    config: &ValidationConfig,
    value: &PropValue,
    sink: &dyn DiagnosticSink,
) -> RuleOutcome {
    if !value.is_empty_string() {
        return RuleOutcome::Passed;
    }

    let message = format!(
        "{}, \"{}\" {} be defined",
        context(config),
        config.property_name,
        wording(config, "must"),
    );
    violation(config, "check_for_empty", message, value, sink)
}

/// Reports when the value's canonical type is not expected.
///
/// Runs [`check_for_empty`] first.
pub fn check_type(
    config: &ValidationConfig,
    value: &PropValue,
    sink: &dyn DiagnosticSink,
) -> RuleOutcome {
    if check_for_empty(config, value, sink).is_reported() {
        return RuleOutcome::Reported;
    }

    let actual = TypeLabel::of(value);
    if config.expected_types.contains(&actual) {
        return RuleOutcome::Passed;
    }

    let message = format!(
        "{}, \"{}\" {} be of type {}, received \"{actual}\"",
        context(config),
        config.property_name,
        wording(config, "must"),
        expected_list(config),
    );
    violation(config, "check_type", message, value, sink)
}

/// Reports when the value is not one of the allowed options.
///
/// Runs [`check_type`] first, so a type mismatch is reported instead of a
/// membership mismatch. Membership is strict equality: the number `3` and
/// the string `"3"` are different options. An empty option list accepts
/// every value.
pub fn value_with_options(
    config: &ValidationConfig,
    value: &PropValue,
    options: &[PropValue],
    sink: &dyn DiagnosticSink,
) -> RuleOutcome {
    if check_type(config, value, sink).is_reported() {
        return RuleOutcome::Reported;
    }

    if options.is_empty() || options.contains(value) {
        return RuleOutcome::Passed;
    }

    let possible: Vec<String> = options
        .iter()
        .map(|option| format!("\"{option}\":{}", TypeLabel::of(option)))
        .collect();
    let message = format!(
        "{}, \"{}\" {} not have value \"{value}\", possible values are {}",
        context(config),
        config.property_name,
        wording(config, "can"),
        possible.join(", "),
    );
    violation(config, "value_with_options", message, value, sink)
}

/// Reports when the trimmed string is not wrapped in a single `<p>...</p>`
/// paragraph.
///
/// Runs [`check_type`] with the expected types forced to `{string}`.
pub fn string_is_rich_text(
    config: &ValidationConfig,
    value: &PropValue,
    sink: &dyn DiagnosticSink,
) -> RuleOutcome {
    let as_string = config.with_expected_types([TypeLabel::String]);
    if check_type(&as_string, value, sink).is_reported() {
        return RuleOutcome::Reported;
    }

    let text = value.as_str().map(str::trim).unwrap_or_default();
    if is_paragraph(text) {
        return RuleOutcome::Passed;
    }

    let message = format!(
        "{}, \"{}\" {} be rich text wrapped in a <p></p> paragraph",
        context(config),
        config.property_name,
        wording(config, "must"),
    );
    violation(config, "string_is_rich_text", message, value, sink)
}

/// Reports when the trimmed string does not match `pattern`.
///
/// Runs [`check_type`] with the expected types forced to `{string}`. When
/// `pattern` is `None` the value passes without further checks. Matching is
/// unanchored; anchor the pattern to match the whole string.
///
/// # Errors
///
/// Returns [`PatternError::Invalid`] when `pattern` does not compile. A bad
/// pattern is a mistake in the calling code, so it is surfaced rather than
/// reported as a diagnostic.
///
/// # Examples
///
/// ```
/// use prop_validator::validation::adapters::memory::RecordingSink;
/// use prop_validator::validation::domain::{PropValue, ValidationConfig};
/// use prop_validator::validation::rules::string_match_regex;
///
/// let sink = RecordingSink::new();
/// let config = ValidationConfig::new("App", "vStringCustomRegex");
/// let value = PropValue::from("Udoc");
///
/// assert!(string_match_regex(&config, &value, Some("^U.*c$"), &sink)?.is_passed());
/// assert!(string_match_regex(&config, &value, None, &sink)?.is_passed());
/// assert!(string_match_regex(&config, &value, Some("(unclosed"), &sink).is_err());
/// # Ok::<(), prop_validator::validation::error::PatternError>(())
/// ```
pub fn string_match_regex(
    config: &ValidationConfig,
    value: &PropValue,
    pattern: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> Result<RuleOutcome, PatternError> {
    let as_string = config.with_expected_types([TypeLabel::String]);
    if check_type(&as_string, value, sink).is_reported() {
        return Ok(RuleOutcome::Reported);
    }

    let Some(source) = pattern else {
        tracing::debug!(
            component = %config.component_name,
            property = %config.property_name,
            "no pattern supplied, skipping pattern check"
        );
        return Ok(RuleOutcome::Passed);
    };

    let compiled = Regex::new(source).map_err(|error| PatternError::from_regex(source, &error))?;
    let text = value.as_str().map(str::trim).unwrap_or_default();
    if compiled.is_match(text) {
        return Ok(RuleOutcome::Passed);
    }

    let message = format!(
        "{}, \"{}\" {} match the pattern /{source}/",
        context(config),
        config.property_name,
        wording(config, "must"),
    );
    Ok(violation(config, "string_match_regex", message, value, sink))
}

/// A single paragraph: `.` stops at line breaks and `$` anchors at the end
/// of the text.
const RICH_TEXT_PATTERN: &str = r"^<p>.*</p>$";

#[expect(clippy::expect_used, reason = "the pattern is a compile-time literal")]
static RICH_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RICH_TEXT_PATTERN).expect("rich text pattern compiles"));

fn is_paragraph(text: &str) -> bool {
    RICH_TEXT.is_match(text)
}

fn context(config: &ValidationConfig) -> String {
    let section = config
        .section()
        .map(|section| format!("(under {section})"))
        .unwrap_or_default();
    format!(
        "{MESSAGE_TAG} => error on {} component{section}",
        config.component_name
    )
}

const fn wording<'a>(config: &ValidationConfig, strict: &'a str) -> &'a str {
    if config.required { strict } else { "should" }
}

/// Lists the expected labels in canonical [`TypeLabel`] order, whatever
/// order the caller supplied them in.
fn expected_list(config: &ValidationConfig) -> String {
    if config.expected_types.is_empty() {
        return "(none)".to_owned();
    }
    config
        .expected_types
        .iter()
        .map(|label| format!("\"{label}\""))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn violation(
    config: &ValidationConfig,
    rule: &'static str,
    message: String,
    value: &PropValue,
    sink: &dyn DiagnosticSink,
) -> RuleOutcome {
    tracing::debug!(
        rule,
        component = %config.component_name,
        property = %config.property_name,
        "property contract violated"
    );
    formatter::report(
        config,
        &Violation::new(message, value, config.style.clone()),
        sink,
    );
    RuleOutcome::Reported
}
