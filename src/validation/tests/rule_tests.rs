//! Unit tests for the validation rules.

use super::fixtures::{app_config, select_options, single_message, sink};
use crate::validation::{
    adapters::memory::{RecordingSink, SinkEvent},
    domain::{PropValue, RuleOutcome, StyleSpec, TypeLabel, ValidationConfig, ValueDump},
    error::PatternError,
    formatter::ALERT_MARKER,
    rules::{
        check_for_empty, check_type, string_is_rich_text, string_match_regex, value_with_options,
    },
};
use rstest::rstest;
use serde_json::json;

// ============================================================================
// check_for_empty
// ============================================================================

#[rstest]
fn empty_string_is_reported(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = check_for_empty(&app_config, &PropValue::from(""), &sink);

    assert_eq!(outcome, RuleOutcome::Reported);
    let message = single_message(&sink);
    assert_eq!(
        message.text,
        format!(
            "{ALERT_MARKER} prop_validator => error on App component, \"vProp\" must be defined"
        )
    );
    assert_eq!(message.detail, "vProp => (:string)");
}

#[rstest]
#[case::zero(PropValue::from(0))]
#[case::falsy_bool(PropValue::from(false))]
#[case::null(PropValue::Null)]
#[case::undefined(PropValue::Undefined)]
#[case::whitespace(PropValue::from(" "))]
#[case::empty_array(PropValue::Array(Vec::new()))]
#[case::empty_object(PropValue::from(json!({})))]
fn only_the_empty_string_counts_as_empty(
    app_config: ValidationConfig,
    sink: RecordingSink,
    #[case] value: PropValue,
) {
    assert_eq!(
        check_for_empty(&app_config, &value, &sink),
        RuleOutcome::Passed
    );
    assert!(sink.is_empty());
}

#[rstest]
fn optional_property_uses_softer_wording(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = check_for_empty(&app_config.optional(), &PropValue::from(""), &sink);

    assert!(outcome.is_reported());
    assert!(single_message(&sink).text.ends_with("\"vProp\" should be defined"));
}

#[rstest]
fn section_qualifies_the_component(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_section("footer");
    let outcome = check_for_empty(&config, &PropValue::from(""), &sink);

    assert!(outcome.is_reported());
    assert!(
        single_message(&sink)
            .text
            .contains("error on App component(under footer), \"vProp\"")
    );
}

// ============================================================================
// check_type
// ============================================================================

#[rstest]
fn number_against_string_expectation_is_reported(
    app_config: ValidationConfig,
    sink: RecordingSink,
) {
    let outcome = check_type(&app_config, &PropValue::from(42), &sink);

    assert_eq!(outcome, RuleOutcome::Reported);
    let message = single_message(&sink);
    assert!(
        message
            .text
            .ends_with("\"vProp\" must be of type \"string\", received \"number\"")
    );
    assert_eq!(message.detail, "vProp => (42:number)");
}

#[rstest]
fn matching_type_passes(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::String, TypeLabel::Number]);

    assert!(check_type(&config, &PropValue::from(7), &sink).is_passed());
    assert!(check_type(&config, &PropValue::from("seven"), &sink).is_passed());
    assert!(sink.is_empty());
}

#[rstest]
fn expected_types_are_listed_in_canonical_order(
    app_config: ValidationConfig,
    sink: RecordingSink,
) {
    let config = app_config.with_expected_types([TypeLabel::Number, TypeLabel::String]);
    let outcome = check_type(&config, &PropValue::from(true), &sink);

    assert!(outcome.is_reported());
    assert!(
        single_message(&sink)
            .text
            .contains("of type \"string\" | \"number\", received \"boolean\"")
    );
}

#[rstest]
fn keyed_collection_fails_array_expectation(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::Array]);

    assert!(check_type(&config, &PropValue::from(json!({"0": "a"})), &sink).is_reported());
    assert!(check_type(&config, &PropValue::from(json!(["a"])), &sink).is_passed());
    assert_eq!(sink.messages().len(), 1);
}

#[rstest]
fn sequence_fails_object_expectation(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::Object]);

    assert!(check_type(&config, &PropValue::from(json!([])), &sink).is_reported());
    assert!(check_type(&config, &PropValue::from(json!({})), &sink).is_passed());
    assert!(check_type(&config, &PropValue::Null, &sink).is_passed());
}

#[rstest]
fn empty_string_is_reported_before_type(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::Number]);
    let outcome = check_type(&config, &PropValue::from(""), &sink);

    assert!(outcome.is_reported());
    assert!(single_message(&sink).text.ends_with("must be defined"));
}

#[rstest]
fn required_flag_never_skips_the_check(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.optional();
    let outcome = check_type(&config, &PropValue::Undefined, &sink);

    assert!(outcome.is_reported());
    assert!(
        single_message(&sink)
            .text
            .contains("should be of type \"string\", received \"undefined\"")
    );
}

#[rstest]
fn empty_expectation_rejects_everything(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types(Vec::<TypeLabel>::new());
    let outcome = check_type(&config, &PropValue::from("text"), &sink);

    assert!(outcome.is_reported());
    assert!(single_message(&sink).text.contains("of type (none)"));
}

#[rstest]
fn derived_configs_leave_the_original_untouched(app_config: ValidationConfig) {
    let derived = app_config.with_expected_types([TypeLabel::Boolean]);

    assert!(app_config.expected_types.contains(&TypeLabel::String));
    assert!(!app_config.expected_types.contains(&TypeLabel::Boolean));
    assert!(derived.expected_types.contains(&TypeLabel::Boolean));
}

// ============================================================================
// value_with_options
// ============================================================================

#[rstest]
fn listed_option_passes(
    app_config: ValidationConfig,
    sink: RecordingSink,
    select_options: Vec<PropValue>,
) {
    let outcome = value_with_options(&app_config, &PropValue::from("ciao"), &select_options, &sink);

    assert_eq!(outcome, RuleOutcome::Passed);
    assert!(sink.is_empty());
}

#[rstest]
fn unlisted_option_names_every_option(
    app_config: ValidationConfig,
    sink: RecordingSink,
    select_options: Vec<PropValue>,
) {
    let outcome = value_with_options(&app_config, &PropValue::from("due"), &select_options, &sink);

    assert_eq!(outcome, RuleOutcome::Reported);
    assert!(single_message(&sink).text.ends_with(concat!(
        "\"vProp\" can not have value \"due\", ",
        "possible values are \"ciao\":string, \"uno\":string, \"3\":number",
    )));
}

#[rstest]
fn membership_is_type_strict(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::String, TypeLabel::Number]);
    let options = [
        PropValue::from("ciao"),
        PropValue::from("uno"),
        PropValue::from("3"),
    ];
    let outcome = value_with_options(&config, &PropValue::from(3), &options, &sink);

    assert!(outcome.is_reported());
    assert!(
        single_message(&sink)
            .text
            .contains("not have value \"3\", possible values are")
    );
}

#[rstest]
fn numeric_option_matches_numeric_value(
    app_config: ValidationConfig,
    sink: RecordingSink,
    select_options: Vec<PropValue>,
) {
    let config = app_config.with_expected_types([TypeLabel::String, TypeLabel::Number]);

    assert!(value_with_options(&config, &PropValue::from(3), &select_options, &sink).is_passed());
    assert!(sink.is_empty());
}

#[rstest]
fn type_mismatch_wins_over_membership(
    app_config: ValidationConfig,
    sink: RecordingSink,
    select_options: Vec<PropValue>,
) {
    let outcome = value_with_options(&app_config, &PropValue::from(4), &select_options, &sink);

    assert!(outcome.is_reported());
    let message = single_message(&sink);
    assert!(message.text.contains("received \"number\""));
    assert!(!message.text.contains("possible values"));
}

#[rstest]
fn empty_option_list_accepts_anything(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = value_with_options(&app_config, &PropValue::from("whatever"), &[], &sink);

    assert!(outcome.is_passed());
    assert!(sink.is_empty());
}

#[rstest]
fn optional_options_use_should(
    app_config: ValidationConfig,
    sink: RecordingSink,
    select_options: Vec<PropValue>,
) {
    let config = app_config.optional();
    let outcome = value_with_options(&config, &PropValue::from("due"), &select_options, &sink);

    assert!(outcome.is_reported());
    assert!(single_message(&sink).text.contains("\"vProp\" should not have value"));
}

// ============================================================================
// string_is_rich_text
// ============================================================================

#[rstest]
#[case::paragraph("<p>hello</p>")]
#[case::padded("  <p>hi</p>  ")]
#[case::multiple_paragraphs("<p>one</p><p>two</p>")]
fn paragraph_strings_pass(
    app_config: ValidationConfig,
    sink: RecordingSink,
    #[case] text: &str,
) {
    assert!(string_is_rich_text(&app_config, &PropValue::from(text), &sink).is_passed());
    assert!(sink.is_empty());
}

#[rstest]
#[case::plain("hello")]
#[case::unclosed("<p>hello")]
#[case::other_tag("<div>hello</div>")]
#[case::line_break("<p>hello\nworld</p>")]
fn non_paragraph_strings_are_reported(
    app_config: ValidationConfig,
    sink: RecordingSink,
    #[case] text: &str,
) {
    let outcome = string_is_rich_text(&app_config, &PropValue::from(text), &sink);

    assert!(outcome.is_reported());
    assert!(
        single_message(&sink)
            .text
            .ends_with("must be rich text wrapped in a <p></p> paragraph")
    );
}

#[rstest]
fn rich_text_forces_string_type(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::Number]);
    let outcome = string_is_rich_text(&config, &PropValue::from(12), &sink);

    assert!(outcome.is_reported());
    assert!(
        single_message(&sink)
            .text
            .contains("of type \"string\", received \"number\"")
    );
    assert_eq!(config.expected_types.len(), 1);
    assert!(config.expected_types.contains(&TypeLabel::Number));
}

#[rstest]
fn empty_rich_text_reports_definedness(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = string_is_rich_text(&app_config, &PropValue::from(""), &sink);

    assert!(outcome.is_reported());
    assert!(single_message(&sink).text.ends_with("must be defined"));
}

// ============================================================================
// string_match_regex
// ============================================================================

#[rstest]
fn matching_string_passes(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = string_match_regex(&app_config, &PropValue::from("Udoc"), Some("^U.*c$"), &sink);

    assert_eq!(outcome, Ok(RuleOutcome::Passed));
    assert!(sink.is_empty());
}

#[rstest]
fn pattern_is_matched_against_trimmed_value(app_config: ValidationConfig, sink: RecordingSink) {
    let value = PropValue::from(" UdoC ");
    let outcome = string_match_regex(&app_config, &value, Some("^U.*(c|C)$"), &sink);

    assert_eq!(outcome, Ok(RuleOutcome::Passed));
}

#[rstest]
fn mismatching_string_names_the_pattern(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = string_match_regex(&app_config, &PropValue::from("Udog"), Some("^U.*c$"), &sink);

    assert_eq!(outcome, Ok(RuleOutcome::Reported));
    assert!(
        single_message(&sink)
            .text
            .ends_with("\"vProp\" must match the pattern /^U.*c$/")
    );
}

#[rstest]
fn missing_pattern_passes_without_reporting(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = string_match_regex(&app_config, &PropValue::from("anything"), None, &sink);

    assert_eq!(outcome, Ok(RuleOutcome::Passed));
    assert!(sink.is_empty());
}

#[rstest]
fn missing_pattern_still_checks_definedness(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = string_match_regex(&app_config, &PropValue::from(""), None, &sink);

    assert_eq!(outcome, Ok(RuleOutcome::Reported));
}

#[rstest]
fn malformed_pattern_is_surfaced(app_config: ValidationConfig, sink: RecordingSink) {
    let outcome = string_match_regex(&app_config, &PropValue::from("value"), Some("(open"), &sink);

    let Err(error) = outcome else {
        panic!("expected a pattern error");
    };
    assert!(matches!(error, PatternError::Invalid { .. }));
    assert_eq!(error.pattern(), "(open");
    assert!(sink.is_empty());
}

#[rstest]
fn regex_forces_string_type(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_expected_types([TypeLabel::Boolean]);
    let outcome = string_match_regex(&config, &PropValue::from(true), Some("^t"), &sink);

    assert_eq!(outcome, Ok(RuleOutcome::Reported));
    assert!(single_message(&sink).text.contains("received \"boolean\""));
}

// ============================================================================
// Diagnostics
// ============================================================================

#[rstest]
fn repeated_calls_emit_independent_diagnostics(app_config: ValidationConfig, sink: RecordingSink) {
    let value = PropValue::from(42);

    assert!(check_type(&app_config, &value, &sink).is_reported());
    assert!(check_type(&app_config, &value, &sink).is_reported());

    let messages = sink.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages.first(), messages.last());
}

#[rstest]
fn structured_values_are_dumped_after_the_message(
    app_config: ValidationConfig,
    sink: RecordingSink,
) {
    let value = PropValue::from(json!({"label": "ok", "count": 2}));
    assert!(check_type(&app_config, &value, &sink).is_reported());

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events.first(), Some(SinkEvent::Message(_))));
    let Some(SinkEvent::Dump(ValueDump::Table(table))) = events.last() else {
        panic!("expected a table dump");
    };
    assert_eq!(table.cell("label", "Values"), Some("\"ok\""));
    assert_eq!(table.cell("count", "Values"), Some("2"));
}

#[rstest]
fn empty_collections_are_dumped_plainly(app_config: ValidationConfig, sink: RecordingSink) {
    assert!(check_type(&app_config, &PropValue::Array(Vec::new()), &sink).is_reported());

    assert_eq!(sink.dumps(), vec![ValueDump::Plain("[]".to_owned())]);
}

#[rstest]
fn override_message_replaces_generated_text(app_config: ValidationConfig, sink: RecordingSink) {
    let config = app_config.with_override_message("pick a proper value");
    let value = PropValue::array(["x"]);
    assert!(check_type(&config, &value, &sink).is_reported());

    let message = single_message(&sink);
    assert_eq!(message.text, format!("{ALERT_MARKER} pick a proper value"));
    assert_eq!(message.detail, "vProp => ([\"x\"]:array)");
    assert_eq!(sink.dumps().len(), 1);
}

#[rstest]
#[case::error(StyleSpec::Error)]
#[case::warning(StyleSpec::Warning)]
#[case::custom(StyleSpec::Custom("color: red".to_owned()))]
#[case::neutral(StyleSpec::Neutral)]
fn style_is_resolved_for_the_sink(
    app_config: ValidationConfig,
    sink: RecordingSink,
    #[case] style: StyleSpec,
) {
    let config = app_config.with_style(style.clone());
    assert!(check_for_empty(&config, &PropValue::from(""), &sink).is_reported());

    let message = single_message(&sink);
    assert_eq!(message.css, style.css());
    assert_eq!(message.style, style);
}
