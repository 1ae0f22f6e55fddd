//! Diagnostic rendering.
//!
//! Rendering is pure: [`render`] turns a [`Violation`] into a [`Diagnostic`]
//! without touching any sink. [`emit`] is the single effectful step, and
//! [`report`] chains the two for the rule engine.

use crate::validation::{
    domain::{
        Diagnostic, DumpRow, DumpTable, PropValue, StyledMessage, TypeLabel, VALUES_COLUMN,
        ValidationConfig, ValueDump, Violation,
    },
    ports::DiagnosticSink,
};

/// Marker prefixed to every diagnostic message.
pub const ALERT_MARKER: &str = "🚨";

/// Renders a violation into a diagnostic.
///
/// A non-empty `override_message` replaces the generated message text; the
/// detail line and the value dump are kept either way.
///
/// # Examples
///
/// ```
/// use prop_validator::validation::domain::{PropValue, StyleSpec, Violation};
/// use prop_validator::validation::formatter::render;
///
/// let value = PropValue::from(42);
/// let violation = Violation::new("wrong type", &value, StyleSpec::Warning);
/// let diagnostic = render("count", &violation, None);
///
/// assert!(diagnostic.message.text.ends_with("wrong type"));
/// assert_eq!(diagnostic.message.detail, "count => (42:number)");
/// assert!(diagnostic.dump.is_none());
/// ```
#[must_use]
pub fn render(
    property_name: &str,
    violation: &Violation<'_>,
    override_message: Option<&str>,
) -> Diagnostic {
    let text = override_message
        .filter(|message| !message.is_empty())
        .unwrap_or(&violation.message);

    Diagnostic {
        message: StyledMessage {
            text: format!("{ALERT_MARKER} {text}"),
            detail: format!(
                "{property_name} => ({}:{})",
                violation.value, violation.type_label
            ),
            style: violation.style.clone(),
            css: violation.style.css().to_owned(),
        },
        dump: dump_value(violation.value, violation.type_label),
    }
}

/// Writes a rendered diagnostic to the sink.
pub fn emit(diagnostic: &Diagnostic, sink: &dyn DiagnosticSink) {
    sink.write_message(&diagnostic.message);
    if let Some(dump) = diagnostic.dump.as_ref() {
        sink.write_dump(dump);
    }
}

/// Renders a violation under `config` and writes it to the sink.
pub fn report(config: &ValidationConfig, violation: &Violation<'_>, sink: &dyn DiagnosticSink) {
    let diagnostic = render(&config.property_name, violation, config.override_message());
    emit(&diagnostic, sink);
}

/// Builds the secondary dump for array and object values.
///
/// Collections with entries are tabulated; empty collections and `null`
/// fall back to their plain rendering. Other labels produce no dump.
#[must_use]
pub fn dump_value(value: &PropValue, label: TypeLabel) -> Option<ValueDump> {
    if !label.is_structural() {
        return None;
    }

    let entries = value.entries();
    if entries.is_empty() {
        return Some(ValueDump::Plain(value.to_string()));
    }

    Some(ValueDump::Table(tabulate(&entries)))
}

fn tabulate(entries: &[(String, &PropValue)]) -> DumpTable {
    let mut columns: Vec<String> = Vec::new();
    let mut has_scalars = false;

    for (_, entry) in entries {
        if TypeLabel::of(entry).is_structural() && !matches!(entry, PropValue::Null) {
            for (key, _) in entry.entries() {
                if !columns.contains(&key) {
                    columns.push(key);
                }
            }
        } else {
            has_scalars = true;
        }
    }
    if has_scalars {
        columns.push(VALUES_COLUMN.to_owned());
    }

    let values_position = has_scalars.then(|| columns.len() - 1);
    let rows = entries
        .iter()
        .map(|(index, entry)| DumpRow {
            index: index.clone(),
            cells: columns
                .iter()
                .enumerate()
                .map(|(position, column)| {
                    cell_for(entry, column, values_position == Some(position))
                })
                .collect(),
        })
        .collect();

    DumpTable { columns, rows }
}

fn cell_for(entry: &PropValue, column: &str, is_values_column: bool) -> Option<String> {
    match entry {
        PropValue::Array(_) | PropValue::Object(_) if !is_values_column => entry
            .entries()
            .into_iter()
            .find(|(key, _)| key == column)
            .map(|(_, nested)| nested.inspect()),
        PropValue::Array(_) | PropValue::Object(_) => None,
        scalar if is_values_column => Some(scalar.inspect()),
        _ => None,
    }
}
