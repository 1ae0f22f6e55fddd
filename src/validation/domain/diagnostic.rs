//! Violations and their rendered diagnostics.

use std::fmt;

use serde::Serialize;

use super::{PropValue, StyleSpec, TypeLabel};

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleOutcome {
    /// The value satisfied the rule; callers may continue.
    Passed,
    /// A violation was found and its diagnostic has been emitted.
    Reported,
}

impl RuleOutcome {
    /// Returns `true` when a violation was reported.
    #[must_use]
    pub const fn is_reported(self) -> bool {
        matches!(self, Self::Reported)
    }

    /// Returns `true` when the rule passed.
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// A value found to break its contract.
///
/// Lives only for the duration of one rule call.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation<'a> {
    /// Generated description of the violation.
    pub message: String,
    /// The offending value.
    pub value: &'a PropValue,
    /// Canonical label of the offending value.
    pub type_label: TypeLabel,
    /// Styling hint for the diagnostic.
    pub style: StyleSpec,
}

impl<'a> Violation<'a> {
    /// Creates a violation, classifying the value.
    #[must_use]
    pub fn new(message: impl Into<String>, value: &'a PropValue, style: StyleSpec) -> Self {
        Self {
            message: message.into(),
            value,
            type_label: TypeLabel::of(value),
            style,
        }
    }
}

/// The styled line pair written for every violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledMessage {
    /// Marker-prefixed message text.
    pub text: String,
    /// `<property> => (<value>:<type>)` line.
    pub detail: String,
    /// Requested style.
    pub style: StyleSpec,
    /// Resolved style description.
    pub css: String,
}

/// Secondary rendering of an array or object value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum ValueDump {
    /// Tabular rendering of a collection with entries.
    Table(DumpTable),
    /// Plain rendering of an empty or degenerate collection.
    Plain(String),
}

impl fmt::Display for ValueDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(table) => fmt::Display::fmt(table, f),
            Self::Plain(text) => f.write_str(text),
        }
    }
}

/// Column header used for scalar rows.
pub const VALUES_COLUMN: &str = "Values";

/// Column header of the row key column.
pub const INDEX_COLUMN: &str = "(index)";

/// One row of a [`DumpTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpRow {
    /// Array index or object key of the entry.
    pub index: String,
    /// One cell per table column; `None` where the entry has no such column.
    pub cells: Vec<Option<String>>,
}

/// Table in the layout of a browser console's `table` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpTable {
    /// Column headers, excluding the index column.
    pub columns: Vec<String>,
    /// Rows in entry order.
    pub rows: Vec<DumpRow>,
}

impl DumpTable {
    /// Returns the cell in `column` for the row keyed `index`.
    #[must_use]
    pub fn cell(&self, index: &str, column: &str) -> Option<&str> {
        let position = self.columns.iter().position(|name| name == column)?;
        self.rows
            .iter()
            .find(|row| row.index == index)?
            .cells
            .get(position)?
            .as_deref()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![INDEX_COLUMN.chars().count()];
        widths.extend(self.columns.iter().map(|name| name.chars().count()));
        for row in &self.rows {
            let cells = std::iter::once(Some(row.index.as_str()))
                .chain(row.cells.iter().map(Option::as_deref));
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.map_or(0, |text| text.chars().count()));
            }
        }
        widths
    }
}

fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    writeln!(f, "+{}+", segments.join("+"))
}

fn write_cells<'c>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'c str>,
) -> fmt::Result {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(&width, cell)| format!(" {cell:<width$} "))
        .collect();
    writeln!(f, "|{}|", padded.join("|"))
}

impl fmt::Display for DumpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_border(f, &widths)?;
        write_cells(
            f,
            &widths,
            std::iter::once(INDEX_COLUMN).chain(self.columns.iter().map(String::as_str)),
        )?;
        write_border(f, &widths)?;
        for row in &self.rows {
            write_cells(
                f,
                &widths,
                std::iter::once(row.index.as_str())
                    .chain(row.cells.iter().map(|cell| cell.as_deref().unwrap_or(""))),
            )?;
        }
        write_border(f, &widths)
    }
}

/// Fully rendered diagnostic, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The styled message lines.
    pub message: StyledMessage,
    /// Dump of array or object values.
    pub dump: Option<ValueDump>,
}
