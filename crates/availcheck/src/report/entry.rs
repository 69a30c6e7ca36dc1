//! Deduplicated findings and their recurrence locations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity level of a finding.
///
/// Ordered from least to most severe. Critical findings are structural
/// problems (unsupported or missing columns) that invalidate further
/// interpretation of a row; errors are content violations; warnings are
/// secondary business-rule concerns; notifications are informational and
/// kept in a separate ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, not a conformance failure.
    Notification,
    /// Secondary concern that should be reviewed.
    Warning,
    /// Format or content violation that makes a value non-conformant.
    Error,
    /// Structural problem that invalidates the row's interpretation.
    Critical,
}

impl Severity {
    /// Every declared level, in ascending order. Used to initialize the
    /// per-severity counters of a sheet summary.
    pub const ALL: [Severity; 4] = [
        Severity::Notification,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Notification => "Notification",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        }
    }
}

/// Where a finding occurred inside a sheet.
///
/// Rows are 1-based Excel coordinates (the header row is row 1); columns are
/// 0-based indexes into the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// A whole-row finding from a cross-column rule.
    Row { row: u32 },
    /// A single-cell finding from a column rule.
    Cell { row: u32, column: u32 },
}

impl Location {
    /// Render in Excel coordinates: `B4` for cells, `Row 4` for rows.
    pub fn to_excel_string(&self) -> String {
        match self {
            Location::Row { row } => format!("Row {row}"),
            Location::Cell { row, column } => format!("{}{row}", column_letters(*column)),
        }
    }

    /// The column index, when this is a cell location.
    pub fn column(&self) -> Option<u32> {
        match self {
            Location::Row { .. } => None,
            Location::Cell { column, .. } => Some(*column),
        }
    }
}

/// Convert a 0-based column index to Excel letters (0 -> A, 26 -> AA).
fn column_letters(mut index: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII letters")
}

/// Pure identity value for a finding.
///
/// Two findings are the same kind of problem iff their severity, message and
/// expected-value description are equal; their locations and offending values
/// may differ. The key is computed once at construction and never depends on
/// the mutable location accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntryKey {
    pub severity: Severity,
    pub message: String,
    pub expected: String,
}

/// One deduplicated finding plus its accumulated recurrence locations.
///
/// The identity fields (severity, message, expected) are immutable after
/// construction; only the location accumulator grows, through
/// [`Entry::assimilate`].
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    severity: Severity,
    message: String,
    expected: String,
    /// First-seen offending value, kept as the representative.
    value: String,
    locations: Vec<Location>,
    detected_at: DateTime<Utc>,
}

impl Entry {
    /// Create a finding anchored to a single cell.
    pub fn cell(
        severity: Severity,
        row: u32,
        column: u32,
        message: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::at(severity, Location::Cell { row, column }, message, value, expected)
    }

    /// Create a finding anchored to a whole row.
    pub fn row(
        severity: Severity,
        row: u32,
        message: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::at(severity, Location::Row { row }, message, value, expected)
    }

    fn at(
        severity: Severity,
        location: Location,
        message: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            expected: expected.into(),
            value: value.into(),
            locations: vec![location],
            detected_at: Utc::now(),
        }
    }

    /// The identity key used for ledger deduplication.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            severity: self.severity,
            message: self.message.clone(),
            expected: self.expected.clone(),
        }
    }

    /// Merge a duplicate finding's location data into this entry.
    ///
    /// The receiver's identity and representative value are unchanged; only
    /// the location accumulator grows.
    pub fn assimilate(&mut self, other: Entry) {
        debug_assert_eq!(self.key(), other.key(), "assimilating a different finding");
        self.locations.extend(other.locations);
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Every location this exact finding recurred at, in report order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }
}
