//! Single-cell validation rules.

use regex::Regex;

use crate::report::{Entry, ErrorLog, Severity};

use super::patterns;

/// Message for a value that matched none of a column's accepted formats.
pub const SPECIFIC_VALUES_ONLY_ERROR: &str =
    "Value does not match any of the formats accepted for this column.";

/// Message for an empty cell in a required column.
pub const NOT_EMPTY_ERROR: &str = "Required cell is empty.";

/// Expected-value text for empty required cells.
pub const NOT_EMPTY_EXPECTED: &str = "A non-empty value.";

/// The closed set of single-cell checks.
///
/// A rule is given one cell's raw string value; when the value is not
/// acceptable it reports exactly one entry describing the violation through
/// the sheet's [`ErrorLog`]. Rules carry their configuration data and are
/// dispatched through [`CellRule::evaluate`]; new rule kinds extend this
/// variant set.
#[derive(Debug, Clone)]
pub enum CellRule {
    /// The value must match at least one of an ordered set of patterns.
    RegexFormat {
        patterns: Vec<Regex>,
        /// Whether a value matching no pattern is a violation at the
        /// configured severity, or merely a warning-level note.
        error_on_no_match: bool,
        severity: Severity,
        message: &'static str,
        expected: &'static str,
    },
    /// The trimmed value must not be empty.
    NotEmpty,
    /// No denylisted character may appear, independent of emptiness.
    SpecialSymbols {
        denylist: Regex,
        message: &'static str,
        expected: &'static str,
    },
}

impl CellRule {
    /// Build a format rule from an ordered set of acceptable patterns.
    pub fn regex_format(
        accepted: &[&str],
        error_on_no_match: bool,
        severity: Severity,
        message: &'static str,
        expected: &'static str,
    ) -> Result<Self, regex::Error> {
        let patterns = accepted
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CellRule::RegexFormat {
            patterns,
            error_on_no_match,
            severity,
            message,
            expected,
        })
    }

    /// Build a non-emptiness rule.
    pub fn not_empty() -> Self {
        CellRule::NotEmpty
    }

    /// Build a denylist rule from an illegal-character pattern.
    pub fn special_symbols(
        denylist: &str,
        message: &'static str,
        expected: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(CellRule::SpecialSymbols {
            denylist: Regex::new(denylist)?,
            message,
            expected,
        })
    }

    /// Check one cell value, reporting a finding on violation.
    ///
    /// Returns whether the value was acceptable.
    pub fn evaluate(&self, value: &str, row: u32, column: u32, log: &mut ErrorLog<'_>) -> bool {
        let trimmed = value.trim();
        match self {
            CellRule::RegexFormat {
                patterns,
                error_on_no_match,
                severity,
                message,
                expected,
            } => {
                if patterns.iter().any(|pattern| pattern.is_match(trimmed)) {
                    return true;
                }
                let severity = if *error_on_no_match { *severity } else { Severity::Warning };
                log.append_error(Entry::cell(severity, row, column, *message, value, *expected));
                false
            }
            CellRule::NotEmpty => {
                if !trimmed.is_empty() {
                    return true;
                }
                log.append_error(Entry::cell(
                    Severity::Error,
                    row,
                    column,
                    NOT_EMPTY_ERROR,
                    value,
                    NOT_EMPTY_EXPECTED,
                ));
                false
            }
            CellRule::SpecialSymbols { denylist, message, expected } => {
                if !denylist.is_match(value) {
                    return true;
                }
                log.append_error(Entry::cell(
                    Severity::Error,
                    row,
                    column,
                    *message,
                    value,
                    *expected,
                ));
                false
            }
        }
    }
}

/// A format rule accepting only dates, plus the empty alternative.
pub fn date_format_rule(message: &'static str, expected: &'static str) -> Result<CellRule, regex::Error> {
    CellRule::regex_format(
        &[patterns::DATE_FORMAT_REGEX, patterns::EMPTY_STRING_REGEX],
        true,
        Severity::Error,
        message,
        expected,
    )
}
