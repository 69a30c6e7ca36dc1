//! Cross-column rules evaluated once per data row.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::report::{Entry, ErrorLog, Severity};
use crate::spec::{ColumnId, SpecVersion};

use super::patterns;

/// The named cell values of one data row, keyed by resolved column.
///
/// Columns whose headers could not be resolved against the active spec are
/// absent from the map; row validators treat that absence as already
/// explained by the header check rather than raising a secondary error.
pub type RowValues = IndexMap<ColumnId, String>;

/// A rule inspecting cross-column relationships of one row.
pub trait RowValidator {
    /// Check one row, reporting zero or more findings through the log.
    ///
    /// Returns `true` when the row's state is fully explained and the driver
    /// should skip the remaining row validators for this row; `false` to
    /// continue with the next rule.
    fn validate(&self, row: &RowValues, row_number: u32, log: &mut ErrorLog<'_>) -> bool;
}

pub const CAPTION_INCLUDED_ERROR: &str =
    "Captions must be declared for titles available in the United States.";
pub const CAPTION_INCLUDED_EXPECTED: &str = "'Yes' or 'No' only.";

/// United States titles must state whether captions are included.
///
/// Under the TV spec a season aggregate row is exempt entirely: caption data
/// lives on its episodes.
pub struct RowValidatorCaptionIncluded {
    version: SpecVersion,
}

impl RowValidatorCaptionIncluded {
    pub fn new(version: SpecVersion) -> Self {
        Self { version }
    }
}

impl RowValidator for RowValidatorCaptionIncluded {
    fn validate(&self, row: &RowValues, row_number: u32, log: &mut ErrorLog<'_>) -> bool {
        let Some(territory) = row.get(&ColumnId::Territory) else {
            // A missing territory column has already been reported by the
            // header check; nothing further to explain for this row.
            return true;
        };
        let Some(caption_included) = row.get(&ColumnId::CaptionIncluded) else {
            return true;
        };

        if self.version == SpecVersion::V1_6Tv {
            let Some(work_type) = row.get(&ColumnId::WorkType) else {
                return true;
            };
            // Season identifier rows carry no caption information.
            if work_type.to_lowercase().contains("season") {
                return true;
            }
        }

        if patterns::UNITED_STATES.is_match(territory.trim())
            && !patterns::YES_OR_NO.is_match(caption_included.trim())
        {
            log.append_error(Entry::row(
                Severity::Error,
                row_number,
                CAPTION_INCLUDED_ERROR,
                caption_included,
                CAPTION_INCLUDED_EXPECTED,
            ));
        }
        false
    }
}

pub const EXCEPTION_FLAG_NOT_SET_ERROR: &str =
    "The exception flag column must be 'Yes' if manual columns are filled in.";
pub const EXCEPTION_FLAG_EXPECTED: &str = "'Yes' whenever SRP or CaptionExemption is supplied.";

/// Manually overridden columns require the exception flag to be raised.
pub struct RowValidatorExceptionFlag;

impl RowValidator for RowValidatorExceptionFlag {
    fn validate(&self, row: &RowValues, row_number: u32, log: &mut ErrorLog<'_>) -> bool {
        let Some(flag) = row.get(&ColumnId::ExceptionFlag) else {
            return true;
        };

        let manual_filled = [ColumnId::Srp, ColumnId::CaptionExemption]
            .iter()
            .any(|id| row.get(id).is_some_and(|value| !value.trim().is_empty()));

        if manual_filled && !flag.trim().eq_ignore_ascii_case("yes") {
            log.append_error(Entry::row(
                Severity::Warning,
                row_number,
                EXCEPTION_FLAG_NOT_SET_ERROR,
                flag,
                EXCEPTION_FLAG_EXPECTED,
            ));
        }
        false
    }
}

pub const DATE_ORDER_ERROR: &str = "The availability window ends before it starts.";
pub const DATE_ORDER_EXPECTED: &str = "An end date on or after the start date.";
pub const OPEN_WINDOW_NOTE: &str = "Open-ended availability window.";
pub const OPEN_WINDOW_EXPECTED: &str = "A closing date may be supplied in a later delivery.";

/// The avail window's end date must not precede its start date.
///
/// An end value of `Open` is a valid open-ended window and is surfaced as a
/// notification. Values that fail to parse are left alone; the date-format
/// cell rule has already reported them.
pub struct RowValidatorDateOrder;

impl RowValidator for RowValidatorDateOrder {
    fn validate(&self, row: &RowValues, row_number: u32, log: &mut ErrorLog<'_>) -> bool {
        let Some(start) = row.get(&ColumnId::StartDate) else {
            return true;
        };
        let Some(end) = row.get(&ColumnId::EndDate) else {
            return true;
        };

        if patterns::OPEN_ENDED.is_match(end.trim()) {
            log.append_notification(Entry::row(
                Severity::Notification,
                row_number,
                OPEN_WINDOW_NOTE,
                end,
                OPEN_WINDOW_EXPECTED,
            ));
            return false;
        }

        let parse = |value: &str| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d");
        if let (Ok(start), Ok(end)) = (parse(start), parse(end)) {
            if end < start {
                log.append_error(Entry::row(
                    Severity::Error,
                    row_number,
                    DATE_ORDER_ERROR,
                    format!("{start} to {end}"),
                    DATE_ORDER_EXPECTED,
                ));
            }
        }
        false
    }
}
