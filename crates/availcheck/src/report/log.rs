//! Per-sheet reporting context handed to every validator invocation.

use super::entry::Entry;
use super::summary::SheetErrorSummary;

/// The single point through which validators report findings.
///
/// One log is constructed per sheet, just before that sheet's rows are
/// processed, and borrows the sheet's summary for exactly that validation
/// pass. Passing it explicitly into every cell-rule and row-validator call
/// keeps the target summary scoped to one sheet: concurrent sheet validation
/// would get one log per worker rather than shared mutable state.
pub struct ErrorLog<'a> {
    summary: &'a mut SheetErrorSummary,
}

impl<'a> ErrorLog<'a> {
    /// Borrow the summary of the sheet currently being validated.
    pub fn for_sheet(summary: &'a mut SheetErrorSummary) -> Self {
        Self { summary }
    }

    /// Route a finding to the active sheet's error ledger.
    pub fn append_error(&mut self, entry: Entry) {
        self.summary.append_error(entry);
    }

    /// Route a finding to the active sheet's notification ledger.
    pub fn append_notification(&mut self, entry: Entry) {
        self.summary.append_notification(entry);
    }
}
