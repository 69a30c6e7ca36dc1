//! Per-sheet aggregation ledger and severity counts.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::json;

use crate::spec::{ColumnId, Spec, SpecVersion};

use super::entry::{Entry, EntryKey, Severity};

/// One ledger slot: the deduplicated entry plus its occurrence count.
#[derive(Debug, Clone)]
pub struct LedgerSlot {
    pub entry: Entry,
    pub count: usize,
}

/// Summarizes every finding that occurred while validating a single sheet of
/// a single workbook, together with the context needed to report them.
///
/// Findings are deduplicated by [`EntryKey`]: a recurrence merges into the
/// existing entry's location accumulator instead of inserting a second ledger
/// row. Every occurrence, first or repeated, counts toward the per-severity
/// totals. Insertion order is preserved so reports are deterministic.
///
/// Created once per sheet before validation begins; mutated by every
/// validator invocation through the [`ErrorLog`](super::ErrorLog); discarded
/// once its report has been emitted.
#[derive(Debug)]
pub struct SheetErrorSummary {
    /// The 0-based index of the sheet within the input workbook.
    sheet_index: u32,
    /// The sheet name as input from the workbook.
    sheet_name: String,
    /// The spec this sheet was graded against.
    spec: Arc<Spec>,
    /// Resolved header layout: column index to column definition.
    layout: IndexMap<u32, ColumnId>,
    /// Deduplicated error ledger.
    error_log: IndexMap<EntryKey, LedgerSlot>,
    /// Deduplicated notification ledger.
    notifications_log: IndexMap<EntryKey, LedgerSlot>,
    /// Number of occurrences per severity level.
    error_counts: IndexMap<Severity, usize>,
}

impl SheetErrorSummary {
    /// Create an empty summary for one sheet. All severity counters start at
    /// zero for every declared level.
    pub fn new(sheet_name: impl Into<String>, sheet_index: u32, spec: Arc<Spec>) -> Self {
        let mut error_counts = IndexMap::new();
        for level in Severity::ALL {
            error_counts.insert(level, 0);
        }
        Self {
            sheet_index,
            sheet_name: sheet_name.into(),
            spec,
            layout: IndexMap::new(),
            error_log: IndexMap::new(),
            notifications_log: IndexMap::new(),
            error_counts,
        }
    }

    /// Record the header layout resolved against the spec, used when
    /// formatting cell locations back into column names.
    pub fn set_layout(&mut self, layout: IndexMap<u32, ColumnId>) {
        self.layout = layout;
    }

    /// Append a finding to the error ledger.
    ///
    /// A first occurrence inserts the entry with a count of 1; a recurrence
    /// assimilates into the existing entry and increments its count. Either
    /// way the severity's running total increments by exactly 1.
    pub fn append_error(&mut self, new_error: Entry) {
        let severity = new_error.severity();
        Self::append(&mut self.error_log, new_error);
        *self.error_counts.entry(severity).or_insert(0) += 1;
    }

    /// Append a finding to the notification ledger. Same merge and counting
    /// rules as [`append_error`](Self::append_error).
    pub fn append_notification(&mut self, new_notification: Entry) {
        let severity = new_notification.severity();
        Self::append(&mut self.notifications_log, new_notification);
        *self.error_counts.entry(severity).or_insert(0) += 1;
    }

    fn append(ledger: &mut IndexMap<EntryKey, LedgerSlot>, new_entry: Entry) {
        match ledger.entry(new_entry.key()) {
            indexmap::map::Entry::Occupied(mut slot) => {
                let slot = slot.get_mut();
                slot.entry.assimilate(new_entry);
                slot.count += 1;
            }
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(LedgerSlot { entry: new_entry, count: 1 });
            }
        }
    }

    /// Reset the error ledger and severity counts back to the
    /// construction-time empty state.
    ///
    /// The notification ledger is deliberately untouched: notifications are
    /// informational context that survives a re-validation pass of the same
    /// sheet.
    pub fn clear_error_sheet_summary(&mut self) {
        self.error_log.clear();
        for count in self.error_counts.values_mut() {
            *count = 0;
        }
    }

    /// Total number of error occurrences: the sum of every ledger slot's
    /// occurrence count, not the number of distinct entries.
    pub fn error_count(&self) -> usize {
        self.error_log.values().map(|slot| slot.count).sum()
    }

    /// Number of distinct error findings in the ledger.
    pub fn error_columns_count(&self) -> usize {
        self.error_log.len()
    }

    /// Total number of notification occurrences.
    pub fn notification_count(&self) -> usize {
        self.notifications_log.values().map(|slot| slot.count).sum()
    }

    /// Occurrences per severity level. Every declared level is present.
    pub fn error_counts(&self) -> &IndexMap<Severity, usize> {
        &self.error_counts
    }

    /// The distinct error findings, in first-seen order.
    pub fn error_log(&self) -> impl Iterator<Item = &LedgerSlot> {
        self.error_log.values()
    }

    /// The distinct notification findings, in first-seen order.
    pub fn notifications_log(&self) -> impl Iterator<Item = &LedgerSlot> {
        self.notifications_log.values()
    }

    /// The 0-based index of the sheet this summary covers.
    pub fn sheet_index(&self) -> u32 {
        self.sheet_index
    }

    /// The sheet index in 1-based Excel coordinates, for readability.
    pub fn excel_coordinates_sheet_index(&self) -> u32 {
        self.sheet_index + 1
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// The spec version this sheet was validated under.
    pub fn spec_version(&self) -> SpecVersion {
        self.spec.version()
    }

    /// The spec this sheet was graded against.
    pub fn validating_spec(&self) -> &Arc<Spec> {
        &self.spec
    }

    /// Format every distinct finding in the error ledger, one line per
    /// finding, resolving cell locations to column names through the owning
    /// spec's resolved layout.
    pub fn print_sheet_error_summary(&self) -> String {
        let mut out = String::new();
        for slot in self.error_log.values() {
            out.push_str(&self.entry_log_string(slot));
            out.push('\n');
        }
        out
    }

    /// One formatted report line for a ledger slot.
    fn entry_log_string(&self, slot: &LedgerSlot) -> String {
        let entry = &slot.entry;
        let locations = entry
            .locations()
            .iter()
            .map(|location| match location.column().and_then(|c| self.layout.get(&c)) {
                Some(id) => format!("{} {}", id.name(), location.to_excel_string()),
                None => location.to_excel_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        let required = entry
            .locations()
            .iter()
            .filter_map(|location| location.column())
            .filter_map(|c| self.layout.get(&c))
            .filter_map(|id| self.spec.column(*id))
            .any(|definition| definition.required());
        format!(
            "[{}] {} Value: '{}'. Expected: {} ({} occurrence(s){}) at: {}",
            entry.severity().label(),
            entry.message(),
            entry.value(),
            entry.expected(),
            slot.count,
            if required { ", required column" } else { "" },
            locations,
        )
    }

    /// Format the sheet name, 1-based index, spec version, and total error
    /// count as a fixed four-line block for report output.
    pub fn sheet_print_string(&self) -> String {
        format!(
            "Sheet  name: {}\nSheet index: {}\nSpec version: {}\nError count: {}\n",
            self.sheet_name,
            self.excel_coordinates_sheet_index(),
            self.spec.version(),
            self.error_count(),
        )
    }

    /// The full summary as a JSON value for the reporting collaborator.
    pub fn json_report(&self) -> serde_json::Value {
        let ledger_json = |ledger: &IndexMap<EntryKey, LedgerSlot>| {
            ledger
                .values()
                .map(|slot| {
                    json!({
                        "severity": slot.entry.severity(),
                        "message": slot.entry.message(),
                        "expected": slot.entry.expected(),
                        "value": slot.entry.value(),
                        "occurrences": slot.count,
                        "locations": slot.entry.locations(),
                    })
                })
                .collect::<Vec<_>>()
        };
        json!({
            "sheet_name": self.sheet_name,
            "sheet_index": self.sheet_index,
            "excel_sheet_index": self.excel_coordinates_sheet_index(),
            "spec_version": self.spec.version().to_string(),
            "severity_counts": self
                .error_counts
                .iter()
                .map(|(level, count)| (level.label().to_string(), *count))
                .collect::<IndexMap<_, _>>(),
            "errors": ledger_json(&self.error_log),
            "notifications": ledger_json(&self.notifications_log),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SheetErrorSummary {
        let spec = Spec::for_version(SpecVersion::V1_6).expect("spec builds");
        SheetErrorSummary::new("Avails", 0, Arc::new(spec))
    }

    fn format_error(row: u32) -> Entry {
        Entry::cell(Severity::Error, row, 2, "Bad date format.", "13/01/2020", "YYYY-MM-DD")
    }

    #[test]
    fn test_repeated_error_collapses_to_one_slot() {
        let mut summary = summary();
        for row in 2..7 {
            summary.append_error(format_error(row));
        }

        assert_eq!(summary.error_columns_count(), 1);
        assert_eq!(summary.error_count(), 5);
        assert_eq!(summary.error_counts()[&Severity::Error], 5);
        let slot = summary.error_log().next().unwrap();
        assert_eq!(slot.count, 5);
        assert_eq!(slot.entry.locations().len(), 5);
    }

    #[test]
    fn test_different_severities_never_merge() {
        let mut summary = summary();
        summary.append_error(Entry::row(Severity::Error, 2, "Flag unset.", "", "Yes"));
        summary.append_error(Entry::row(Severity::Warning, 2, "Flag unset.", "", "Yes"));

        assert_eq!(summary.error_columns_count(), 2);
        assert_eq!(summary.error_counts()[&Severity::Error], 1);
        assert_eq!(summary.error_counts()[&Severity::Warning], 1);
    }

    #[test]
    fn test_clear_is_asymmetric() {
        let mut summary = summary();
        summary.append_error(format_error(2));
        summary.append_notification(Entry::row(
            Severity::Notification,
            2,
            "Open-ended window.",
            "Open",
            "A closing date may be supplied later.",
        ));

        summary.clear_error_sheet_summary();

        assert_eq!(summary.error_count(), 0);
        assert_eq!(summary.error_columns_count(), 0);
        assert_eq!(summary.error_counts()[&Severity::Error], 0);
        // Notifications survive the clear.
        assert_eq!(summary.notification_count(), 1);
    }

    #[test]
    fn test_excel_sheet_index() {
        let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
        let summary = SheetErrorSummary::new("Avails", 3, spec);
        assert_eq!(summary.excel_coordinates_sheet_index(), summary.sheet_index() + 1);
    }

    #[test]
    fn test_sheet_print_string_block() {
        let mut summary = summary();
        summary.append_error(format_error(2));
        summary.append_error(format_error(3));

        let block = summary.sheet_print_string();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Sheet  name: Avails");
        assert_eq!(lines[1], "Sheet index: 1");
        assert!(lines[2].starts_with("Spec version: "));
        assert_eq!(lines[3], "Error count: 2");
    }
}
