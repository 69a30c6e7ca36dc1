//! Property-based tests for the aggregation ledger.

use std::sync::Arc;

use proptest::prelude::*;

use availcheck::{Entry, Severity, SheetErrorSummary, Spec, SpecVersion};

/// A small catalog of distinct finding kinds to draw violations from.
const KINDS: [(Severity, &str, &str); 4] = [
    (Severity::Error, "Invalid start date format.", "A date in YYYY-MM-DD form."),
    (Severity::Warning, "Invalid price format.", "A decimal number such as '9.99'."),
    (Severity::Warning, "Unexpected exception flag value.", "'Yes', 'No', or left empty."),
    (Severity::Critical, "Invalid column header.", "The precise column names of the spec."),
];

/// One reported violation: a kind index plus the row it occurred at.
fn violation() -> impl Strategy<Value = (usize, u32)> {
    (0..KINDS.len(), 2u32..200)
}

fn summarize(events: &[(usize, u32)]) -> SheetErrorSummary {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let mut summary = SheetErrorSummary::new("Avails", 0, spec);
    for &(kind, row) in events {
        let (severity, message, expected) = KINDS[kind];
        summary.append_error(Entry::cell(severity, row, kind as u32, message, "bad", expected));
    }
    summary
}

/// Ledger contents as an order-independent view: (message, occurrence count,
/// sorted locations) per distinct key.
fn ledger_view(summary: &SheetErrorSummary) -> Vec<(String, usize, Vec<String>)> {
    let mut view: Vec<_> = summary
        .error_log()
        .map(|slot| {
            let mut locations: Vec<String> = slot
                .entry
                .locations()
                .iter()
                .map(|location| location.to_excel_string())
                .collect();
            locations.sort();
            (slot.entry.message().to_string(), slot.count, locations)
        })
        .collect();
    view.sort();
    view
}

proptest! {
    /// Summarizing the same violations in any row order yields the same
    /// final ledger contents and severity counts.
    #[test]
    fn prop_aggregation_is_order_independent(mut events in prop::collection::vec(violation(), 0..60)) {
        let forward = summarize(&events);
        events.reverse();
        let reverse = summarize(&events);

        prop_assert_eq!(ledger_view(&forward), ledger_view(&reverse));
        prop_assert_eq!(forward.error_counts(), reverse.error_counts());
        prop_assert_eq!(forward.error_count(), reverse.error_count());
    }

    /// N identical violations collapse to one entry whose occurrence count
    /// is N, with the severity counter also at N.
    #[test]
    fn prop_identical_violations_collapse(n in 1usize..50) {
        let events: Vec<(usize, u32)> = (0..n).map(|i| (0, i as u32 + 2)).collect();
        let summary = summarize(&events);

        prop_assert_eq!(summary.error_columns_count(), 1);
        prop_assert_eq!(summary.error_count(), n);
        prop_assert_eq!(summary.error_counts()[&KINDS[0].0], n);
        let slot = summary.error_log().next().unwrap();
        prop_assert_eq!(slot.count, n);
        prop_assert_eq!(slot.entry.locations().len(), n);
    }

    /// Total error count equals the sum over severity counters.
    #[test]
    fn prop_severity_counters_sum_to_total(events in prop::collection::vec(violation(), 0..60)) {
        let summary = summarize(&events);
        let by_severity: usize = summary.error_counts().values().sum();
        prop_assert_eq!(summary.error_count(), by_severity);
        prop_assert_eq!(summary.error_count(), events.len());
    }
}
