//! Per-sheet validation driver.

use std::sync::Arc;

use crate::report::{ErrorLog, SheetErrorSummary};
use crate::spec::Spec;
use crate::validation::RowValues;

/// Validate one sheet's rows against a specification.
///
/// The header is resolved first, reporting unsupported, duplicate and missing
/// columns. Then, strictly in ascending order, every data row is checked:
/// each resolvable cell runs its column's rules, then the spec's row
/// validators run in order until one signals that the row is fully explained.
/// Row numbers are 1-based Excel coordinates; the header occupies row 1.
///
/// Validation always runs to completion and returns the sheet's summary,
/// ready for reporting.
pub fn validate_sheet(
    spec: &Arc<Spec>,
    sheet_name: &str,
    sheet_index: u32,
    header: &[String],
    rows: &[Vec<String>],
) -> SheetErrorSummary {
    let mut summary = SheetErrorSummary::new(sheet_name, sheet_index, Arc::clone(spec));

    let layout = {
        let mut log = ErrorLog::for_sheet(&mut summary);
        spec.check_headers(header, &mut log)
    };
    summary.set_layout(layout.clone());

    let mut log = ErrorLog::for_sheet(&mut summary);
    for (offset, cells) in rows.iter().enumerate() {
        let row_number = offset as u32 + 2;

        let row_values: RowValues = layout
            .iter()
            .map(|(&index, &id)| {
                let value = cells.get(index as usize).cloned().unwrap_or_default();
                (id, value)
            })
            .collect();

        for (&index, id) in &layout {
            if let Some(definition) = spec.column(*id) {
                let value = row_values.get(id).map(String::as_str).unwrap_or_default();
                definition.validate_cell(value, row_number, index, &mut log);
            }
        }

        for validator in spec.row_validators() {
            if validator.validate(&row_values, row_number, &mut log) {
                break;
            }
        }
    }
    drop(log);

    summary
}
