//! availcheck: specification-driven validator for avails metadata sheets.
//!
//! Metadata producers deliver spreadsheet-like avails data organized into
//! sheets, rows, and named columns. availcheck grades each sheet against a
//! versioned specification of expected column formats and cross-column
//! business rules, so formatting problems are caught before a deliverable is
//! accepted downstream.
//!
//! # Core Principles
//!
//! - **Classify, never correct**: deviations are reported, partitioned by
//!   severity; the input data is never modified
//! - **Deduplicated findings**: repeated violations collapse into one ledger
//!   entry that accumulates every location it recurred at
//! - **Version-scoped rules**: every rule applied to a sheet comes from
//!   exactly one selected [`Spec`] revision
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use availcheck::{validate_sheet, Spec, SpecVersion};
//!
//! let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
//! let header: Vec<String> = ["AvailID", "Territory", "Start"]
//!     .iter().map(|s| s.to_string()).collect();
//! let rows = vec![vec!["AVAIL-001".to_string(), "US".to_string(), "2020-01-01".to_string()]];
//!
//! let summary = validate_sheet(&spec, "Avails", 0, &header, &rows);
//! println!("{}", summary.sheet_print_string());
//! ```
//!
//! Parsing the spreadsheet file format, detecting which spec version a
//! workbook conforms to, and rendering reports are the caller's concern: the
//! library consumes a row-oriented view of cell values and exposes per-sheet
//! summaries ready for printing.

pub mod error;
pub mod report;
pub mod spec;
pub mod validation;

mod sheet;

pub use error::{AvailError, Result};
pub use report::{Entry, EntryKey, ErrorLog, LedgerSlot, Location, Severity, SheetErrorSummary};
pub use sheet::validate_sheet;
pub use spec::{ColumnDefinition, ColumnId, Spec, SpecVersion};
pub use validation::{CellRule, RowValidator, RowValues};
