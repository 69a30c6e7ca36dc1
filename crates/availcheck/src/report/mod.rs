//! Finding entries, severity levels, and the per-sheet aggregation ledger.

mod entry;
mod log;
mod summary;

pub use entry::{Entry, EntryKey, Location, Severity};
pub use log::ErrorLog;
pub use summary::{LedgerSlot, SheetErrorSummary};
