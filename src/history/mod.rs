//! Calculation history storage.
//!
//! The core appends a [`CalculationRecord`] after each successful
//! evaluation and never reads the log back for computation. Stores are
//! append-only with a retention cap; persistence failures are the store's
//! concern and must never block calculator usage.

mod error;
mod file;
mod memory;

pub use error::HistoryError;
pub use file::JsonFileHistory;
pub use memory::MemoryHistory;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Maximum number of records a store retains; oldest entries evict first.
pub const MAX_RECORDS: usize = 100;

/// One completed calculation.
///
/// Created exactly once per successful evaluate event and never mutated.
/// The expression keeps the display glyphs (`×`, `÷`); the timestamp is
/// formatted `YYYY-MM-DD HH:MM:SS`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub expression: String,
    pub result: String,
    pub timestamp: String,
}

impl CalculationRecord {
    /// Build a record stamped with the given wall-clock time.
    pub fn new(expression: String, result: String, at: DateTime<Local>) -> Self {
        Self {
            expression,
            result,
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Append-only log of completed calculations.
///
/// The core treats `append` as fire-and-forget: a failing store must never
/// surface as a calculator error. `list` returns records in insertion
/// order, most recent last.
pub trait HistoryStore {
    /// Append a record, evicting the oldest entries beyond [`MAX_RECORDS`].
    fn append(&mut self, record: CalculationRecord) -> Result<(), HistoryError>;

    /// All retained records, most recent last.
    fn list(&self) -> &[CalculationRecord];

    /// Discard every record.
    fn clear(&mut self) -> Result<(), HistoryError>;

    /// The most recent `count` records, oldest first.
    fn recent(&self, count: usize) -> &[CalculationRecord] {
        let records = self.list();
        &records[records.len().saturating_sub(count)..]
    }

    /// Case-insensitive substring search over expressions and results.
    /// An empty term matches everything.
    fn search(&self, term: &str) -> Vec<&CalculationRecord> {
        let term = term.to_lowercase();
        self.list()
            .iter()
            .filter(|record| {
                record.expression.to_lowercase().contains(&term)
                    || record.result.to_lowercase().contains(&term)
            })
            .collect()
    }
}
