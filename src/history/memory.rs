//! In-memory history store.

use super::{CalculationRecord, HistoryError, HistoryStore, MAX_RECORDS};

/// History kept only for the lifetime of the process.
///
/// Useful for tests and for embedders that do not want an on-disk log.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    records: Vec<CalculationRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: CalculationRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        if self.records.len() > MAX_RECORDS {
            let excess = self.records.len() - MAX_RECORDS;
            self.records.drain(..excess);
        }
        Ok(())
    }

    fn list(&self) -> &[CalculationRecord] {
        &self.records
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        Ok(())
    }
}
