//! JSON-file-backed history store.

use super::{CalculationRecord, HistoryError, HistoryStore, MAX_RECORDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk wrapper shape: `{"calculations": [...]}`.
#[derive(Deserialize)]
struct HistoryFile {
    #[serde(default)]
    calculations: Vec<CalculationRecord>,
}

#[derive(Serialize)]
struct HistoryFileRef<'a> {
    calculations: &'a [CalculationRecord],
}

/// History persisted to a JSON file.
///
/// Opening tolerates a missing or corrupt file by starting with an empty
/// log; the file is rewritten after every `append` and `clear`.
///
/// # Example
///
/// ```rust,no_run
/// use deskcalc::history::{HistoryStore, JsonFileHistory};
///
/// let mut history = JsonFileHistory::open("history.json");
/// println!("{} stored calculations", history.list().len());
/// ```
#[derive(Debug)]
pub struct JsonFileHistory {
    path: PathBuf,
    records: Vec<CalculationRecord>,
}

impl JsonFileHistory {
    /// Open the store at `path`, loading any previously saved records.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = Self::load(&path);
        Self { path, records }
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a snapshot of the current records to another file.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), HistoryError> {
        let text = serde_json::to_string_pretty(&HistoryFileRef {
            calculations: &self.records,
        })?;
        fs::write(path, text)?;
        Ok(())
    }

    fn load(path: &Path) -> Vec<CalculationRecord> {
        let Ok(text) = fs::read_to_string(path) else {
            return Vec::new();
        };
        serde_json::from_str::<HistoryFile>(&text)
            .map(|file| file.calculations)
            .unwrap_or_default()
    }

    fn save(&self) -> Result<(), HistoryError> {
        let text = serde_json::to_string_pretty(&HistoryFileRef {
            calculations: &self.records,
        })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&mut self, record: CalculationRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        if self.records.len() > MAX_RECORDS {
            let excess = self.records.len() - MAX_RECORDS;
            self.records.drain(..excess);
        }
        self.save()
    }

    fn list(&self) -> &[CalculationRecord] {
        &self.records
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn record(expression: &str, result: &str) -> CalculationRecord {
        let at = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        CalculationRecord::new(expression.into(), result.into(), at)
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonFileHistory::open(dir.path().join("history.json"));
        assert!(history.list().is_empty());
    }

    #[test]
    fn appended_records_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = JsonFileHistory::open(&path);
        history.append(record("2 + 3", "5")).unwrap();
        history.append(record("4 × 5", "20")).unwrap();

        let reopened = JsonFileHistory::open(&path);
        assert_eq!(reopened.list().len(), 2);
        assert_eq!(reopened.list()[1].expression, "4 × 5");
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json {").unwrap();

        let history = JsonFileHistory::open(&path);
        assert!(history.list().is_empty());
    }

    #[test]
    fn clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = JsonFileHistory::open(&path);
        history.append(record("1 + 1", "2")).unwrap();
        history.clear().unwrap();

        let reopened = JsonFileHistory::open(&path);
        assert!(reopened.list().is_empty());
    }

    #[test]
    fn export_writes_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let export_path = dir.path().join("export.json");

        let mut history = JsonFileHistory::open(&path);
        history.append(record("2 + 3", "5")).unwrap();
        history.export(&export_path).unwrap();

        let snapshot = JsonFileHistory::open(&export_path);
        assert_eq!(snapshot.list().len(), 1);
        assert_eq!(snapshot.list()[0].result, "5");
    }

    #[test]
    fn retention_cap_applies_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = JsonFileHistory::open(&path);
        for i in 0..=MAX_RECORDS {
            history
                .append(record(&format!("{i} + 0"), &i.to_string()))
                .unwrap();
        }

        let reopened = JsonFileHistory::open(&path);
        assert_eq!(reopened.list().len(), MAX_RECORDS);
        assert_eq!(reopened.list()[0].result, "1");
    }
}
