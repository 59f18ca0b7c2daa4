//! Expense repository for JSON storage
//!
//! Owns the in-memory expense list and its on-disk copy in expenses.json.
//! The file holds a bare JSON array of expense records in insertion order and
//! is rewritten in full after every change.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    quarantine_path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository backed by `path`
    ///
    /// A malformed file found by [`load`](Self::load) is copied to
    /// `quarantine_path` before anything can overwrite it.
    pub fn new(path: PathBuf, quarantine_path: PathBuf) -> Self {
        Self {
            path,
            quarantine_path,
            expenses: Vec::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk, replacing whatever is in memory
    ///
    /// A missing file is an empty expense list. If the file can't be read or
    /// parsed the in-memory list is left empty and `PersistCorrupt` is
    /// returned so the caller can tell the user; the session stays usable.
    pub fn load(&mut self) -> ExpenseResult<usize> {
        self.expenses.clear();

        match read_json::<Vec<Expense>, _>(&self.path) {
            Ok(Some(expenses)) => {
                self.expenses = expenses;
                debug!(path = %self.path.display(), count = self.expenses.len(), "loaded expenses");
                Ok(self.expenses.len())
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no expense file yet, starting empty");
                Ok(0)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "expense file is corrupt, starting empty");
                self.quarantine();
                Err(err)
            }
        }
    }

    /// Write the full expense list to disk, replacing the previous file
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.expenses).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "failed to save expenses");
            err
        })?;
        debug!(path = %self.path.display(), count = self.expenses.len(), "saved expenses");
        Ok(())
    }

    /// Append an expense and persist the whole list
    ///
    /// If the write fails the expense is still kept in memory and
    /// `PersistWriteFailed` is returned.
    pub fn append(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.expenses.push(expense);
        self.save()
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn quarantine(&self) {
        match std::fs::copy(&self.path, &self.quarantine_path) {
            Ok(_) => warn!(
                backup = %self.quarantine_path.display(),
                "copied unreadable expense file aside"
            ),
            Err(e) => warn!(error = %e, "could not copy unreadable expense file aside"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> ExpenseRepository {
        ExpenseRepository::new(
            dir.path().join("expenses.json"),
            dir.path().join("expenses.json.corrupt"),
        )
    }

    fn expense(cents: i64, description: &str, category: &str, ymd: (i32, u32, u32)) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            description,
            Category::new(category),
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);

        assert_eq!(repo.load().unwrap(), 0);
        assert!(repo.is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);

        let expenses = vec![
            expense(3000, "bus pass", "Transportation", (2024, 6, 15)),
            expense(1250, "lunch", "Food", (2024, 6, 1)),
            expense(-500, "refund", "Food", (2024, 3, 1)),
            expense(1, "", "Bills", (2023, 12, 31)),
            expense(0, "free sample", "Miscellaneous", (2024, 6, 1)),
        ];
        for e in &expenses {
            repo.append(e.clone()).unwrap();
        }

        let mut reloaded = repo_in(&temp_dir);
        assert_eq!(reloaded.load().unwrap(), 5);
        assert_eq!(reloaded.get_all(), expenses.as_slice());
    }

    #[test]
    fn test_file_is_bare_array() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);
        repo.append(expense(1250, "lunch", "Food", (2024, 6, 1))).unwrap();

        let raw = fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"amount": 12.5, "description": "lunch", "category": "Food", "date": "2024-06-01"}
            ])
        );
    }

    #[test]
    fn test_load_reads_hand_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);
        fs::write(
            repo.path(),
            r#"[
                {"amount": 12.5, "description": "lunch", "category": "Food", "date": "2024-06-01"},
                {"amount": 30, "description": "bus pass", "category": "Transportation", "date": "2024-06-15"}
            ]"#,
        )
        .unwrap();

        assert_eq!(repo.load().unwrap(), 2);
        assert_eq!(repo.get_all()[0].amount, Money::from_cents(1250));
        assert_eq!(repo.get_all()[1].amount, Money::from_cents(3000));
    }

    #[test]
    fn test_sub_cent_amounts_survive_load_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);
        fs::write(
            repo.path(),
            r#"[
                {"amount": 0.125, "description": "a", "category": "Food", "date": "2024-06-01"},
                {"amount": 0.125, "description": "b", "category": "Food", "date": "2024-06-02"}
            ]"#,
        )
        .unwrap();

        repo.load().unwrap();
        let total: Money = repo.get_all().iter().map(|e| e.amount).sum();
        assert_eq!(total, Money::from_cents(25));

        repo.save().unwrap();
        let raw = fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["amount"], serde_json::json!(0.125));
        assert_eq!(value[1]["amount"], serde_json::json!(0.125));
    }

    #[test]
    fn test_malformed_file_reports_corrupt_and_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);

        for bad in [
            "{ not json",
            r#"{"amount": 1}"#,
            r#"[{"amount": "12", "description": "", "category": "Food", "date": "2024-06-01"}]"#,
            r#"[{"amount": 1, "description": "", "category": "Food"}]"#,
        ] {
            fs::write(repo.path(), bad).unwrap();
            repo.expenses.push(expense(1, "stale", "Food", (2024, 1, 1)));

            let err = repo.load().unwrap_err();
            assert!(matches!(err, ExpenseError::PersistCorrupt { .. }), "{bad}");
            assert!(repo.is_empty(), "{bad}");
        }
    }

    #[test]
    fn test_malformed_file_is_copied_aside() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);
        fs::write(repo.path(), "garbage").unwrap();

        assert!(repo.load().is_err());
        repo.append(expense(100, "coffee", "Food", (2024, 6, 2))).unwrap();

        let backup = temp_dir.path().join("expenses.json.corrupt");
        assert_eq!(fs::read_to_string(backup).unwrap(), "garbage");
    }

    #[test]
    fn test_failed_save_keeps_memory() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = repo_in(&temp_dir);
        fs::create_dir(repo.path()).unwrap();

        let err = repo
            .append(expense(1250, "lunch", "Food", (2024, 6, 1)))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::PersistWriteFailed { .. }));
        assert_eq!(repo.len(), 1);
    }
}
