//! Storage layer for ExpenseCLI
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance without loading anything
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file(), paths.quarantine_file()),
            paths,
        })
    }

    /// Create storage and load the expense file
    ///
    /// A corrupt expense file does not fail the open: the storage comes back
    /// empty together with the `PersistCorrupt` error as a warning.
    pub fn open(paths: ExpensePaths) -> ExpenseResult<(Self, Option<ExpenseError>)> {
        let mut storage = Self::new(paths)?;
        let warning = storage.load_all().err();
        Ok((storage, warning))
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> ExpenseResult<()> {
        self.expenses.load()?;
        Ok(())
    }
}
