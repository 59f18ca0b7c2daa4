//! Custom error types for ExpenseCLI
//!
//! Every failure the library can report is an `ExpenseError`. None of them are
//! fatal: the CLI layer turns them into a message and carries on.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ExpenseCLI operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Amount text could not be parsed as a number
    #[error("Invalid amount: '{0}' is not a valid number")]
    InvalidAmount(String),

    /// Numeric category selector outside `1..=count`
    #[error("Invalid category number: {index} (choose 1-{count})")]
    InvalidCategoryIndex { index: usize, count: usize },

    /// Category name that matches none of the configured categories
    #[error("Invalid category name: '{0}'")]
    InvalidCategoryName(String),

    /// Persisted expense data exists but could not be read or parsed
    #[error("Expense data at {} is unreadable and was ignored: {reason}", .path.display())]
    PersistCorrupt { path: PathBuf, reason: String },

    /// Persisted expense data could not be written
    #[error("Failed to save expense data to {}: {reason}", .path.display())]
    PersistWriteFailed { path: PathBuf, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a corruption error for the given store file
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::PersistCorrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a write failure for the given store file
    pub fn write_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::PersistWriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error was caused by bad user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidCategoryIndex { .. } | Self::InvalidCategoryName(_)
        )
    }

    /// Check if this error concerns the persisted expense file
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::PersistCorrupt { .. } | Self::PersistWriteFailed { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ExpenseCLI operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_category_index_error() {
        let err = ExpenseError::InvalidCategoryIndex {
            index: 9,
            count: 5,
        };
        assert_eq!(err.to_string(), "Invalid category number: 9 (choose 1-5)");
        assert!(err.is_validation());
        assert!(!err.is_persistence());
    }

    #[test]
    fn test_persistence_errors() {
        let err = ExpenseError::corrupt("/tmp/expenses.json", "expected value");
        assert!(err.is_persistence());
        assert_eq!(
            err.to_string(),
            "Expense data at /tmp/expenses.json is unreadable and was ignored: expected value"
        );

        let err = ExpenseError::write_failed("/tmp/expenses.json", "disk full");
        assert!(err.is_persistence());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
