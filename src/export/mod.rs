//! Export functionality for ExpenseCLI
//!
//! Writes the expense list and the monthly summary as CSV for use in
//! spreadsheets.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_summary_csv};
