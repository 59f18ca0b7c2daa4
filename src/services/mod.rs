//! Service layer for ExpenseCLI
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, expense creation and report generation.

pub mod ledger;

pub use ledger::{ExpenseFilter, LedgerService};
