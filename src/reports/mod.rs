//! Reports module for ExpenseCLI
//!
//! Provides the monthly per-category spending summary.

pub mod monthly;

pub use monthly::{MonthSummary, MonthlyCategorySummary};
