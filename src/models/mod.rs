//! Core data models for ExpenseCLI
//!
//! This module contains the data structures of the expense domain: amounts,
//! categories and the expense records themselves.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, CategorySelector, CategorySet};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
