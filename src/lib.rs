//! ExpenseCLI - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the ExpenseCLI
//! application: recording expenses against a fixed set of categories,
//! persisting them to a JSON file, and summarizing spending per month and
//! category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (the ledger)
//! - `reports`: Monthly category summary
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use expense_cli::config::{ExpensePaths, Settings};
//! use expense_cli::services::LedgerService;
//! use expense_cli::storage::Storage;
//!
//! # fn main() -> expense_cli::ExpenseResult<()> {
//! let paths = ExpensePaths::new()?;
//! let categories = Settings::load_or_create(&paths)?.category_set()?;
//! let (mut storage, _warning) = Storage::open(paths)?;
//!
//! let mut ledger = LedgerService::new(&mut storage, &categories);
//! ledger.add_expense("12.50", "lunch", "Food", Local::now().date_naive())?;
//! println!("{}", ledger.summarize().format_terminal("$"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
