//! Configuration module for ExpenseCLI
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (category list, display preferences)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
