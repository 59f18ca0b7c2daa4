//! User settings for ExpenseCLI
//!
//! Holds the fixed category list and display preferences. Settings are read
//! once at startup; the category set built from them does not change for the
//! rest of the process.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::CategorySet;

/// User settings for ExpenseCLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ordered list of expense categories offered for selection
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    CategorySet::DEFAULT_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Build the validated, immutable category set
    pub fn category_set(&self) -> Result<CategorySet, ExpenseError> {
        CategorySet::new(self.categories.iter().cloned())
    }

    /// Check the settings before they are used
    pub fn validate(&self) -> Result<(), ExpenseError> {
        self.category_set()?;
        self.validate_date_format()
    }

    /// The date format must parse and must render a plain date
    ///
    /// Time and zone specifiers (`%H`, `%z`, ...) parse fine but fail when
    /// applied to a date without a time.
    fn validate_date_format(&self) -> Result<(), ExpenseError> {
        let invalid = || {
            ExpenseError::Config(format!("Invalid date format: '{}'", self.date_format))
        };

        let items = StrftimeItems::new(&self.date_format);
        if items.clone().any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        let sample = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or_else(invalid)?;
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format_with_items(items)).map_err(|_| invalid())?;

        Ok(())
    }
}
