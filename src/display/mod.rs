//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and categories for terminal
//! display. The monthly summary formats itself (see `reports`).

pub mod expense;

pub use expense::{format_expense_register, format_expense_row, DisplayOptions};

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::CategorySet;

/// Format a date, falling back to `YYYY-MM-DD` if the format cannot render it
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut output = String::new();
    if write!(output, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    output
}

/// Numbered category list, as shown when picking a category
pub fn format_category_list(categories: &CategorySet) -> String {
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| format!("{}. {}\n", i + 1, category))
        .collect()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
