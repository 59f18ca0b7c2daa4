//! Expense model
//!
//! An expense is one recorded spending event. Expenses are immutable once
//! created; the on-disk record has exactly four fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expense {
    /// Amount spent (zero and negative values are allowed)
    pub amount: Money,

    /// Free-text description, may be empty
    pub description: String,

    /// Category label, validated against the category set when created
    pub category: Category,

    /// Calendar date of the expense (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            date,
        }
    }

    /// The `YYYY-MM` month this expense falls in
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
