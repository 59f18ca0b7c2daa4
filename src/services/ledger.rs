//! Ledger service
//!
//! Validates and records new expenses and produces the views the CLI shows:
//! the expense list and the monthly category summary.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategorySet, Expense, Money};
use crate::reports::MonthlyCategorySummary;
use crate::storage::Storage;

/// Service for recording and reporting expenses
pub struct LedgerService<'a> {
    storage: &'a mut Storage,
    categories: &'a CategorySet,
}

/// Optional narrowing of the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Only expenses in this `YYYY-MM` month
    pub month: Option<String>,
    /// Only expenses in this category (exact name)
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn matches(&self, expense: &Expense) -> bool {
        self.month
            .as_deref()
            .map_or(true, |month| expense.month_key() == month)
            && self
                .category
                .as_deref()
                .map_or(true, |category| expense.category.as_str() == category)
    }
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a mut Storage, categories: &'a CategorySet) -> Self {
        Self {
            storage,
            categories,
        }
    }

    /// The configured category set
    pub fn categories(&self) -> &CategorySet {
        self.categories
    }

    /// Record a new expense dated `today`
    ///
    /// The amount and category are fully validated before anything is
    /// touched; on a validation error the expense list is unchanged and
    /// nothing is written. If the write itself fails the expense stays in
    /// memory and `PersistWriteFailed` is returned.
    pub fn add_expense(
        &mut self,
        raw_amount: &str,
        description: &str,
        raw_category: &str,
        today: NaiveDate,
    ) -> ExpenseResult<Expense> {
        let amount = parse_amount(raw_amount)?;
        let category = self.resolve_category(raw_category)?;

        let expense = Expense::new(amount, description, category, today);
        self.storage.expenses.append(expense.clone())?;

        info!(
            amount = %expense.amount,
            category = %expense.category,
            date = %expense.date,
            "expense added"
        );

        Ok(expense)
    }

    /// Resolve a category selector (1-based number or exact name)
    pub fn resolve_category(&self, raw: &str) -> ExpenseResult<Category> {
        self.categories.resolve_str(raw)
    }

    /// All expenses in the order they were recorded
    pub fn list_expenses(&self) -> &[Expense] {
        self.storage.expenses.get_all()
    }

    /// Expenses matching `filter`, in the order they were recorded
    pub fn list_filtered(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.list_expenses()
            .iter()
            .filter(|e| filter.matches(e))
            .collect()
    }

    /// Per-month, per-category totals over every expense
    pub fn summarize(&self) -> MonthlyCategorySummary {
        MonthlyCategorySummary::generate(self.list_expenses(), self.categories)
    }
}

fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    Money::parse(raw).map_err(|_| ExpenseError::InvalidAmount(raw.to_string()))
}
