//! Expense display formatting
//!
//! Formats the expense register for terminal output.

use crate::models::Expense;

use super::{format_date, truncate};

/// Display options taken from settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl From<&crate::config::Settings> for DisplayOptions {
    fn from(settings: &crate::config::Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, options: &DisplayOptions) -> String {
    format!(
        "{:<10}  {:>12}  {:<16}  {}",
        format_date(expense.date, &options.date_format),
        expense.amount.format_with_symbol(&options.currency_symbol),
        truncate(expense.category.as_str(), 16),
        expense.description
    )
}

/// Format expenses as a register, in the order given
pub fn format_expense_register<'a, I>(expenses: I, options: &DisplayOptions) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut rows = expenses.into_iter().peekable();
    if rows.peek().is_none() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = format!(
        "{:<10}  {:>12}  {:<16}  {}\n",
        "Date", "Amount", "Category", "Description"
    );
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in rows {
        output.push_str(&format_expense_row(expense, options));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::new(
            Money::from_cents(1250),
            "lunch",
            Category::new("Food"),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_empty_register() {
        let output = format_expense_register(&Vec::<Expense>::new(), &DisplayOptions::default());
        assert_eq!(output, "No expenses recorded yet.\n");
    }

    #[test]
    fn test_row() {
        let row = format_expense_row(&lunch(), &DisplayOptions::default());
        assert!(row.starts_with("2024-06-01"));
        assert!(row.contains("$12.50"));
        assert!(row.contains("Food"));
        assert!(row.ends_with("lunch"));
    }

    #[test]
    fn test_row_uses_settings() {
        let options = DisplayOptions {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
        };
        let row = format_expense_row(&lunch(), &options);
        assert!(row.starts_with("01/06/2024"));
        assert!(row.contains("€12.50"));
    }

    #[test]
    fn test_row_with_time_format_does_not_panic() {
        let options = DisplayOptions {
            currency_symbol: "$".into(),
            date_format: "%H:%M".into(),
        };
        let row = format_expense_row(&lunch(), &options);
        assert!(row.starts_with("2024-06-01"));
    }

    #[test]
    fn test_register_keeps_order() {
        let mut bus = lunch();
        bus.description = "bus pass".into();
        let expenses = vec![lunch(), bus];

        let output = format_expense_register(&expenses, &DisplayOptions::default());
        let lunch_at = output.find("lunch").unwrap();
        let bus_at = output.find("bus pass").unwrap();
        assert!(output.starts_with("Date"));
        assert!(lunch_at < bus_at);
    }
}
