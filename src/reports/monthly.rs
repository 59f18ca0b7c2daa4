//! Monthly category summary
//!
//! Totals expenses per `YYYY-MM` month and per category. The summary is
//! derived on demand from the expense list and never stored.

use std::collections::HashMap;
use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::{Category, CategorySet, Expense, Money};

/// Totals for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    /// Month key (`YYYY-MM`)
    pub month: String,
    /// Total per category: every configured category in configured order,
    /// then any unknown categories found in the data in first-seen order
    totals: Vec<(Category, Money)>,
    /// Number of expenses in the month
    pub expense_count: usize,
}

impl MonthSummary {
    fn new(month: String, categories: &CategorySet) -> Self {
        Self {
            month,
            totals: categories.iter().map(|c| (c.clone(), Money::zero())).collect(),
            expense_count: 0,
        }
    }

    fn add(&mut self, expense: &Expense) {
        self.expense_count += 1;
        match self.totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => self.totals.push((expense.category.clone(), expense.amount)),
        }
    }

    /// Per-category totals in display order
    pub fn totals(&self) -> &[(Category, Money)] {
        &self.totals
    }

    /// Total for a single category, if it is part of this month's table
    pub fn get(&self, category: &str) -> Option<Money> {
        self.totals
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map(|(_, total)| *total)
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.totals.iter().map(|(_, total)| total).sum()
    }
}

/// Per-month, per-category totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCategorySummary {
    /// Months in order of first appearance in the expense list
    months: Vec<MonthSummary>,
}

impl MonthlyCategorySummary {
    /// Build the summary by scanning expenses in stored order
    ///
    /// Only months with at least one expense appear. Month order is the order
    /// in which each month is first seen, not calendar order.
    pub fn generate(expenses: &[Expense], categories: &CategorySet) -> Self {
        let mut months: Vec<MonthSummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for expense in expenses {
            let key = expense.month_key();
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                months.push(MonthSummary::new(key, categories));
                months.len() - 1
            });
            months[slot].add(expense);
        }

        Self { months }
    }

    pub fn months(&self) -> &[MonthSummary] {
        &self.months
    }

    /// Look up a month by its `YYYY-MM` key
    pub fn get(&self, month: &str) -> Option<&MonthSummary> {
        self.months.iter().find(|m| m.month == month)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Sum over every month
    pub fn grand_total(&self) -> Money {
        self.months.iter().map(|m| m.total()).sum()
    }

    /// Keep only the given month
    pub fn only_month(mut self, month: &str) -> Self {
        self.months.retain(|m| m.month == month);
        self
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.months.is_empty() {
            return "No expenses recorded yet.\n".to_string();
        }

        let width = self
            .months
            .iter()
            .flat_map(|m| m.totals.iter().map(|(c, _)| c.as_str().len()))
            .max()
            .unwrap_or(0)
            .max("Total".len());

        let mut output = String::from("Monthly Expense Summary\n");
        output.push_str(&"=".repeat(width + 16));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!("\nMonth: {}\n", month.month));
            for (category, total) in &month.totals {
                output.push_str(&format!(
                    "  {:<width$} {:>12}\n",
                    category.as_str(),
                    total.format_with_symbol(currency_symbol),
                    width = width
                ));
            }
            output.push_str(&format!("  {}\n", "-".repeat(width + 13)));
            output.push_str(&format!(
                "  {:<width$} {:>12}\n",
                "Total",
                month.total().format_with_symbol(currency_symbol),
                width = width
            ));
        }

        output
    }

    /// Export the summary as `month,category,total` rows
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["month", "category", "total"])?;

        for month in &self.months {
            for (category, total) in &month.totals {
                csv.write_record([
                    month.month.as_str(),
                    category.as_str(),
                    total.to_decimal_string().as_str(),
                ])?;
            }
        }

        csv.flush()?;
        Ok(())
    }
}
