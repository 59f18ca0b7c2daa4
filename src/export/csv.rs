//! CSV Export functionality
//!
//! Exports expenses and the monthly category summary to CSV format.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::{CategorySet, Expense};
use crate::reports::MonthlyCategorySummary;

/// Export expenses in stored order as `date,amount,category,description`
///
/// Returns the number of rows written.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["date", "amount", "category", "description"])?;

    for expense in expenses {
        csv.write_record([
            expense.date.format("%Y-%m-%d").to_string().as_str(),
            expense.amount.to_decimal_string().as_str(),
            expense.category.as_str(),
            expense.description.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(expenses.len())
}

/// Export the monthly category summary as `month,category,total`
pub fn export_summary_csv<W: Write>(
    expenses: &[Expense],
    categories: &CategorySet,
    writer: W,
) -> ExpenseResult<()> {
    MonthlyCategorySummary::generate(expenses, categories).export_csv(writer)
}
