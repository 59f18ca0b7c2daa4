//! Expense CLI commands
//!
//! One-shot commands for recording, listing and summarizing expenses.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::display::{
    format_category_list, format_date, format_expense_register, DisplayOptions,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_summary_csv};
use crate::models::CategorySet;
use crate::services::{ExpenseFilter, LedgerService};
use crate::storage::Storage;

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50"; negative values record refunds)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category number (1-based) or exact category name
    pub category: String,

    /// Short description of the expense
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `expense list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show expenses from this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Only show expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `expense summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Only show this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every expense to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },
    /// Export the monthly category summary to CSV
    Summary {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle `expense add`
pub fn handle_add_command(
    storage: &mut Storage,
    categories: &CategorySet,
    options: &DisplayOptions,
    args: AddArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let date = args.date.unwrap_or(today);
    let mut ledger = LedgerService::new(storage, categories);
    let expense = ledger.add_expense(&args.amount, &args.description, &args.category, date)?;

    println!(
        "Added {} ({}) on {}",
        expense.amount.format_with_symbol(&options.currency_symbol),
        expense.category,
        format_date(expense.date, &options.date_format)
    );
    Ok(())
}

/// Handle `expense list`
pub fn handle_list_command(
    storage: &mut Storage,
    categories: &CategorySet,
    options: &DisplayOptions,
    args: ListArgs,
) -> ExpenseResult<()> {
    let ledger = LedgerService::new(storage, categories);

    let mut filter = ExpenseFilter::new();
    if let Some(month) = args.month {
        filter = filter.month(month);
    }
    if let Some(category) = args.category {
        let category = ledger.resolve_category(&category)?;
        filter = filter.category(category.as_str());
    }

    print!("{}", format_expense_register(ledger.list_filtered(&filter), options));
    Ok(())
}

/// Handle `expense summary`
pub fn handle_summary_command(
    storage: &mut Storage,
    categories: &CategorySet,
    options: &DisplayOptions,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let ledger = LedgerService::new(storage, categories);

    let mut summary = ledger.summarize();
    if let Some(month) = args.month {
        summary = summary.only_month(&month);
    }

    print!("{}", summary.format_terminal(&options.currency_symbol));
    if summary.len() > 1 {
        println!(
            "\nGrand total: {}",
            summary
                .grand_total()
                .format_with_symbol(&options.currency_symbol)
        );
    }
    Ok(())
}

/// Handle `expense categories`
pub fn handle_categories_command(categories: &CategorySet) {
    println!("Available Categories:");
    print!("{}", format_category_list(categories));
}

/// Handle `expense export ...`
pub fn handle_export_command(
    storage: &Storage,
    categories: &CategorySet,
    cmd: ExportCommands,
) -> ExpenseResult<()> {
    let expenses = storage.expenses.get_all();

    match cmd {
        ExportCommands::Expenses { output } => {
            let count = export_expenses_csv(expenses, create_output(&output)?)?;
            println!("Exported {} expenses to: {}", count, output.display());
        }
        ExportCommands::Summary { output } => {
            export_summary_csv(expenses, categories, create_output(&output)?)?;
            println!("Summary exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> ExpenseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
