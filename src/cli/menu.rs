//! Interactive menu
//!
//! The text menu shown when `expense` runs without a subcommand. Input and
//! output are generic so the loop can be driven from tests.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::display::{format_category_list, format_expense_register, DisplayOptions};
use crate::error::ExpenseResult;
use crate::models::CategorySet;
use crate::services::LedgerService;
use crate::storage::Storage;

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    ViewSummary,
    Exit,
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewExpenses),
            "3" => Some(Self::ViewSummary),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session over a reader/writer pair
pub struct Menu<'a, R, W> {
    ledger: LedgerService<'a>,
    options: &'a DisplayOptions,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        storage: &'a mut Storage,
        categories: &'a CategorySet,
        options: &'a DisplayOptions,
        input: R,
        output: W,
    ) -> Self {
        Self {
            ledger: LedgerService::new(storage, categories),
            options,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    ///
    /// `today` is asked for the current date each time an expense is added.
    pub fn run(&mut self, today: impl Fn() -> NaiveDate) -> ExpenseResult<()> {
        loop {
            self.write("\nExpense Tracker Menu:\n")?;
            self.write("1. Add Expense\n")?;
            self.write("2. View All Expenses\n")?;
            self.write("3. View Expense Summary\n")?;
            self.write("4. Exit\n")?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddExpense) => {
                    if !self.add_expense(today())? {
                        break;
                    }
                }
                Some(MenuChoice::ViewExpenses) => {
                    let register =
                        format_expense_register(self.ledger.list_expenses(), self.options);
                    self.write(&register)?;
                }
                Some(MenuChoice::ViewSummary) => {
                    let summary = self
                        .ledger
                        .summarize()
                        .format_terminal(&self.options.currency_symbol);
                    self.write(&summary)?;
                }
                Some(MenuChoice::Exit) => break,
                None => self.write("Invalid choice. Please choose a valid option.\n")?,
            }
        }

        self.write("Exiting the application.\n")
    }

    /// Prompt for one expense; returns `false` if input ended midway
    fn add_expense(&mut self, today: NaiveDate) -> ExpenseResult<bool> {
        let Some(amount) = self.prompt("Enter the amount spent: ")? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Enter a brief description of the expense: ")? else {
            return Ok(false);
        };

        let categories = format_category_list(self.ledger.categories());
        self.write("\nAvailable Categories:\n")?;
        self.write(&categories)?;

        let Some(selector) =
            self.prompt("Enter the category number or type the category name: ")?
        else {
            return Ok(false);
        };

        match self
            .ledger
            .add_expense(&amount, &description, &selector, today)
        {
            Ok(_) => self.write("Expense added successfully!\n")?,
            Err(err) if err.is_persistence() => {
                self.write(&format!(
                    "Warning: {}\nThe expense is kept for this session only.\n",
                    err
                ))?;
            }
            Err(err) if err.is_validation() => self.write(&format!("Error: {}\n", err))?,
            Err(err) => return Err(err),
        }

        Ok(true)
    }

    /// Print a prompt and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        self.write(text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}
