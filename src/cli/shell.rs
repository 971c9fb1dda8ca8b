use std::io::{BufRead, Write};

use crate::application::AppError;
use crate::domain::{format_amount, Amount, Ledger};

use super::Prompt;

const MENU: [&str; 6] = [
    "====== EXPENSE TRACKER MENU ======",
    "1. Add an expense",
    "2. View all expenses",
    "3. View total spent",
    "4. View total spent by category",
    "5. Exit",
];

/// One entry of the main menu, selected by its exact number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    ViewTotal,
    ViewByCategory,
    Exit,
}

impl MenuChoice {
    /// Only the literal strings "1" to "5" select an entry; " 1" or "1." do not.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::ViewTotal),
            "4" => Some(MenuChoice::ViewByCategory),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive menu loop over a [`Ledger`].
pub struct Shell<R, W> {
    ledger: Ledger,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_ledger(Ledger::new(), input, output)
    }

    pub fn with_ledger(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            prompt: Prompt::new(input, output),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.prompt.into_output())
    }

    /// Show the menu and dispatch choices until the user exits.
    pub fn run(&mut self) -> Result<(), AppError> {
        tracing::info!("Expense tracker session started");

        loop {
            self.display_menu()?;
            let input = self.prompt.ask("Enter your choice: ")?;

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Add) => self.add_expense()?,
                Some(MenuChoice::ViewAll) => self.view_all_expenses()?,
                Some(MenuChoice::ViewTotal) => self.view_total_spent()?,
                Some(MenuChoice::ViewByCategory) => self.view_total_by_category()?,
                Some(MenuChoice::Exit) => {
                    self.prompt.say("Exiting the Expense Tracker. Goodbye!")?;
                    break;
                }
                None => {
                    tracing::debug!(choice = %input, "Unrecognized menu choice");
                    self.prompt
                        .say("Invalid input! Please select a valid option from the menu.")?;
                }
            }
        }

        tracing::info!(expenses = self.ledger.len(), "Expense tracker session ended");
        Ok(())
    }

    fn display_menu(&mut self) -> Result<(), AppError> {
        self.prompt.blank_line()?;
        for line in MENU {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> Result<(), AppError> {
        let amount = self.read_amount()?;
        let category = self.prompt.ask("Enter the category for this expense: ")?;
        let description = self.prompt.ask("Enter a short description (optional): ")?;

        let record = self.ledger.try_add(amount.value(), category, description)?;
        tracing::debug!(
            amount = %record.amount,
            category = %record.category,
            "Expense recorded"
        );

        self.prompt.say("Expense added successfully!")
    }

    /// Re-prompt until the input is a number greater than zero that still fits in the total.
    fn read_amount(&mut self) -> Result<Amount, AppError> {
        loop {
            let input = self.prompt.ask("Enter the expense amount: ")?;
            let rejection = match input.parse::<Amount>() {
                Ok(amount) => match self.ledger.check_capacity(amount) {
                    Ok(()) => return Ok(amount),
                    Err(e) => e.to_string(),
                },
                Err(e) => e.to_string(),
            };

            tracing::debug!(input = %input, error = %rejection, "Rejected expense amount");
            self.prompt.say(&rejection)?;
        }
    }

    fn view_all_expenses(&mut self) -> Result<(), AppError> {
        if self.ledger.is_empty() {
            return self.prompt.say("No expenses recorded yet.");
        }

        self.prompt.blank_line()?;
        self.prompt.say("All Recorded Expenses:")?;
        for (i, record) in self.ledger.list().iter().enumerate() {
            let line = format!(
                "{}. Amount: ${}, Category: {}, Description: {}",
                i + 1,
                record.amount,
                record.category,
                record.description
            );
            self.prompt.say(&line)?;
        }
        Ok(())
    }

    fn view_total_spent(&mut self) -> Result<(), AppError> {
        if self.ledger.is_empty() {
            return self.prompt.say("No expenses to calculate.");
        }

        let total = format_amount(self.ledger.total());
        self.prompt.say(&format!("Total spent so far: ${}", total))
    }

    fn view_total_by_category(&mut self) -> Result<(), AppError> {
        if self.ledger.is_empty() {
            return self.prompt.say("No expenses to summarize.");
        }

        self.prompt.blank_line()?;
        self.prompt.say("Total Spent By Category:")?;
        for (category, total) in self.ledger.totals_by_category() {
            self.prompt.say(&format!("  {}: ${}", category, format_amount(total)))?;
        }
        Ok(())
    }
}
