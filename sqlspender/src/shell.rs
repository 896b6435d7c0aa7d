//! Interactive menu loop.
//!
//! The shell owns the [`Database`] for the whole session and closes it when
//! the user picks Exit or the input stream ends. It reads from any `BufRead`
//! and writes to any `Write`, so tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use sqlspender_core::format::{format_expense_table, format_summary_table};
use sqlspender_core::{parse_amount, parse_id, Database, ExpenseUpdate, NewExpense};

const MENU: &str = "\
1. Add Expense
2. View Expenses
3. Update Expense
4. Delete Expense
5. View Summary (by Category)
6. Exit";

/// Raised when the input stream ends while a prompt is waiting.
#[derive(Debug, thiserror::Error)]
#[error("input closed")]
struct InputClosed;

/// One of the six menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Summary,
    Exit,
}

impl MenuChoice {
    /// Map a menu selection (`"1"`..`"6"`) to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Summary),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

/// Menu-driven front end over the expense repository.
pub struct Shell<R, W> {
    db: Database,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(db: Database, input: R, output: W) -> Self {
        Self { db, input, output }
    }

    /// Run until Exit or end of input, then close the database.
    pub fn run(mut self) -> Result<()> {
        writeln!(self.output, "=======================================")?;
        writeln!(self.output, "     Welcome to SQLSpender Tracker     ")?;
        writeln!(self.output, "=======================================")?;

        let mut state = ShellState::Running;
        while state == ShellState::Running {
            state = match self.step() {
                Ok(state) => state,
                Err(e) if e.is::<InputClosed>() => {
                    tracing::info!("Input closed, leaving menu");
                    writeln!(self.output)?;
                    ShellState::Terminated
                }
                Err(e) => return Err(e),
            };
        }

        writeln!(self.output, "Exiting program... Goodbye!")?;
        self.output.flush()?;
        self.db.close()?;
        tracing::info!("Database closed");
        Ok(())
    }

    /// Show the menu, read one selection and dispatch it.
    fn step(&mut self) -> Result<ShellState> {
        writeln!(self.output, "{MENU}")?;
        let selection = self.read_line("Select an option (1-6): ")?;
        writeln!(self.output)?;

        match MenuChoice::parse(&selection) {
            Some(choice) => {
                tracing::debug!(?choice, "Menu selection");
                self.dispatch(choice)
            }
            None => {
                writeln!(self.output, "Invalid selection. Try again.\n")?;
                Ok(ShellState::Running)
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ShellState> {
        match choice {
            MenuChoice::Add => self.add_expense()?,
            MenuChoice::View => self.view_expenses()?,
            MenuChoice::Update => self.update_expense()?,
            MenuChoice::Delete => self.delete_expense()?,
            MenuChoice::Summary => self.view_summary()?,
            MenuChoice::Exit => return Ok(ShellState::Terminated),
        }
        Ok(ShellState::Running)
    }

    fn add_expense(&mut self) -> Result<()> {
        let date = self.read_line("Enter date (YYYY-MM-DD): ")?;
        let category = self.read_line("Enter category (e.g. Food, Fuel, Rent): ")?;
        let raw_amount = self.read_line("Enter amount: ")?;
        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected expense");
                writeln!(self.output, "Error: {}. Expense not added.\n", e)?;
                return Ok(());
            }
        };
        let description = self.read_line("Enter description: ")?;

        let id = self.db.insert_expense(&NewExpense {
            date,
            category,
            amount,
            description,
        })?;
        tracing::info!(id, "Expense added");
        writeln!(self.output, "Expense added successfully!\n")?;
        Ok(())
    }

    fn view_expenses(&mut self) -> Result<()> {
        let expenses = self.db.list_expenses()?;
        if expenses.is_empty() {
            writeln!(self.output, "{}\n", format_expense_table(&expenses))?;
        } else {
            writeln!(self.output, "\n{}\n", format_expense_table(&expenses))?;
        }
        Ok(())
    }

    fn update_expense(&mut self) -> Result<()> {
        self.view_expenses()?;
        let Some(id) = self.read_id("Enter the ID of the expense to update: ")? else {
            return Ok(());
        };

        let Some(current) = self.db.get_expense(id)? else {
            writeln!(self.output, "Expense not found.\n")?;
            return Ok(());
        };

        writeln!(self.output, "Leave field blank to keep current value.")?;
        let date = self.read_replacement("date", &current.date)?;
        let category = self.read_replacement("category", &current.category)?;
        let amount = match self.read_replacement("amount", &current.amount.to_string())? {
            None => None,
            Some(raw) => match parse_amount(&raw) {
                Ok(amount) => Some(amount),
                Err(e) => {
                    tracing::warn!(id, error = %e, "Rejected expense update");
                    writeln!(self.output, "Error: {}. Expense not updated.\n", e)?;
                    return Ok(());
                }
            },
        };
        let description = self.read_replacement("description", &current.description)?;

        let update = ExpenseUpdate {
            date,
            category,
            amount,
            description,
        };
        if self.db.update_expense(id, &update)? {
            tracing::info!(id, "Expense updated");
            writeln!(self.output, "Expense updated successfully!\n")?;
        } else {
            writeln!(self.output, "Expense not found.\n")?;
        }
        Ok(())
    }

    fn delete_expense(&mut self) -> Result<()> {
        self.view_expenses()?;
        let Some(id) = self.read_id("Enter the ID of the expense to delete: ")? else {
            return Ok(());
        };

        if self.db.delete_expense(id)? {
            tracing::info!(id, "Expense deleted");
            writeln!(self.output, "Expense deleted successfully!\n")?;
        } else {
            writeln!(self.output, "Expense not found.\n")?;
        }
        Ok(())
    }

    fn view_summary(&mut self) -> Result<()> {
        let summaries = self.db.summarize_by_category()?;
        if summaries.is_empty() {
            writeln!(self.output, "{}\n", format_summary_table(&summaries))?;
        } else {
            writeln!(self.output, "\n{}\n", format_summary_table(&summaries))?;
        }
        Ok(())
    }

    /// Prompt for an expense id; prints the error and yields `None` if it is not an integer.
    fn read_id(&mut self, prompt: &str) -> Result<Option<i64>> {
        let raw = self.read_line(prompt)?;
        match parse_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                writeln!(self.output, "Error: {}.\n", e)?;
                Ok(None)
            }
        }
    }

    /// Prompt for a new field value. A blank line keeps the current value.
    fn read_replacement(&mut self, field: &str, current: &str) -> Result<Option<String>> {
        let line = self.read_line(&format!("New {} [{}]: ", field, current))?;
        Ok(if line.is_empty() { None } else { Some(line) })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(len);
        Ok(line)
    }
}
