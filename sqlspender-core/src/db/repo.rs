//! Database repository layer
//!
//! Provides insert, query, update and delete operations for expenses, plus
//! the per-category summary.

use crate::error::{Error, Result};
use crate::types::*;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

/// Database handle owning the single SQLite connection
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = FULL;
            ",
        )?;

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Ensure the schema exists on this database
    pub fn init_schema(&self) -> Result<()> {
        super::schema::init_schema(&self.conn)
    }

    /// Get the underlying connection (for advanced use)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::from(e))
    }

    // ============================================
    // Expense operations
    // ============================================

    /// Insert a new expense, returning its assigned id
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (date, category, amount, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.date,
                expense.category,
                expense.amount,
                expense.description,
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        tracing::debug!(id, category = %expense.category, "Inserted expense");
        Ok(id)
    }

    /// List every expense in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, category, amount, description FROM expenses ORDER BY id",
        )?;

        let expenses = stmt
            .query_map([], Self::row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Get an expense by ID
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        self.conn
            .query_row(
                "SELECT id, date, category, amount, description FROM expenses WHERE id = ?",
                [id],
                Self::row_to_expense,
            )
            .optional()
            .map_err(Error::from)
    }

    /// Apply a partial update to an expense.
    ///
    /// Fields left as `None` keep their stored values. Returns `false` when no
    /// expense has this id.
    pub fn update_expense(&self, id: i64, update: &ExpenseUpdate) -> Result<bool> {
        let Some(current) = self.get_expense(id)? else {
            tracing::debug!(id, "Update skipped, expense not found");
            return Ok(false);
        };

        if update.is_empty() {
            tracing::debug!(id, "Update keeps every field");
        }

        let merged = update.apply_to(&current);
        let changed = self.conn.execute(
            r#"
            UPDATE expenses
            SET date = ?1, category = ?2, amount = ?3, description = ?4
            WHERE id = ?5
            "#,
            params![
                merged.date,
                merged.category,
                merged.amount,
                merged.description,
                id,
            ],
        )?;

        tracing::debug!(id, changed, "Updated expense");
        Ok(changed > 0)
    }

    /// Delete an expense. Returns `false` when no row was removed.
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?", [id])?;

        tracing::debug!(id, removed, "Deleted expense");
        Ok(removed > 0)
    }

    /// Count stored expenses
    pub fn count_expenses(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))?;
        Ok(count)
    }

    fn row_to_expense(row: &Row) -> rusqlite::Result<Expense> {
        let description: Option<String> = row.get("description")?;

        Ok(Expense {
            id: row.get("id")?,
            date: row.get("date")?,
            category: row.get("category")?,
            amount: row.get("amount")?,
            description: description.unwrap_or_default(),
        })
    }

    // ============================================
    // Statistics
    // ============================================

    /// Count and total of expenses grouped by category
    pub fn summarize_by_category(&self) -> Result<Vec<CategorySummary>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT category, COUNT(*) AS count, SUM(amount) AS total
            FROM expenses
            GROUP BY category
            ORDER BY category
            "#,
        )?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(CategorySummary {
                    category: row.get(0)?,
                    count: row.get(1)?,
                    total: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(summaries)
    }
}
