//! Core domain types for SQL Spender
//!
//! | Term | Definition |
//! |------|------------|
//! | **Expense** | One stored record: id, date, category, amount, description |
//! | **NewExpense** | Field values for a record that has not been assigned an id yet |
//! | **ExpenseUpdate** | A partial edit; every `None` field keeps the stored value |
//! | **CategorySummary** | Count and total of all expenses sharing a category |

use crate::error::{Error, Result};

// ============================================
// Expense
// ============================================

/// A stored expense record.
///
/// `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Database-assigned identifier
    pub id: i64,
    /// Free-form date text (intended format `YYYY-MM-DD`)
    pub date: String,
    /// Free-form category label
    pub category: String,
    /// Amount spent
    pub amount: f64,
    /// Optional note; a NULL column reads back as an empty string
    pub description: String,
}

/// Field values for inserting a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// A partial update to an existing expense.
///
/// `None` keeps the stored value, `Some` replaces it. Amount is carried as an
/// already-parsed `f64`, so keeping it never goes through text parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// True when every field keeps its current value.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }

    /// Apply this update to a record, returning the merged result.
    pub fn apply_to(&self, expense: &Expense) -> Expense {
        Expense {
            id: expense.id,
            date: self.date.clone().unwrap_or_else(|| expense.date.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| expense.category.clone()),
            amount: self.amount.unwrap_or(expense.amount),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| expense.description.clone()),
        }
    }
}

// ============================================
// Aggregation
// ============================================

/// Per-category statistics produced by the summary query.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    /// Number of expenses in this category
    pub count: i64,
    /// Sum of amounts in this category
    pub total: f64,
}

// ============================================
// Input parsing
// ============================================

/// Parse a user-entered amount.
///
/// Surrounding whitespace is ignored. Non-finite values are rejected because
/// SQLite stores NaN as NULL, which the `amount` column does not allow.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(trimmed.to_string())),
    }
}

/// Parse a user-entered expense id.
pub fn parse_id(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::InvalidId(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Expense {
        Expense {
            id: 7,
            date: "2024-01-01".to_string(),
            category: "Food".to_string(),
            amount: 10.0,
            description: "lunch".to_string(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount("  3 ").unwrap(), 3.0);
        assert_eq!(parse_amount("-4").unwrap(), -4.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(parse_amount("ten"), Err(Error::InvalidAmount(_))));
        assert!(matches!(parse_amount(""), Err(Error::InvalidAmount(_))));
        assert!(matches!(parse_amount("NaN"), Err(Error::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 3\n").unwrap(), 3);
        assert!(matches!(parse_id("4a"), Err(Error::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(Error::InvalidId(_))));
    }

    #[test]
    fn test_empty_update_keeps_everything() {
        let update = ExpenseUpdate::default();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(&sample_expense()), sample_expense());
    }

    #[test]
    fn test_partial_update_apply() {
        let update = ExpenseUpdate {
            category: Some("Travel".to_string()),
            amount: Some(99.5),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let merged = update.apply_to(&sample_expense());
        assert_eq!(merged.id, 7);
        assert_eq!(merged.date, "2024-01-01");
        assert_eq!(merged.category, "Travel");
        assert_eq!(merged.amount, 99.5);
        assert_eq!(merged.description, "lunch");
    }
}
