//! Text table formatting for expense listings and summaries.

use crate::types::{CategorySummary, Expense};

/// Shown instead of an empty expense table.
pub const NO_EXPENSES: &str = "No expenses recorded yet.";

/// Shown instead of an empty summary table.
pub const NO_SUMMARY_DATA: &str = "No data available for summary.";

const EXPENSE_HEADER: &str = "ID | Date       | Category  | Amount  | Description";
const SUMMARY_RULE: &str = "-----------------------------";

/// Format an amount with two decimals and a dollar sign.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Render expenses as a fixed-width table, or [`NO_EXPENSES`] when empty.
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return NO_EXPENSES.to_string();
    }

    let mut lines = vec![EXPENSE_HEADER.to_string(), "-".repeat(55)];
    for e in expenses {
        lines.push(format!(
            "{:<2} | {:<10} | {:<9} | ${:<7.2} | {}",
            e.id, e.date, e.category, e.amount, e.description
        ));
    }
    lines.join("\n")
}

/// Render per-category totals, or [`NO_SUMMARY_DATA`] when empty.
pub fn format_summary_table(summaries: &[CategorySummary]) -> String {
    if summaries.is_empty() {
        return NO_SUMMARY_DATA.to_string();
    }

    let mut lines = vec![
        "Category Summary".to_string(),
        SUMMARY_RULE.to_string(),
        "Category | Count | Total ($)".to_string(),
        SUMMARY_RULE.to_string(),
    ];
    for s in summaries {
        lines.push(format!(
            "{:<9} | {:<5} | ${:<8.2}",
            s.category, s.count, s.total
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.0), "$3.00");
        assert_eq!(format_amount(12.345), "$12.35");
    }

    #[test]
    fn test_empty_tables_report_no_data() {
        assert_eq!(format_expense_table(&[]), NO_EXPENSES);
        assert_eq!(format_summary_table(&[]), NO_SUMMARY_DATA);
    }

    #[test]
    fn test_expense_row_layout() {
        let table = format_expense_table(&[Expense {
            id: 1,
            date: "2024-01-01".to_string(),
            category: "Food".to_string(),
            amount: 10.5,
            description: "lunch".to_string(),
        }]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], EXPENSE_HEADER);
        assert_eq!(lines[1].len(), 55);
        assert_eq!(lines[2], "1  | 2024-01-01 | Food      | $10.50   | lunch");
    }

    #[test]
    fn test_summary_row_layout() {
        let table = format_summary_table(&[CategorySummary {
            category: "Fuel".to_string(),
            count: 2,
            total: 40.0,
        }]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Category Summary");
        assert_eq!(lines[2], "Category | Count | Total ($)");
        assert_eq!(lines[4], "Fuel      | 2     | $40.00   ");
    }
}
