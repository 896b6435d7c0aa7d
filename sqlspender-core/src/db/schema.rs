//! Database schema
//!
//! A single `expenses` table. Setup is idempotent and runs on every startup;
//! the applied version is recorded in PRAGMA user_version.

use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

const EXPENSES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        date        TEXT NOT NULL,
        category    TEXT NOT NULL,
        amount      REAL NOT NULL,
        description TEXT
    );
"#;

/// Ensure the expenses table exists
pub fn init_schema(conn: &Connection) -> crate::error::Result<()> {
    let current_version = get_schema_version(conn)?;

    tracing::info!(
        current_version,
        target_version = SCHEMA_VERSION,
        "Initializing database schema"
    );

    conn.execute_batch(EXPENSES_TABLE)?;

    if current_version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> crate::error::Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Run setup twice - should be idempotent
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_expenses_table_columns() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        // (name, type, notnull)
        let columns: Vec<(String, String, bool)> = conn
            .prepare("PRAGMA table_info(expenses)")
            .unwrap()
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?, row.get(3)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), "INTEGER".to_string(), false),
                ("date".to_string(), "TEXT".to_string(), true),
                ("category".to_string(), "TEXT".to_string(), true),
                ("amount".to_string(), "REAL".to_string(), true),
                ("description".to_string(), "TEXT".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_existing_rows_survive_init() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO expenses (date, category, amount) VALUES ('2024-01-01', 'Food', 1.0)",
            [],
        )
        .unwrap();

        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
