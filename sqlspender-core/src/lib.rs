//! # sqlspender-core
//!
//! Core library for SQL Spender - a personal expense tracker.
//!
//! This library provides:
//! - Domain types for expense records and category summaries
//! - Database storage layer with SQLite
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust,no_run
//! use sqlspender_core::{Config, Database, NewExpense};
//!
//! let config = Config::load().expect("failed to load config");
//!
//! let db = Database::open(&config.database_path()).expect("failed to open database");
//! db.init_schema().expect("failed to initialize schema");
//!
//! let id = db
//!     .insert_expense(&NewExpense {
//!         date: "2024-01-01".to_string(),
//!         category: "Food".to_string(),
//!         amount: 12.5,
//!         description: "lunch".to_string(),
//!     })
//!     .expect("failed to insert expense");
//! println!("added expense {id}");
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod types;
