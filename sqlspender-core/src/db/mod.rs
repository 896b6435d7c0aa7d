//! Database layer for SQL Spender
//!
//! This module provides the storage layer using SQLite with:
//! - Idempotent schema setup
//! - Repository pattern for expense queries

pub mod repo;
pub mod schema;

pub use repo::Database;
