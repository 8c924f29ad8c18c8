//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - SQLite connection and migrations
//! - Expense repository

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ExpenseRepository, ExpenseStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockExpenseRepository;
