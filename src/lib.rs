//! Expense Tracker - personal expense API backed by SQLite
//!
//! A single `expenses` table exposed as list/create/delete over JSON,
//! plus static serving of the browser client.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Expense entity and value objects
//! - **services**: Expense use cases
//! - **infra**: Database, migrations and repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateExpense, DatePolicy, Expense};
pub use errors::{AppError, AppResult};
pub use infra::Database;
