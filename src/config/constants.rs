//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 9000;

/// Default location of the built browser client
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Entry document served for client-side routes
pub const SPA_INDEX_FILE: &str = "index.html";

// =============================================================================
// Database
// =============================================================================

/// Default database URL; `mode=rwc` creates the file on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://expenses.db?mode=rwc";

/// Name of the single persisted table
pub const EXPENSES_TABLE: &str = "expenses";

// =============================================================================
// Validation
// =============================================================================

/// Default date policy (`strict` or `lenient`)
pub const DEFAULT_DATE_POLICY: &str = "strict";

/// Rejection when description, amount or date is missing or blank
pub const MSG_REQUIRED_FIELDS: &str = "Description, amount, and date are required.";

/// Rejection when amount is not a finite number above zero
pub const MSG_AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number.";

/// Rejection when date is neither `YYYY-MM-DD` nor an ISO-8601 date-time
pub const MSG_DATE_FORMAT: &str = "Date must be in YYYY-MM-DD format.";

/// Rejection when the path id is not an integer
pub const MSG_INVALID_ID: &str = "Valid expense ID is required.";

/// Acknowledgement returned after a successful delete
pub const MSG_EXPENSE_DELETED: &str = "Expense deleted successfully.";
