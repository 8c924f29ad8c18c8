//! Application state - Dependency injection container.
//!
//! The store is built once at startup and handed to the handlers here;
//! nothing reaches it through a global.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, ExpenseStore};
use crate::services::{ExpenseManager, ExpenseService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Expense service
    pub expense_service: Arc<dyn ExpenseService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the expense store and service onto an open database.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let store = Arc::new(ExpenseStore::new(database.get_connection()));
        let expense_service = Arc::new(ExpenseManager::new(store, config.date_policy));

        Self {
            expense_service,
            database,
        }
    }

    /// Create new application state with a manually injected service.
    pub fn new(expense_service: Arc<dyn ExpenseService>, database: Arc<Database>) -> Self {
        Self {
            expense_service,
            database,
        }
    }
}
