//! HTTP request handlers.

pub mod expense_handler;
pub mod health_handler;

pub use expense_handler::expense_routes;
pub use health_handler::health_routes;
