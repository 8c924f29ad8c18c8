//! Domain layer - Core business entities and logic
//!
//! Contains the expense entity, the create request and the value
//! objects that enforce its invariants (positive amount, canonical date).

pub mod amount;
pub mod expense;
pub mod expense_date;

pub use amount::{Amount, AmountInput};
pub use expense::{CreateExpense, Expense, NewExpense};
pub use expense_date::{DatePolicy, ExpenseDate};
