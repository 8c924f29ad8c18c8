//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod expense;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use expense::{
    ActiveModel as ExpenseActiveModel, Entity as ExpenseEntity, Model as ExpenseModel,
};
