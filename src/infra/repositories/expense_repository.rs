//! Expense repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::entities::expense::{self, ActiveModel, Entity as ExpenseEntity};
use crate::domain::{Expense, NewExpense};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Expense repository trait for dependency injection.
///
/// Every operation is a single statement; there is no update.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// List all expenses, newest date first, ties broken by newest id
    async fn list_all(&self) -> AppResult<Vec<Expense>>;

    /// Insert a validated expense and return it with its assigned id
    async fn insert(&self, expense: NewExpense) -> AppResult<Expense>;

    /// Delete by id, returning the number of rows removed (0 or 1)
    async fn delete_by_id(&self, id: i64) -> AppResult<u64>;
}

/// Concrete implementation of ExpenseRepository
pub struct ExpenseStore {
    db: DatabaseConnection,
}

impl ExpenseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseRepository for ExpenseStore {
    async fn list_all(&self) -> AppResult<Vec<Expense>> {
        let models = ExpenseEntity::find()
            .order_by_desc(expense::Column::Date)
            .order_by_desc(expense::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    async fn insert(&self, expense: NewExpense) -> AppResult<Expense> {
        let active_model = ActiveModel {
            id: NotSet,
            description: Set(expense.description),
            amount: Set(expense.amount.value()),
            date: Set(expense.date.into_string()),
            category: Set(expense.category),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Expense::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        let result = ExpenseEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
