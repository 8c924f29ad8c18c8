//! Expense service - Handles expense-related use cases.
//!
//! Validates client input into domain values before anything reaches the
//! repository, and maps an empty delete to `NotFound`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateExpense, DatePolicy, Expense, NewExpense};
use crate::errors::{AppError, AppResult};
use crate::infra::ExpenseRepository;

/// Expense service trait for dependency injection.
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// List all expenses, newest first
    async fn list_expenses(&self) -> AppResult<Vec<Expense>>;

    /// Validate and store a new expense
    async fn create_expense(&self, input: CreateExpense) -> AppResult<Expense>;

    /// Delete an expense; `NotFound` if no row matched
    async fn delete_expense(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ExpenseService using repository.
pub struct ExpenseManager {
    repo: Arc<dyn ExpenseRepository>,
    date_policy: DatePolicy,
}

impl ExpenseManager {
    /// Create new expense service instance with repository
    pub fn new(repo: Arc<dyn ExpenseRepository>, date_policy: DatePolicy) -> Self {
        Self { repo, date_policy }
    }
}

#[async_trait]
impl ExpenseService for ExpenseManager {
    async fn list_expenses(&self) -> AppResult<Vec<Expense>> {
        self.repo.list_all().await
    }

    async fn create_expense(&self, input: CreateExpense) -> AppResult<Expense> {
        let expense = NewExpense::parse(input, self.date_policy)?;
        let created = self.repo.insert(expense).await?;
        tracing::debug!(id = created.id, date = %created.date, "Expense created");
        Ok(created)
    }

    async fn delete_expense(&self, id: i64) -> AppResult<()> {
        match self.repo.delete_by_id(id).await? {
            0 => Err(AppError::NotFound),
            _ => {
                tracing::debug!(id, "Expense deleted");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountInput;
    use crate::infra::MockExpenseRepository;
    use mockall::predicate::eq;

    fn stored(id: i64, expense: &NewExpense) -> Expense {
        Expense {
            id,
            description: expense.description.clone(),
            amount: expense.amount.value(),
            date: expense.date.to_string(),
            category: expense.category.clone(),
        }
    }

    fn create_request(amount: AmountInput, date: &str) -> CreateExpense {
        CreateExpense {
            description: Some("Lunch".to_string()),
            amount: Some(amount),
            date: Some(date.to_string()),
            category: Some("Food".to_string()),
        }
    }

    fn manager(repo: MockExpenseRepository, policy: DatePolicy) -> ExpenseManager {
        ExpenseManager::new(Arc::new(repo), policy)
    }

    #[tokio::test]
    async fn test_create_expense_persists_normalized_record() {
        let mut repo = MockExpenseRepository::new();
        repo.expect_insert()
            .withf(|e| e.date.as_str() == "2024-03-01" && e.amount.value() == 12.5)
            .times(1)
            .returning(|e| Ok(stored(7, &e)));

        let service = manager(repo, DatePolicy::Strict);
        let created = service
            .create_expense(create_request(
                AmountInput::Text("12.5".into()),
                "2024-03-01T18:30:00Z",
            ))
            .await
            .unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.amount, 12.5);
        assert_eq!(created.date, "2024-03-01");
        assert_eq!(created.category.as_deref(), Some("Food"));
    }

    #[tokio::test]
    async fn test_create_expense_rejects_non_positive_amount_without_insert() {
        for amount in [AmountInput::Number(0.0), AmountInput::Number(-5.0)] {
            let mut repo = MockExpenseRepository::new();
            repo.expect_insert().never();

            let service = manager(repo, DatePolicy::Strict);
            let result = service
                .create_expense(create_request(amount, "2024-03-01"))
                .await;

            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_date_policy_decides_impossible_dates() {
        let mut repo = MockExpenseRepository::new();
        repo.expect_insert().never();
        let strict = manager(repo, DatePolicy::Strict);
        let result = strict
            .create_expense(create_request(
                AmountInput::Number(1.0),
                "2024-02-30T10:00:00Z",
            ))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut repo = MockExpenseRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|e| Ok(stored(1, &e)));
        let lenient = manager(repo, DatePolicy::Lenient);
        let created = lenient
            .create_expense(create_request(
                AmountInput::Number(1.0),
                "2024-02-30T10:00:00Z",
            ))
            .await
            .unwrap();
        assert_eq!(created.date, "2024-02-30");
    }

    #[tokio::test]
    async fn test_delete_missing_expense_is_not_found() {
        let mut repo = MockExpenseRepository::new();
        repo.expect_delete_by_id()
            .with(eq(42))
            .returning(|_| Ok(0));

        let service = manager(repo, DatePolicy::Strict);
        let result = service.delete_expense(42).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_existing_expense() {
        let mut repo = MockExpenseRepository::new();
        repo.expect_delete_by_id()
            .with(eq(3))
            .returning(|_| Ok(1));

        let service = manager(repo, DatePolicy::Strict);
        assert!(service.delete_expense(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_passes_storage_errors_through() {
        let mut repo = MockExpenseRepository::new();
        repo.expect_list_all()
            .returning(|| Err(AppError::Database(sea_orm::DbErr::Custom("locked".into()))));

        let service = manager(repo, DatePolicy::Strict);
        assert!(matches!(
            service.list_expenses().await,
            Err(AppError::Database(_))
        ));
    }
}
