//! Expense handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::{MSG_EXPENSE_DELETED, MSG_INVALID_ID};
use crate::domain::{CreateExpense, Expense};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, MessageResponse};

/// Create expense routes
pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", delete(delete_expense))
}

/// List all expenses, newest first
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Expenses",
    responses(
        (status = 200, description = "All expenses, ordered by date then id, descending", body = Vec<Expense>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_expenses(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.list_expenses().await?;
    Ok(Json(expenses))
}

/// Record a new expense
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = CreateExpense,
    responses(
        (status = 201, description = "Expense created", body = Expense),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_expense(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateExpense>,
) -> AppResult<Created<Expense>> {
    let expense = state.expense_service.create_expense(payload).await?;
    Ok(Created(expense))
}

/// Delete an expense by id
#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    params(
        ("id" = i64, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Expense deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Expense not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| AppError::validation(MSG_INVALID_ID))?;

    state.expense_service.delete_expense(id).await?;

    Ok(Json(MessageResponse::new(MSG_EXPENSE_DELETED)))
}
