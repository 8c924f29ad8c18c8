//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::expense_handler;
use crate::domain::{CreateExpense, Expense};
use crate::types::MessageResponse;

/// OpenAPI documentation for the expense tracker
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Expense Tracker",
        version = "0.1.0",
        description = "Personal expense tracker: list, create and delete expenses",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:9000", description = "Local development server")
    ),
    paths(
        expense_handler::list_expenses,
        expense_handler::create_expense,
        expense_handler::delete_expense,
    ),
    components(
        schemas(
            Expense,
            CreateExpense,
            MessageResponse,
        )
    ),
    tags(
        (name = "Expenses", description = "Expense records")
    )
)]
pub struct ApiDoc;
