//! JSON body extractor that reports malformed bodies as validation errors.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an [`AppError`].
///
/// Axum's own `Json` rejection answers with plain text; this keeps every
/// client error in the `{"error": ...}` shape the browser client reads.
/// Field rules are applied later by the domain layer.
///
/// # Example
///
/// ```rust,ignore
/// use expense_tracker::api::extractors::JsonBody;
/// use expense_tracker::domain::CreateExpense;
///
/// async fn create(JsonBody(payload): JsonBody<CreateExpense>) {
///     // payload is well-formed JSON, not yet validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
