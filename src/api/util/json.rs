use anyhow::Result;
use axum::Json;

use crate::errors::AppError;

/// Map a domain `Result<T>` into `Json<T>`, keeping the metric error kind
/// so the boundary can pick the status code.
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    result.map(Json).map_err(AppError::from)
}
