use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::domain::metric::error::MetricError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),
}

impl From<MetricError> for AppError {
    fn from(err: MetricError) -> Self {
        match err {
            MetricError::InvalidTimeReference(msg) => AppError::InvalidTimeReference(msg),
            MetricError::DataSourceUnavailable(msg) => AppError::DataSourceUnavailable(msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<MetricError>() {
            Ok(metric_err) => metric_err.into(),
            Err(other) => internal_error(other),
        }
    }
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidTimeReference(_) => StatusCode::BAD_REQUEST,
            AppError::DataSourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
