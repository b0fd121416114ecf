//! Metrics routes (e.g., /metrics/*)

use axum::{routing::get, Router};

use crate::api::controller::metric::MetricsController;
use crate::app_state::AppState;

/// Build the router for metrics endpoints under /metrics
pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        .route("/monthly-sales", get(MetricsController::monthly_sales))
        .route("/open-deals", get(MetricsController::open_deals))
        .route("/active-accounts", get(MetricsController::active_accounts))
        .route("/daily-sales", get(MetricsController::daily_sales))
}
