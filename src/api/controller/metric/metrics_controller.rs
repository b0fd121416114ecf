//! Metrics controller: one handler per reported metric.

use axum::extract::State;
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::metric::dto::{MetricResult, TimeSeriesResult};
use crate::errors::AppError;

pub struct MetricsController;

impl MetricsController {
    pub async fn monthly_sales(
        State(state): State<AppState>,
    ) -> Result<Json<MetricResult>, AppError> {
        to_json(state.metric_service.get_monthly_sales().await)
    }

    pub async fn open_deals(
        State(state): State<AppState>,
    ) -> Result<Json<MetricResult>, AppError> {
        to_json(state.metric_service.get_open_deals().await)
    }

    pub async fn active_accounts(
        State(state): State<AppState>,
    ) -> Result<Json<MetricResult>, AppError> {
        to_json(state.metric_service.get_active_accounts().await)
    }

    pub async fn daily_sales(
        State(state): State<AppState>,
    ) -> Result<Json<TimeSeriesResult>, AppError> {
        to_json(state.metric_service.get_daily_sales().await)
    }
}
