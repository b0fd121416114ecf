use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, HttpMakeClassifier, TraceLayer};
use tracing::Level;

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        .nest("/metrics", crate::api::routes::metrics_routes::metrics_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(http_trace_layer())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Request spans and responses at INFO so the default filter records every request.
fn http_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use chrono::{FixedOffset, TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::metric::clock::FixedClock;
    use crate::domain::metric::error::MetricError;
    use crate::domain::metric::scalar_source::{ScalarMetric, ScalarMetricSource, StaticScalarSource};
    use crate::domain::metric::service::{MetricService, MetricsReportGenerator};
    use crate::domain::metric::value_source::{ConstantValueSource, DailyValueSource, RandomValueSource};

    struct OfflineSource;

    impl ScalarMetricSource for OfflineSource {
        fn fetch(&self, _metric: ScalarMetric) -> Result<i64, MetricError> {
            Err(MetricError::DataSourceUnavailable("warehouse timeout".into()))
        }
    }

    fn state_with(
        scalars: Arc<dyn ScalarMetricSource>,
        values: Arc<dyn DailyValueSource>,
    ) -> AppState {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let generator = MetricsReportGenerator::new(scalars, values, FixedOffset::east_opt(0).unwrap());
        AppState::new(MetricService::new(generator, Arc::new(FixedClock(now))))
    }

    fn test_state() -> AppState {
        state_with(Arc::new(StaticScalarSource), Arc::new(ConstantValueSource(9000)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn scalar_endpoints_return_label_and_value() {
        let cases = [
            ("/metrics/monthly-sales", "Monthly Sales", 125_000),
            ("/metrics/open-deals", "Open Deals", 42),
            ("/metrics/active-accounts", "Active Accounts", 318),
        ];

        for (uri, label, value) in cases {
            let (status, content_type, body) = get(app_router(test_state()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(content_type.as_deref(), Some("application/json"));

            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json, serde_json::json!({ "label": label, "value": value }));
        }
    }

    #[tokio::test]
    async fn daily_sales_returns_31_ordered_days() {
        let (status, _, body) = get(app_router(test_state()), "/metrics/daily-sales").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["label"], "Daily Sales (last 30 days)");
        let values = json["values"].as_object().unwrap();
        assert_eq!(values.len(), 31);
        assert!(values.values().all(|v| v == 9000));

        // Key order on the wire, not just the parsed map.
        let text = String::from_utf8(body).unwrap();
        let first = text.find("\"2024-02-14\"").unwrap();
        let leap_day = text.find("\"2024-02-29\"").unwrap();
        let last = text.find("\"2024-03-15\"").unwrap();
        assert!(first < leap_day && leap_day < last);
    }

    #[tokio::test]
    async fn daily_sales_default_source_stays_in_range() {
        let state = state_with(Arc::new(StaticScalarSource), Arc::new(RandomValueSource::default()));
        let (_, _, body) = get(app_router(state), "/metrics/daily-sales").await;

        let json: Value = serde_json::from_slice(&body).unwrap();
        for v in json["values"].as_object().unwrap().values() {
            let v = v.as_i64().unwrap();
            assert!((4000..=15000).contains(&v), "{v}");
        }
    }

    #[tokio::test]
    async fn unavailable_source_maps_to_503() {
        let state = state_with(Arc::new(OfflineSource), Arc::new(ConstantValueSource(1)));
        let (status, _, body) = get(app_router(state), "/metrics/open-deals").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Data source unavailable: warehouse timeout");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn requests_are_logged_under_default_info_filter() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (status, _, _) = get(app_router(test_state()), "/metrics/open-deals").await;
        assert_eq!(status, StatusCode::OK);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("finished processing request"), "{output}");
        assert!(output.contains("/metrics/open-deals"), "{output}");
    }

    #[tokio::test]
    async fn root_health_and_fallback() {
        let (status, _, body) = get(app_router(test_state()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Server is running!");

        let (status, _, body) = get(app_router(test_state()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");

        let (status, _, _) = get(app_router(test_state()), "/metrics/weekly-sales").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
