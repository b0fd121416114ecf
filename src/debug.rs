use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::app_state::build_app_state;
use crate::config::AppConfig;
use crate::domain::metric::clock::FixedClock;
use crate::domain::metric::service::parse_time_reference;

/// Runs only when SALES_METRICS_DEBUG_AT is set: logs the daily sales report
/// for that reference time instead of serving.
pub async fn run_debug(config: &AppConfig, raw_now: &str) -> Result<()> {
    let now = parse_time_reference(raw_now)?;
    info!(%now, "🔧 Debug mode: building daily sales report");

    let state = build_app_state(config, Arc::new(FixedClock(now)))?;
    let report = state.metric_service.get_daily_sales().await?;
    info!(
        days = report.len(),
        first = report.first_date().unwrap_or("-"),
        last = report.last_date().unwrap_or("-"),
        "daily sales window"
    );
    info!("{}", serde_json::to_string_pretty(&report)?);

    info!("Debug tasks completed. Exiting...");
    Ok(())
}
