use std::sync::Arc;

use anyhow::Result;

use crate::config::AppConfig;
use crate::domain::metric::clock::Clock;
use crate::domain::metric::scalar_source::StaticScalarSource;
use crate::domain::metric::service::{MetricService, MetricsReportGenerator};
use crate::domain::metric::value_source::RandomValueSource;

#[derive(Clone)]
pub struct AppState {
    pub metric_service: Arc<MetricService>,
}

impl AppState {
    pub fn new(metric_service: MetricService) -> Self {
        Self {
            metric_service: Arc::new(metric_service),
        }
    }
}

pub fn build_app_state(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<AppState> {
    let generator = MetricsReportGenerator::new(
        Arc::new(StaticScalarSource),
        Arc::new(RandomValueSource::new(config.daily_min, config.daily_max)?),
        config.tz_offset,
    );

    Ok(AppState::new(MetricService::new(generator, clock)))
}
