//! Request-facing wrapper: reads "now" from the clock and delegates to the generator.

use std::sync::Arc;

use anyhow::Result;

use crate::domain::metric::clock::{Clock, SystemClock};
use crate::domain::metric::dto::{MetricResult, TimeSeriesResult};
use crate::domain::metric::service::report_generator::MetricsReportGenerator;

#[derive(Clone)]
pub struct MetricService {
    generator: MetricsReportGenerator,
    clock: Arc<dyn Clock>,
}

impl MetricService {
    pub fn new(generator: MetricsReportGenerator, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub async fn get_monthly_sales(&self) -> Result<MetricResult> {
        Ok(self.generator.get_monthly_sales()?)
    }

    pub async fn get_open_deals(&self) -> Result<MetricResult> {
        Ok(self.generator.get_open_deals()?)
    }

    pub async fn get_active_accounts(&self) -> Result<MetricResult> {
        Ok(self.generator.get_active_accounts()?)
    }

    pub async fn get_daily_sales(&self) -> Result<TimeSeriesResult> {
        Ok(self.generator.get_daily_sales(self.clock.now())?)
    }
}

impl Default for MetricService {
    fn default() -> Self {
        Self::new(MetricsReportGenerator::default(), Arc::new(SystemClock))
    }
}
