use std::sync::Arc;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};
use tracing::debug;

use crate::domain::metric::dto::{MetricResult, TimeSeriesResult};
use crate::domain::metric::error::MetricError;
use crate::domain::metric::scalar_source::{ScalarMetric, ScalarMetricSource, StaticScalarSource};
use crate::domain::metric::value_source::{DailyValueSource, RandomValueSource};

pub const DAILY_SALES_LABEL: &str = "Daily Sales (last 30 days)";

/// Days subtracted from "now" to find the first day of the daily window.
/// The window holds `DAILY_WINDOW_DAYS + 1` dates, both ends inclusive.
pub const DAILY_WINDOW_DAYS: u64 = 30;

/// Builds metric reports. Holds no per-request state, so one instance can
/// serve concurrent callers.
#[derive(Clone)]
pub struct MetricsReportGenerator {
    scalar_source: Arc<dyn ScalarMetricSource>,
    value_source: Arc<dyn DailyValueSource>,
    offset: FixedOffset,
}

impl MetricsReportGenerator {
    pub fn new(
        scalar_source: Arc<dyn ScalarMetricSource>,
        value_source: Arc<dyn DailyValueSource>,
        offset: FixedOffset,
    ) -> Self {
        Self {
            scalar_source,
            value_source,
            offset,
        }
    }

    pub fn get_monthly_sales(&self) -> Result<MetricResult, MetricError> {
        self.scalar(ScalarMetric::MonthlySales)
    }

    pub fn get_open_deals(&self) -> Result<MetricResult, MetricError> {
        self.scalar(ScalarMetric::OpenDeals)
    }

    pub fn get_active_accounts(&self) -> Result<MetricResult, MetricError> {
        self.scalar(ScalarMetric::ActiveAccounts)
    }

    /// One entry per calendar day from `now - 30 days` through `now`, with
    /// dates taken in the generator's offset.
    pub fn get_daily_sales(&self, now: DateTime<Utc>) -> Result<TimeSeriesResult, MetricError> {
        let (start, end) = self.daily_window(now)?;
        debug!(%now, %start, %end, "building daily sales window");

        let mut series = TimeSeriesResult::new(DAILY_SALES_LABEL);
        for date in start.iter_days().take_while(|d| *d <= end) {
            series
                .values
                .insert(date.format("%Y-%m-%d").to_string(), self.value_source.value_for(date));
        }

        Ok(series)
    }

    fn daily_window(&self, now: DateTime<Utc>) -> Result<(NaiveDate, NaiveDate), MetricError> {
        let end = now
            .naive_utc()
            .checked_add_offset(self.offset)
            .map(|local| local.date())
            .ok_or_else(|| {
                MetricError::InvalidTimeReference(format!(
                    "{now} is outside the calendar range at offset {}",
                    self.offset
                ))
            })?;
        let start = end
            .checked_sub_days(Days::new(DAILY_WINDOW_DAYS))
            .ok_or_else(|| {
                MetricError::InvalidTimeReference(format!(
                    "{now} leaves no room for a {DAILY_WINDOW_DAYS}-day window"
                ))
            })?;
        Ok((start, end))
    }

    fn scalar(&self, metric: ScalarMetric) -> Result<MetricResult, MetricError> {
        let value = self.scalar_source.fetch(metric)?;
        Ok(MetricResult::new(metric.label(), value))
    }
}

impl Default for MetricsReportGenerator {
    fn default() -> Self {
        Self::new(
            Arc::new(StaticScalarSource),
            Arc::new(RandomValueSource::default()),
            Utc.fix(),
        )
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as
/// midnight UTC).
pub fn parse_time_reference(raw: &str) -> Result<DateTime<Utc>, MetricError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MetricError::InvalidTimeReference("empty time reference".into()));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| MetricError::InvalidTimeReference(format!("cannot parse '{raw}'")))
}
