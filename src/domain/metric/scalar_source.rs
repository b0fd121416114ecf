//! Scalar metric names and the collaborator that supplies their values.

use crate::domain::metric::error::MetricError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarMetric {
    MonthlySales,
    OpenDeals,
    ActiveAccounts,
}

impl ScalarMetric {
    pub fn label(self) -> &'static str {
        match self {
            ScalarMetric::MonthlySales => "Monthly Sales",
            ScalarMetric::OpenDeals => "Open Deals",
            ScalarMetric::ActiveAccounts => "Active Accounts",
        }
    }
}

/// Stand-in for an aggregation backend. Real implementations report
/// connectivity failures as [`MetricError::DataSourceUnavailable`].
pub trait ScalarMetricSource: Send + Sync {
    fn fetch(&self, metric: ScalarMetric) -> Result<i64, MetricError>;
}

/// Fixed figures; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticScalarSource;

impl ScalarMetricSource for StaticScalarSource {
    fn fetch(&self, metric: ScalarMetric) -> Result<i64, MetricError> {
        Ok(match metric {
            ScalarMetric::MonthlySales => 125_000,
            ScalarMetric::OpenDeals => 42,
            ScalarMetric::ActiveAccounts => 318,
        })
    }
}
