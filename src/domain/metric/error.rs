use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// The reference "now" is missing, unparseable or outside the calendar range.
    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    /// The backend supplying a metric value could not be reached.
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),
}
