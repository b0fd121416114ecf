//! Metric report services

pub mod metric_service;
pub mod report_generator;

pub use metric_service::MetricService;
pub use report_generator::{parse_time_reference, MetricsReportGenerator};
