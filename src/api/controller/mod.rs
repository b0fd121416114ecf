//! Controllers: connect routes to domain services

pub mod metric;
