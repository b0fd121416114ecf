//! API route declarations (e.g., /metrics/*)

pub mod metrics_routes;
