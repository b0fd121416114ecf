pub mod metrics_controller;

pub use metrics_controller::MetricsController;
