//! Domain layer: metric reports, independent of the HTTP transport.

pub mod metric;
