//! HTTP API: routes, controllers and response helpers

pub mod controller;
pub mod routes;
pub mod util;
