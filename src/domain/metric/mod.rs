//! Sales metrics: scalar figures and the daily sales series

pub mod clock;
pub mod dto;
pub mod error;
pub mod scalar_source;
pub mod service;
pub mod value_source;
