//! Result objects produced per request and handed to the boundary for serialization.

use std::collections::BTreeMap;

use serde::Serialize;

/// Label plus a single numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub label: String,
    pub value: i64,
}

impl MetricResult {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Label plus one value per calendar day.
///
/// Keys are `YYYY-MM-DD` strings, so the map's lexicographic order is also
/// the chronological order consumers chart in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesResult {
    pub label: String,
    pub values: BTreeMap<String, i64>,
}

impl TimeSeriesResult {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn first_date(&self) -> Option<&str> {
        self.values.keys().next().map(String::as_str)
    }

    pub fn last_date(&self) -> Option<&str> {
        self.values.keys().next_back().map(String::as_str)
    }
}
