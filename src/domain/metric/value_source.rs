//! Per-day value suppliers for time-series metrics.

use anyhow::{ensure, Result};
use chrono::NaiveDate;
use rand::Rng;

pub const DEFAULT_DAILY_MIN: i64 = 4000;
pub const DEFAULT_DAILY_MAX: i64 = 15000;

pub trait DailyValueSource: Send + Sync {
    fn value_for(&self, date: NaiveDate) -> i64;
}

/// Uniform random integer in `[min, max]`, drawn fresh on every call.
///
/// Repeated reports over the same window differ; this is mock data, not a bug.
#[derive(Debug, Clone, Copy)]
pub struct RandomValueSource {
    min: i64,
    max: i64,
}

impl RandomValueSource {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        ensure!(min <= max, "random value range is empty: min {min} > max {max}");
        Ok(Self { min, max })
    }
}

impl Default for RandomValueSource {
    fn default() -> Self {
        Self {
            min: DEFAULT_DAILY_MIN,
            max: DEFAULT_DAILY_MAX,
        }
    }
}

impl DailyValueSource for RandomValueSource {
    fn value_for(&self, _date: NaiveDate) -> i64 {
        rand::rng().random_range(self.min..=self.max)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantValueSource(pub i64);

impl DailyValueSource for ConstantValueSource {
    fn value_for(&self, _date: NaiveDate) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_stay_within_inclusive_bounds() {
        let source = RandomValueSource::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let values: Vec<i64> = (0..5_000).map(|_| source.value_for(date)).collect();
        assert!(values.iter().min().copied().unwrap() >= DEFAULT_DAILY_MIN);
        assert!(values.iter().max().copied().unwrap() <= DEFAULT_DAILY_MAX);
    }

    #[test]
    fn single_point_range_is_deterministic() {
        let source = RandomValueSource::new(7, 7).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!((0..100).all(|_| source.value_for(date) == 7));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(RandomValueSource::new(10, 9).is_err());
    }
}
