//! Runtime configuration read from the environment (and `.env`).

use anyhow::{bail, ensure, Context, Result};
use chrono::{FixedOffset, Offset, Utc};

use crate::domain::metric::value_source::{DEFAULT_DAILY_MAX, DEFAULT_DAILY_MIN};

pub const ENV_HOST: &str = "SALES_METRICS_HOST";
pub const ENV_PORT: &str = "SALES_METRICS_PORT";
pub const ENV_TZ_OFFSET: &str = "SALES_METRICS_TZ_OFFSET";
pub const ENV_DAILY_MIN: &str = "SALES_METRICS_DAILY_MIN";
pub const ENV_DAILY_MAX: &str = "SALES_METRICS_DAILY_MAX";
pub const ENV_LOG_DIR: &str = "SALES_METRICS_LOG_DIR";
pub const ENV_DEBUG_AT: &str = "SALES_METRICS_DEBUG_AT";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub tz_offset: FixedOffset,
    pub daily_min: i64,
    pub daily_max: i64,
    pub log_dir: Option<String>,
    pub debug_at: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{ENV_PORT} must be a port number, got '{raw}'"))?,
            None => 5000,
        };

        let tz_offset = match get(ENV_TZ_OFFSET) {
            Some(raw) => parse_offset(&raw)
                .with_context(|| format!("{ENV_TZ_OFFSET} is invalid"))?,
            None => Utc.fix(),
        };

        let daily_min = parse_i64(get(ENV_DAILY_MIN), ENV_DAILY_MIN, DEFAULT_DAILY_MIN)?;
        let daily_max = parse_i64(get(ENV_DAILY_MAX), ENV_DAILY_MAX, DEFAULT_DAILY_MAX)?;
        ensure!(
            daily_min <= daily_max,
            "{ENV_DAILY_MIN} ({daily_min}) must not exceed {ENV_DAILY_MAX} ({daily_max})"
        );

        Ok(Self {
            host: get(ENV_HOST).unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            tz_offset,
            daily_min,
            daily_max,
            log_dir: get(ENV_LOG_DIR),
            debug_at: get(ENV_DEBUG_AT),
        })
    }

    /// Host/port pair for `TcpListener::bind`; host names are resolved at bind
    /// time and a bracketed IPv6 literal such as `[::1]` is unwrapped.
    pub fn bind_target(&self) -> (&str, u16) {
        let host = self
            .host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host);
        (host, self.port)
    }
}

fn parse_i64(raw: Option<String>, key: &str, default: i64) -> Result<i64> {
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} must be an integer, got '{raw}'")),
        None => Ok(default),
    }
}

/// Accepts `Z`, `UTC`, or `±HH:MM`.
fn parse_offset(raw: &str) -> Result<FixedOffset> {
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let (sign, rest) = match raw.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => bail!("expected Z, UTC or ±HH:MM, got '{raw}'"),
    };
    let Some((hours, minutes)) = rest.split_once(':') else {
        bail!("expected ±HH:MM, got '{raw}'");
    };
    let hours: u8 = hours.parse().with_context(|| format!("bad hours in '{raw}'"))?;
    let minutes: u8 = minutes.parse().with_context(|| format!("bad minutes in '{raw}'"))?;
    ensure!(minutes < 60, "minutes out of range in '{raw}'");

    FixedOffset::east_opt(sign * (i32::from(hours) * 3600 + i32::from(minutes) * 60))
        .with_context(|| format!("offset out of range: '{raw}'"))
}
