use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

use crate::catalog::generator::DEFAULT_BATCH_SIZE;
use crate::sources::{github, remotive};
use crate::view::freshness::DEFAULT_PERIOD;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub synthetic_job_count: usize,
    pub remotive_url: String,
    pub github_jobs_url: String,
    pub merge_legacy_source: bool,
    /// Transport timeout for board requests. `None` leaves reqwest's default (no timeout).
    pub fetch_timeout: Option<Duration>,
    pub freshness_interval: Duration,
    pub generator_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let synthetic_job_count = parse_or(&lookup, "SYNTHETIC_JOB_COUNT", DEFAULT_BATCH_SIZE)?;
        ensure!(
            synthetic_job_count > 0,
            "Environment variable 'SYNTHETIC_JOB_COUNT' must be at least 1"
        );

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            synthetic_job_count,
            remotive_url: lookup("REMOTIVE_URL").unwrap_or_else(|| remotive::DEFAULT_URL.to_string()),
            github_jobs_url: lookup("GITHUB_JOBS_URL")
                .unwrap_or_else(|| github::DEFAULT_URL.to_string()),
            merge_legacy_source: parse_or(&lookup, "MERGE_LEGACY_SOURCE", false)?,
            fetch_timeout: parse_opt::<u64>(&lookup, "FETCH_TIMEOUT_SECS")?
                .map(Duration::from_secs),
            freshness_interval: parse_opt::<u64>(&lookup, "FRESHNESS_INTERVAL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_PERIOD),
            generator_seed: parse_opt(&lookup, "GENERATOR_SEED")?,
        })
    }
}

fn parse_opt<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has invalid value '{v}'"))
        })
        .transpose()
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}
