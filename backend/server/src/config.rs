use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Redis,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown vote store '{other}', expected memory or redis")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreKind,
    pub redis_url: String,
    pub static_dir: PathBuf,
    pub votes_per_minute: u32,
    pub csrf_ttl: Duration,
    pub csrf_secret: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "1111")?,
            store: try_load("VOTE_STORE", "memory")?,
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379")?,
            static_dir: try_load("STATIC_DIR", "static")?,
            votes_per_minute: try_load("VOTES_PER_MINUTE", "30")?,
            csrf_ttl: Duration::from_secs(try_load("CSRF_TTL_SECS", "3600")?),
            csrf_secret: var("CSRF_SECRET").filter(|secret| !secret.is_empty()),
        })
    }

    /// In-memory store on an ephemeral port, for tests and local runs.
    pub fn local() -> Self {
        Self {
            port: 0,
            store: StoreKind::Memory,
            redis_url: String::new(),
            static_dir: PathBuf::from("static"),
            votes_per_minute: 30,
            csrf_ttl: Duration::from_secs(3600),
            csrf_secret: None,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}
