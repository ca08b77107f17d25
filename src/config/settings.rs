use std::str::FromStr;

use clap::ValueEnum;
use log::warn;

pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub database_path: String,
    pub pool_max_size: u32,
    pub connection_timeout_secs: u64,
    pub busy_timeout_ms: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_max_size: 4,
            connection_timeout_secs: 5,
            busy_timeout_ms: 5000,
        }
    }
}

impl StoreSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            pool_max_size: env_or("POOL_MAX_SIZE", defaults.pool_max_size),
            connection_timeout_secs: env_or(
                "CONNECTION_TIMEOUT_SECS",
                defaults.connection_timeout_secs,
            ),
            busy_timeout_ms: env_or("BUSY_TIMEOUT_MS", defaults.busy_timeout_ms),
        }
    }
}

fn env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Ignoring invalid {key}={raw:?}, using {default}");
        default
    })
}

/// Where standings and pairings are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DerivationSource {
    /// Read the `standings_v` / `pairings_v` views
    #[default]
    Store,
    /// Load players and matches, aggregate in memory
    InProcess,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivationSettings {
    pub source: DerivationSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store: StoreSettings,
    pub derivation: DerivationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            store: StoreSettings::default(),
            derivation: DerivationSettings::default(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            store: StoreSettings::from_env(),
            derivation: DerivationSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.store.database_path = path.into();
        self
    }

    pub fn with_derivation(mut self, source: DerivationSource) -> Self {
        self.derivation.source = source;
        self
    }
}
