//! Runtime configuration, loaded from the environment with logged defaults.

use std::path::PathBuf;
use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Config {
    /// Return the standard data directory depending on the platform.
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hallpass")
    }

    /// Return the default path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::data_dir().join("hallpass.sqlite")
    }

    pub fn load() -> Self {
        Self {
            database: env::var("HALLPASS_DB").unwrap_or_else(|_| {
                let path = Self::database_file().to_string_lossy().to_string();
                info!("HALLPASS_DB not set, using default: {path}");
                path
            }),
            port: try_load("HALLPASS_PORT", "5000"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
