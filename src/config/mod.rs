use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Connection target of the statistics database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database() -> String {
    "xonstatdb".to_string()
}
fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    5432
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.xonstat-charts`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".xonstat-charts")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("xonstat-charts.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file deserializes to `null`
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Database credentials, taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::resolve(
            env::var("PGUSER").ok(),
            env::var("PGPASS").ok(),
            env::var("USER").ok(),
        )
    }

    /// `PGUSER` wins; otherwise fall back to the login name like libpq does.
    pub fn resolve(
        pg_user: Option<String>,
        pg_pass: Option<String>,
        login: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        Self {
            user: non_empty(pg_user).or_else(|| non_empty(login)),
            password: non_empty(pg_pass),
        }
    }
}
