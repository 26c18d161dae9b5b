//! Runtime configuration
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `jobly.toml` in the working directory, then `JOBLY_*` environment
//! variables.
//!
//! # Environment Variables
//!
//! - `JOBLY_DATABASE_URL`: SQLite URL (default: `sqlite://jobly.db`)
//! - `JOBLY_MAX_CONNECTIONS`: pool ceiling (default: 5)
//! - `JOBLY_LOG_FORMAT`: `pretty` or `json` (default: `pretty`)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "sqlite://jobly.db";
const DEFAULT_MAX_CONNECTIONS: i64 = 5;
const DEFAULT_LOG_FORMAT: &str = "pretty";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub log_format: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix("JOBLY"))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("max_connections", DEFAULT_MAX_CONNECTIONS)?
            .set_default("log_format", DEFAULT_LOG_FORMAT)?
            .add_source(File::with_name("jobly").required(false))
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
