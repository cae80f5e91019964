//! Layered configuration for the opinion-api binary
//!
//! Priority order (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (including values loaded from .env files)
//! 3. TOML config file (`--config`, or ~/.opinion-api/config.toml if present)
//! 4. Built-in defaults
//!
//! Database credentials never live here: a host/database target authenticates
//! with the ambient libpq environment (PGUSER, PGPASSWORD, ...) or trust auth.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use tracing::{debug, info};

use opinion_server::db::pool::DEFAULT_DATABASE;
use opinion_server::{DatabaseTarget, PoolSettings, ServerConfig};

/// Load environment variables from .env files.
///
/// Checked in order: current directory, then ~/.opinion-api/.env.
/// dotenvy never overwrites variables that are already set, so the first
/// file to define a variable wins and the real environment beats both.
///
/// Returns the files that were loaded; call before parsing CLI args so that
/// `env = ...` attributes see the values.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// Report which .env files were applied (once tracing is up).
pub fn log_dotenv(loaded: &[PathBuf]) {
    if loaded.is_empty() {
        debug!("No .env files found (current dir or ~/.opinion-api)");
    } else {
        for path in loaded {
            info!("Loaded environment from {}", path.display());
        }
    }
}

/// The opinion-api config directory (~/.opinion-api)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".opinion-api"))
}

/// Default TOML config location (~/.opinion-api/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

// ============================================================================
// TOML Configuration
// ============================================================================

/// Contents of the TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

/// `[server]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub request_timeout_secs: Option<u64>,
    pub cors_permissive: Option<bool>,
}

/// `[database]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub name: Option<String>,
    pub max_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load an explicit config file, or the default one when it exists.
    ///
    /// A missing explicit path is an error; a missing default path is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_path(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config file {}", path.display());
        Ok(config)
    }
}

// ============================================================================
// CLI arguments
// ============================================================================

/// Database connection flags shared by `serve` and `ping`
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Full connection string (takes precedence over host/name)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database server host (credentials come from PGUSER/PGPASSWORD)
    #[arg(long, env = "OPINION_DB_HOST")]
    pub db_host: Option<String>,

    /// Database server port
    #[arg(long, env = "OPINION_DB_PORT")]
    pub db_port: Option<u16>,

    /// Database name (default: OpinionDB)
    #[arg(long, env = "OPINION_DB_NAME")]
    pub db_name: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "OPINION_DB_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,
}

/// HTTP listener flags
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "OPINION_BIND")]
    pub bind: Option<SocketAddr>,

    /// Request timeout in seconds (default: 30)
    #[arg(long, env = "OPINION_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "OPINION_CORS_PERMISSIVE")]
    pub cors_permissive: bool,
}

/// Resolve the database target and pool settings.
pub fn resolve_database(args: &DatabaseArgs, file: &DatabaseSection) -> (DatabaseTarget, PoolSettings) {
    let target = match args.database_url.clone().or_else(|| file.url.clone()) {
        Some(url) => DatabaseTarget::Url(url),
        None => DatabaseTarget::Server {
            host: args
                .db_host
                .clone()
                .or_else(|| file.host.clone())
                .unwrap_or_else(|| "localhost".to_string()),
            port: args.db_port.or(file.port),
            database: args
                .db_name
                .clone()
                .or_else(|| file.name.clone())
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        },
    };

    let defaults = PoolSettings::default();
    let settings = PoolSettings {
        max_connections: args
            .max_connections
            .or(file.max_connections)
            .unwrap_or(defaults.max_connections),
        acquire_timeout: file
            .acquire_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.acquire_timeout),
    };

    (target, settings)
}

/// Resolve the HTTP server configuration.
pub fn resolve_server(args: &ServerArgs, file: &ServerSection) -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        bind_addr: args.bind.or(file.bind).unwrap_or(defaults.bind_addr),
        cors_permissive: args.cors_permissive || file.cors_permissive.unwrap_or(false),
        request_timeout: args
            .request_timeout
            .or(file.request_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
    }
}
