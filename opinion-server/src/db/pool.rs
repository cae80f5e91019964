//! Database connection pool management
//!
//! The pool is the only state shared between requests. Credentials are never
//! part of the configured target unless the caller passes a full URL; with a
//! host/database target, user and password come from the libpq environment
//! (`PGUSER`, `PGPASSWORD`, ...) or from trust/peer authentication.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres, Transaction};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time to wait for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Database name used when none is configured.
pub const DEFAULT_DATABASE: &str = "OpinionDB";

/// Where the opinion store lives.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Full connection string, e.g. `postgres://reporting@db/OpinionDB`
    Url(String),
    /// Server plus database name, authenticated with ambient credentials
    Server {
        host: String,
        port: Option<u16>,
        database: String,
    },
}

impl DatabaseTarget {
    /// Resolve into sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if a URL target cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self {
            Self::Url(url) => url.parse::<PgConnectOptions>(),
            Self::Server {
                host,
                port,
                database,
            } => {
                // PgConnectOptions::new() already reads PGUSER/PGPASSWORD/PGSSLMODE
                let mut options = PgConnectOptions::new().host(host).database(database);
                if let Some(port) = port {
                    options = options.port(*port);
                }
                Ok(options)
            }
        }
    }
}

impl Default for DatabaseTarget {
    fn default() -> Self {
        Self::Server {
            host: "localhost".to_string(),
            port: None,
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

/// Never prints passwords: URL targets are described from their parsed parts.
impl fmt::Display for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.connect_options() {
            Ok(options) => write!(
                f,
                "{}:{}/{}",
                options.get_host(),
                options.get_port(),
                options.get_database().unwrap_or("-")
            ),
            Err(_) => f.write_str("<invalid database url>"),
        }
    }
}

impl fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatabaseTarget({})", self)
    }
}

/// Pool sizing and timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the target is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseTarget::default(), PoolSettings::default()).await?;
/// ```
pub async fn create_pool(
    target: &DatabaseTarget,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    let options = target.connect_options()?;
    tracing::debug!(
        target_db = %target,
        max_connections = settings.max_connections,
        "connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}

/// Begin a read-only transaction on a pooled connection.
///
/// Commit to finish normally. Dropping the guard on an error path rolls back
/// and returns the connection to the pool.
pub async fn begin_read_only(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
