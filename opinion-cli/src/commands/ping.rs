//! Database connectivity check

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use opinion_server::create_pool;
use opinion_server::db::ping;

use crate::config::{self, DatabaseArgs, FileConfig};

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Connect with the resolved settings and run a trivial query.
pub async fn run_ping(args: PingArgs, file: &FileConfig) -> Result<()> {
    let (target, settings) = config::resolve_database(&args.database, &file.database);
    tracing::debug!(database = %target, "Pinging database");

    let started = Instant::now();
    let pool = create_pool(&target, settings)
        .await
        .with_context(|| format!("Failed to connect to database at {target}"))?;

    let result = ping(&pool).await;
    pool.close().await;
    result.with_context(|| format!("Database at {target} did not answer"))?;

    println!("ok: {} ({} ms)", target, started.elapsed().as_millis());
    Ok(())
}
