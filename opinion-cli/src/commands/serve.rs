//! HTTP server command
//!
//! Resolves configuration, opens the pool and runs the API until shutdown.

use anyhow::{Context, Result};
use clap::Parser;

use opinion_server::{create_pool, run_server};

use crate::config::{self, DatabaseArgs, FileConfig, ServerArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file: &FileConfig) -> Result<()> {
    let (target, settings) = config::resolve_database(&args.database, &file.database);
    let server_config = config::resolve_server(&args.server, &file.server);

    tracing::info!(
        database = %target,
        max_connections = settings.max_connections,
        "Starting opinion-api on {}",
        server_config.bind_addr
    );

    let pool = create_pool(&target, settings)
        .await
        .with_context(|| format!("Failed to connect to database at {target}"))?;

    // Blocks until shutdown; closes the pool on the way out
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
