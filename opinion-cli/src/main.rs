//! opinion-api - read-only reporting API over the OpinionDB store
//!
//! Entry point for the HTTP server and its operational helpers:
//! - `serve`: run the HTTP API
//! - `ping`: check database connectivity with the resolved configuration
//! - `routes`: list the data routes the API exposes
//! - `completions`: generate shell completion scripts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use config::FileConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "opinion-api",
    author,
    version,
    about = "Read-only HTTP API over customer opinion data",
    long_about = "Serve customers, products, sources, social comments, surveys and web reviews \
                  from the OpinionDB store as paginated JSON."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    /// TOML config file (default: ~/.opinion-api/config.toml if present)
    #[arg(long, global = true, env = "OPINION_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check that the configured database is reachable
    Ping(commands::ping::PingArgs),
    /// List the data routes exposed by the API
    Routes(commands::routes::RoutesArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `env = ...` args can see .env values
    let dotenv_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();
    config::log_dotenv(&dotenv_files);

    let result = run(cli).await;
    tracing_setup::shutdown_otel();
    result
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => {
            let file = FileConfig::load(cli.config.as_deref())?;
            commands::run_serve(args, &file).await
        }
        Commands::Ping(args) => {
            let file = FileConfig::load(cli.config.as_deref())?;
            commands::run_ping(args, &file).await
        }
        Commands::Routes(args) => commands::run_routes(args),
        Commands::Completions(args) => run_completions(args),
    }
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["opinion-api", "routes", "--json", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Routes(ref args) if args.json));
    }

    #[test]
    fn serve_accepts_bind_and_db_flags() {
        let cli = Cli::try_parse_from([
            "opinion-api",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--db-name",
            "OpinionDB_Test",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.server.bind.map(|addr| addr.port()), Some(8080));
                assert_eq!(args.database.db_name.as_deref(), Some("OpinionDB_Test"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["opinion-api", "serve", "--bind", "nowhere"]).is_err());
    }
}
