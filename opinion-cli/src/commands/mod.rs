//! Subcommand implementations

pub mod ping;
pub mod routes;
pub mod serve;

pub use ping::run_ping;
pub use routes::run_routes;
pub use serve::run_serve;
