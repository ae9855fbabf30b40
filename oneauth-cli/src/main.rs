//! oneauth CLI - global organization and user registry
//!
//! Entry point for the `oneauth` binary:
//! - `serve`: run the HTTP API over the `global_org` / `global_user` tables
//!
//! Configuration comes from flags, then environment variables, then a
//! `.env` file in the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "oneauth",
    author,
    version,
    about = "Global organization and user registry service",
    long_about = "Serve paginated CRUD for organizations and users, each mirroring \
                  identifiers from HRMS, Propeak and Skillzengine, over Postgres."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
    }

    Ok(())
}
