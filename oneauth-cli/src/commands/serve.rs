//! HTTP server command
//!
//! Connects the pool (fatal on failure), then serves until Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use oneauth_server::{connect, run_server, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ONEAUTH_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (unset = insecure local default, for development only)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "ONEAUTH_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Per-statement timeout in seconds (0 = server default)
    #[arg(long, env = "ONEAUTH_STATEMENT_TIMEOUT", default_value_t = 30)]
    pub statement_timeout: u64,
}

impl ServeArgs {
    fn db_config(&self) -> DbConfig {
        let mut config = match self.database_url.as_deref() {
            Some(url) if !url.trim().is_empty() => DbConfig::new(url),
            _ => DbConfig::from_env(),
        };
        config.max_connections = self.max_connections.max(1);
        config.statement_timeout =
            (self.statement_timeout > 0).then(|| Duration::from_secs(self.statement_timeout));
        config
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config();
    tracing::info!(
        bind = %args.bind,
        database = %db_config.redacted_url(),
        "Starting oneauth server"
    );

    let pool = connect(&db_config)
        .await
        .context("Could not connect to database")?;

    // Run server (blocks until shutdown, closes the pool on the way out)
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
