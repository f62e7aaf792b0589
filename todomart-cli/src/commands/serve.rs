//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use todomart_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use todomart_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:4567")]
    pub bind: SocketAddr,

    /// SQLite database URL; the file is created if missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://todomart.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: args.bind,
            database_url: args.database_url,
            max_connections: args.max_connections,
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting todomart server on {}", args.bind);

    run_server(args.into()).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_map_onto_server_config() {
        let harness = Harness::parse_from([
            "todomart",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "sqlite://other.db",
            "--max-connections",
            "2",
        ]);

        let config = ServerConfig::from(harness.serve);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.max_connections, 2);
    }
}
