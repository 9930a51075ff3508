//! HTTP server command
//!
//! Builds the pooled store client once and hands it to the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use userctl_server::db::{create_pool_with_options, redact_url, DEFAULT_MAX_CONNECTIONS};
use userctl_server::http::{run_server, ServerConfig, DEFAULT_PORT};
use userctl_server::{AppState, PgUserStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "PG_CONNECTIONSTRING")]
    pub database_url: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Maximum pooled connections to the database
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    if let Some(url) = args.database_url.as_deref() {
        tracing::info!(database = %redact_url(url), "Using database");
    }

    // Lazy pool: no connection is attempted until the first request
    let pool = create_pool_with_options(args.database_url.as_deref(), args.max_connections)
        .context("Failed to create database pool")?;
    let state = AppState::new(PgUserStore::new(pool));

    // Run server (blocks until shutdown)
    run_server(state, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
