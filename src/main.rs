//! Contact Book - Main entry point
//!
//! Starts the contact book web server: loads configuration, opens the
//! SQLite store, and serves the contact pages over HTTP.

use anyhow::Result;
use contact_book::{Config, ContactServiceImpl, HttpServer, SqliteContactRepository};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can feed the subscriber.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(db_path = %config.db_path, port = config.port, "starting contact book");

    let repo = match SqliteContactRepository::open(&config.db_path) {
        Ok(repo) => Arc::new(repo),
        Err(e) => {
            error!(db_path = %config.db_path, error = %e, "failed to open database");
            return Err(e.into());
        }
    };

    let service = Arc::new(ContactServiceImpl::new(repo));
    let server = HttpServer::new(service, config.port);

    server.run().await?;

    info!("contact book shutdown complete");
    Ok(())
}
