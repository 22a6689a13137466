//! Contacts Manager - server entry point.
//!
//! Serves the contacts web API over the configured storage backend.

use anyhow::Result;
use contacts_manager::repositories::{
    ContactRepository, ExcelContactRepository, MemoryContactRepository,
};
use contacts_manager::{server, Config, StorageBackend};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG wins; LOG_LEVEL is the configured fallback
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(std::env::var("LOG_LEVEL").unwrap_or_default()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize the repository
    let repository: Arc<dyn ContactRepository> = match config.storage {
        StorageBackend::Excel => {
            info!(
                "Using Excel storage at {}",
                config.contacts_file.display()
            );
            Arc::new(ExcelContactRepository::open(&config.contacts_file).await?)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage with sample data");
            Arc::new(MemoryContactRepository::with_sample_data())
        }
    };

    // Run the server (this will block until the process is stopped)
    server::run(&config.bind_addr, repository).await
}
