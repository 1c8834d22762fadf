use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                if self.silent_mode {
                    return;
                }
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "nftup - NFT.Storage Upload Gateway".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr } => {
                if self.silent_mode {
                    tracing::info!("Listening on {}", addr);
                    return;
                }
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server".white(), addr.cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                if !self.silent_mode {
                    println!("\n{}", "Server shutting down".red());
                }
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                if !self.silent_mode {
                    println!("  {} {}", "Loading config".dimmed(), path.cyan());
                }
            }
            AppEvent::ConfigLoaded { endpoint } => {
                if !self.silent_mode {
                    println!("  {} Storage endpoint {}", "✓".green(), endpoint.cyan());
                }
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }

            // Storage
            AppEvent::StorageReady { backend, endpoint } => {
                tracing::info!("Initialized {} storage backend: endpoint={}", backend, endpoint);
            }

            // Uploads
            AppEvent::UploadStored { name, size, cid } => {
                tracing::info!("Stored {} ({} bytes) as {}", name, size, cid);
            }
            AppEvent::UploadRejected { name, size, limit } => {
                tracing::warn!("Rejected {}: {} bytes exceeds limit of {} bytes", name, size, limit);
            }
            AppEvent::UploadFailed { name, error } => {
                tracing::error!("Upload of {} failed: {}", name, error);
            }
            AppEvent::BlobDeleted { cid } => {
                tracing::info!("Deleted {}", cid);
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
