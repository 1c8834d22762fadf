mod bootstrap;

use nftup_api::AppState;
use nftup_events::{AppEvent, EventBus};
use nftup_storage::{BlobStore, NftStorageClient};
use nftup_uploader::UploadAdapter;
use crate::bootstrap::{config, logging, router};
use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("NFTUP_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let storage = initialize_storage(&config.storage)?;
    events.emit(AppEvent::StorageReady {
        backend: storage.name().to_string(),
        endpoint: config.storage.endpoint_url.clone(),
    });

    let adapter = UploadAdapter::new(storage)
        .with_max_file_size(config.storage.max_file_size_bytes());
    let app_state = AppState::new(Arc::new(adapter), Arc::clone(&events));
    let app = router::build(&config, app_state);

    let addr = config.server.bind_addr();
    let listener = bind_server(&addr).await?;

    events.emit(AppEvent::Ready { addr: addr.clone() });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    };

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(config.server.tcp_nodelay)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}

fn initialize_storage(settings: &nftup_config::StorageSettings) -> Result<Arc<dyn BlobStore>> {
    let client = NftStorageClient::new(settings)?;
    Ok(Arc::new(client) as Arc<dyn BlobStore>)
}

async fn bind_server(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.split(':').last().unwrap_or("unknown");
            tracing::error!("❌ Port {} is already in use", port);
            tracing::error!("Change the port in config.toml or stop the other application");
        } else {
            tracing::error!("❌ Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}
