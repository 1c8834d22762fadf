use nftup_events::{AppEvent, EventBus};
use nftup_config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = absolute_path_string(config_path)?;

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.clone(),
    });

    let config_exists = Path::new(config_path).exists();
    let config = Config::from_file(config_path).await;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path,
        });
    }

    let config = config?;

    events.emit(AppEvent::ConfigLoaded {
        endpoint: config.storage.endpoint_url.clone(),
    });

    Ok(config)
}

fn absolute_path_string(path: &str) -> Result<String> {
    let path = PathBuf::from(path);
    let abs = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(abs.to_string_lossy().to_string())
}
