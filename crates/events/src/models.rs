use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { endpoint: String },
    ConfigCreated { path: String },

    // Storage
    StorageReady { backend: String, endpoint: String },

    // Uploads
    UploadStored { name: String, size: u64, cid: String },
    UploadRejected { name: String, size: u64, limit: u64 },
    UploadFailed { name: String, error: String },
    BlobDeleted { cid: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
