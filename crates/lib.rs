// Re-export all public APIs from the workspace crates

pub use nftup_models::*;
pub use nftup_events::*;
pub use nftup_config::*;
pub use nftup_storage::*;
pub use nftup_uploader::*;
pub use nftup_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use nftup_models::{Cid, FileMeta, UploadDetail, UploadableFile};

    // Events
    pub use nftup_events::{AppEvent, EventBus};

    // Configuration
    pub use nftup_config::Config;

    // Storage
    pub use nftup_storage::{BlobStore, NftStorageClient, StorageError};

    // Uploads
    pub use nftup_uploader::{get_cid_detail, UploadAdapter, UploadError, UploadFailure};
}
