use crate::StorageError;
use nftup_models::{Cid, UploadableFile};

/// Content-addressed blob storage
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Store the file's payload as a single blob, returns its content identifier
    async fn store_blob(&self, file: &UploadableFile) -> Result<Cid, StorageError>;

    /// Remove a previously stored blob
    async fn delete_blob(&self, cid: &Cid) -> Result<(), StorageError>;

    /// Public gateway link for a stored blob
    fn gateway_url(&self, cid: &Cid) -> String;

    /// Backend name used in logs and service info
    fn name(&self) -> &str;
}
