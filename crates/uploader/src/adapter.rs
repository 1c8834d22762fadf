use crate::errors::{UploadError, UploadFailure};
use nftup_models::{Cid, FileMeta, UploadDetail, UploadableFile};
use nftup_storage::BlobStore;
use std::sync::Arc;

/// 50 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 52_428_800;

pub type UploadOutcome = Result<UploadDetail, UploadFailure>;

/// Forwards files to a blob store, enforcing a size ceiling first.
///
/// Holds no per-call state; share it behind an `Arc` across tasks.
pub struct UploadAdapter {
    store: Arc<dyn BlobStore>,
    max_file_size: u64,
}

impl UploadAdapter {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn store(&self) -> &Arc<dyn BlobStore> {
        &self.store
    }

    /// Rejects `size` above the ceiling with a detail record for `file`.
    ///
    /// `size` may exceed `file.size()` when the caller stopped buffering a
    /// payload that was still arriving; the detail then reports `size`.
    pub fn check_size(&self, file: &UploadableFile, size: u64) -> Result<(), UploadFailure> {
        if size <= self.max_file_size {
            return Ok(());
        }

        tracing::debug!(
            "Refusing {}: {} bytes exceeds {} bytes",
            file.name,
            size,
            self.max_file_size
        );

        let mut detail = get_cid_detail(None, file);
        detail.file.size = size;
        Err(UploadFailure {
            error: UploadError::SizeLimitExceeded {
                size,
                limit: self.max_file_size,
            },
            detail,
        })
    }

    /// Uploads `file` as a single blob.
    ///
    /// Files above the size ceiling fail without contacting the store. Any
    /// store failure is returned as-is; there is no retry. Both success and
    /// failure carry a freshly built [`UploadDetail`].
    pub async fn upload_blob(&self, file: &UploadableFile) -> UploadOutcome {
        self.check_size(file, file.size())?;

        match self.store.store_blob(file).await {
            Ok(cid) => {
                tracing::debug!("{} stored on {} as {}", file.name, self.store.name(), cid);
                Ok(get_cid_detail(Some(cid), file))
            }
            Err(e) => {
                tracing::debug!("{} upload to {} failed: {}", file.name, self.store.name(), e);
                Err(UploadFailure {
                    error: UploadError::Upstream(e),
                    detail: get_cid_detail(None, file),
                })
            }
        }
    }
}

/// Builds the detail record for `file`, stamped with the current time
pub fn get_cid_detail(cid: Option<Cid>, file: &UploadableFile) -> UploadDetail {
    UploadDetail {
        cid,
        file: FileMeta::capture(file),
    }
}
