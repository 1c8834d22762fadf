use nftup_models::{UploadDetail, BYTES_PER_MB};
use nftup_storage::StorageError;
use thiserror::Error;

/// Whole megabytes render as "N MB", anything else as exact bytes
fn describe_limit(bytes: &u64) -> String {
    if *bytes >= BYTES_PER_MB && bytes % BYTES_PER_MB == 0 {
        format!("{} MB", bytes / BYTES_PER_MB)
    } else {
        format!("{} bytes", bytes)
    }
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Maximum file size to be upload is {}", describe_limit(.limit))]
    SizeLimitExceeded { size: u64, limit: u64 },

    #[error(transparent)]
    Upstream(#[from] StorageError),
}

/// A failed upload. The detail record is still produced, with no cid.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct UploadFailure {
    pub error: UploadError,
    pub detail: UploadDetail,
}

impl UploadFailure {
    pub fn into_parts(self) -> (UploadError, UploadDetail) {
        (self.error, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(limit: u64) -> String {
        UploadError::SizeLimitExceeded { size: limit + 1, limit }.to_string()
    }

    #[test]
    fn test_size_limit_message() {
        assert_eq!(message(52_428_800), "Maximum file size to be upload is 50 MB");
        assert_eq!(message(BYTES_PER_MB), "Maximum file size to be upload is 1 MB");
        assert_eq!(message(10), "Maximum file size to be upload is 10 bytes");
        assert_eq!(message(BYTES_PER_MB + BYTES_PER_MB / 2), "Maximum file size to be upload is 1572864 bytes");
    }
}
