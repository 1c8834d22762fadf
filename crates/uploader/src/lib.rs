mod adapter;
mod errors;

pub use adapter::{get_cid_detail, UploadAdapter, UploadOutcome, DEFAULT_MAX_FILE_SIZE};
pub use errors::{UploadError, UploadFailure};
