use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response from storage service: {0}")]
    MalformedResponse(String),

    #[error("Content identifier '{0}' cannot be used as a path segment")]
    InvalidCid(String),

    #[error("Invalid storage configuration: {0}")]
    ConfigError(String),
}
