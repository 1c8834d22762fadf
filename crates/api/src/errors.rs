use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use nftup_storage::StorageError;
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request has no 'file' field")]
    MissingFile,

    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("Invalid content identifier: {0}")]
    InvalidCid(String),

    #[error(transparent)]
    Upstream(#[from] StorageError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingFile => (StatusCode::BAD_REQUEST, "MISSING_FILE"),
            ApiError::InvalidMultipart(_) => (StatusCode::BAD_REQUEST, "INVALID_MULTIPART"),
            ApiError::InvalidCid(_) => (StatusCode::BAD_REQUEST, "INVALID_CID"),
            ApiError::Upstream(StorageError::InvalidCid(_)) => (StatusCode::BAD_REQUEST, "INVALID_CID"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_cid_is_client_error() {
        let err = ApiError::from(StorageError::InvalidCid("..".to_string()));
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "INVALID_CID"));

        let err = ApiError::from(StorageError::Rejected {
            status: 404,
            message: "not found".to_string(),
        });
        assert_eq!(err.status_and_code(), (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"));
    }
}
