use nftup_models::UploadDetail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub backend: String,
    pub max_file_size: u64,
    pub version: String,
}

/// Body of every upload response. `detail` is present on success and failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub error: Option<ErrorDetail>,
    pub detail: UploadDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
