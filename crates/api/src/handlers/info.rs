use crate::models::ServiceInfo;
use nftup_uploader::UploadAdapter;
use axum::{extract::State, response::Json};
use std::sync::Arc;

pub async fn service_info(State(adapter): State<Arc<UploadAdapter>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        backend: adapter.store().name().to_string(),
        max_file_size: adapter.max_file_size(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
