use nftup_api::{delete_blob, service_info, upload_file, AppState};
use nftup_config::Config;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

pub fn build(config: &Config, app_state: AppState) -> Router {
    let timeout = Duration::from_secs(config.server.timeout_secs);
    let max_concurrent_requests = config.server.max_concurrent_requests;

    let mut router = Router::new()
        .route("/", get(service_info))
        .route("/upload", post(upload_file))
        .route("/blobs/:cid", delete(delete_blob))
        // The upload handler enforces storage.max_file_size_mb while streaming
        .layer(DefaultBodyLimit::disable())
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout));

    if config.server.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    router
        .layer(build_cors_layer(&config.server.allowed_origins))
        .with_state(app_state)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use nftup_events::EventBus;
    use nftup_models::{Cid, UploadableFile};
    use nftup_storage::{BlobStore, StorageError};
    use nftup_uploader::UploadAdapter;
    use std::sync::Arc;
    use tower::ServiceExt;

    const MIB: usize = 1024 * 1024;
    const BOUNDARY: &str = "router-test-boundary";

    struct AcceptingStore;

    #[async_trait::async_trait]
    impl BlobStore for AcceptingStore {
        async fn store_blob(&self, _file: &UploadableFile) -> Result<Cid, StorageError> {
            Ok(Cid::new("bafkreirouter").unwrap())
        }

        async fn delete_blob(&self, _cid: &Cid) -> Result<(), StorageError> {
            Ok(())
        }

        fn gateway_url(&self, cid: &Cid) -> String {
            format!("https://gateway.test/ipfs/{}", cid)
        }

        fn name(&self) -> &str {
            "accepting"
        }
    }

    fn app() -> Router {
        let config = Config::from_toml_str("[storage]\napi_token = \"t\"\nmax_file_size_mb = 1\n").unwrap();
        let adapter = UploadAdapter::new(Arc::new(AcceptingStore) as Arc<dyn BlobStore>)
            .with_max_file_size(config.storage.max_file_size_bytes());
        build(&config, AppState::new(Arc::new(adapter), EventBus::new(true)))
    }

    fn upload(size: usize) -> Request<Body> {
        let mut body = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"data.bin\"\r\n\r\n",
            BOUNDARY
        )
        .into_bytes();
        body.extend(std::iter::repeat(0u8).take(size));
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
            .body(Body::from(body))
            .unwrap()
    }

    async fn json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_at_file_limit_is_accepted() {
        let response = app().oneshot(upload(MIB)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["detail"]["cid"], "bafkreirouter");
        assert_eq!(body["detail"]["file"]["size"], MIB as u64);
    }

    #[tokio::test]
    async fn test_upload_over_file_limit_returns_detail() {
        let response = app().oneshot(upload(MIB + 1)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = json(response).await;
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
        assert_eq!(body["error"]["message"], "Maximum file size to be upload is 1 MB");
        assert!(body["detail"]["cid"].is_null());
        assert_eq!(body["detail"]["file"]["name"], "data.bin");
        assert_eq!(body["detail"]["file"]["size"], (MIB + 1) as u64);
    }

    #[tokio::test]
    async fn test_large_upload_is_not_cut_short() {
        let response = app().oneshot(upload(3 * MIB)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json(response).await["error"]["code"], "FILE_TOO_LARGE");
    }
}
