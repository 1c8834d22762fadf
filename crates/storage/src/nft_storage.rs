use crate::backend::BlobStore;
use crate::StorageError;
use nftup_config::StorageSettings;
use nftup_models::{Cid, UploadableFile};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

type Result<T> = std::result::Result<T, StorageError>;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// NFT.Storage HTTP API client
/// Each call is a single request; failures are surfaced without retrying.
pub struct NftStorageClient {
    client: reqwest::Client,
    endpoint: Url,
    api_token: String,
    gateway_url: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    ok: bool,
    value: Option<StoredValue>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct StoredValue {
    cid: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    name: Option<String>,
    message: Option<String>,
}

impl ApiErrorBody {
    fn describe(&self) -> String {
        match (&self.name, &self.message) {
            (Some(name), Some(message)) => format!("{}: {}", name, message),
            (None, Some(message)) => message.clone(),
            (Some(name), None) => name.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

impl NftStorageClient {
    pub fn new(settings: &StorageSettings) -> Result<Self> {
        if settings.api_token.trim().is_empty() {
            return Err(StorageError::ConfigError("API token is empty".to_string()));
        }

        let endpoint = Url::parse(&settings.endpoint_url).map_err(|e| {
            StorageError::ConfigError(format!("endpoint '{}': {}", settings.endpoint_url, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(StorageError::ConfigError(format!(
                "endpoint '{}' cannot carry a path",
                settings.endpoint_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_token: settings.api_token.clone(),
            gateway_url: settings.gateway_url.trim_end_matches('/').to_string(),
        })
    }

    /// Appends one percent-encoded path segment to the endpoint
    fn endpoint_with(&self, segment: &str) -> Url {
        let mut url = self.endpoint.clone();
        // Checked in new(): the endpoint can be a base
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_token)
    }
}

#[async_trait::async_trait]
impl BlobStore for NftStorageClient {
    async fn store_blob(&self, file: &UploadableFile) -> Result<Cid> {
        let url = self.endpoint_with("upload");
        let content_type = if file.mime_type.is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            file.mime_type.as_str()
        };

        tracing::debug!("Uploading {} ({} bytes) to {}", file.name, file.size(), url);

        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(file.data().clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<ApiResponse>(&body).ok();

        if !status.is_success() {
            return Err(rejection(status, parsed.as_ref(), &body));
        }

        let parsed = parsed.ok_or_else(|| {
            StorageError::MalformedResponse(format!("unexpected body: {}", truncate(&body)))
        })?;

        if !parsed.ok {
            return Err(rejection(status, Some(&parsed), &body));
        }

        let raw_cid = parsed
            .value
            .and_then(|value| value.cid)
            .ok_or_else(|| StorageError::MalformedResponse("response has no cid".to_string()))?;

        Cid::new(raw_cid)
            .map_err(|e| StorageError::MalformedResponse(e.to_string()))
    }

    async fn delete_blob(&self, cid: &Cid) -> Result<()> {
        // Dot segments would be resolved away and retarget the request
        if matches!(cid.as_str(), "." | "..") {
            return Err(StorageError::InvalidCid(cid.to_string()));
        }
        let url = self.endpoint_with(cid.as_str());

        tracing::debug!("Deleting {} via {}", cid, url);

        let response = self
            .client
            .delete(url)
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ApiResponse>(&body).ok();
        Err(rejection(status, parsed.as_ref(), &body))
    }

    fn gateway_url(&self, cid: &Cid) -> String {
        format!("{}/{}", self.gateway_url, cid)
    }

    fn name(&self) -> &str {
        "nft.storage"
    }
}

fn rejection(status: StatusCode, parsed: Option<&ApiResponse>, body: &str) -> StorageError {
    let message = parsed
        .and_then(|r| r.error.as_ref())
        .map(ApiErrorBody::describe)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no reason").to_string()
            } else {
                truncate(body)
            }
        });

    StorageError::Rejected {
        status: status.as_u16(),
        message,
    }
}

fn truncate(body: &str) -> String {
    const MAX: usize = 256;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
