use super::models::AppState;
use crate::errors::ApiError;
use crate::models::{ErrorDetail, UploadResponse};
use nftup_events::AppEvent;
use nftup_models::UploadableFile;
use nftup_uploader::UploadError;
use bytes::BytesMut;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};

const FILE_FIELD: &str = "file";
const DEFAULT_FILE_NAME: &str = "blob";

pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let (file, received) = read_file_field(multipart, state.adapter.max_file_size()).await?;

    let outcome = match state.adapter.check_size(&file, received) {
        Ok(()) => state.adapter.upload_blob(&file).await,
        Err(failure) => Err(failure),
    };

    match outcome {
        Ok(detail) => {
            let gateway_url = detail.cid.as_ref().map(|cid| {
                state.events.emit(AppEvent::UploadStored {
                    name: detail.file.name.clone(),
                    size: detail.file.size,
                    cid: cid.to_string(),
                });
                state.adapter.store().gateway_url(cid)
            });

            Ok((
                StatusCode::OK,
                Json(UploadResponse {
                    error: None,
                    detail,
                    gateway_url,
                }),
            ))
        }
        Err(failure) => {
            let (status, code) = match &failure.error {
                UploadError::SizeLimitExceeded { size, limit } => {
                    state.events.emit(AppEvent::UploadRejected {
                        name: file.name.clone(),
                        size: *size,
                        limit: *limit,
                    });
                    (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE")
                }
                UploadError::Upstream(e) => {
                    state.events.emit(AppEvent::UploadFailed {
                        name: file.name.clone(),
                        error: e.to_string(),
                    });
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
                }
            };

            let (error, detail) = failure.into_parts();
            Ok((
                status,
                Json(UploadResponse {
                    error: Some(ErrorDetail {
                        code: code.to_string(),
                        message: error.to_string(),
                    }),
                    detail,
                    gateway_url: None,
                }),
            ))
        }
    }
}

/// Reads the first `file` field; other fields are skipped.
///
/// Buffers at most `limit` bytes. Once the field grows past `limit` reading
/// stops, and the returned count is the number of bytes seen so far.
async fn read_file_field(
    mut multipart: Multipart,
    limit: u64,
) -> Result<(UploadableFile, u64), ApiError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field
            .file_name()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        let mime_type = match field.content_type() {
            Some(content_type) => content_type.to_string(),
            None => mime_guess::from_path(&name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        };

        let mut data = BytesMut::new();
        let mut received: u64 = 0;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?
        {
            received = received.saturating_add(chunk.len() as u64);
            if received > limit {
                tracing::debug!("Stopped reading {} after {} bytes (limit {})", name, received, limit);
                break;
            }
            data.extend_from_slice(&chunk);
        }

        tracing::debug!("Received {} ({} bytes, {})", name, received, mime_type);

        return Ok((UploadableFile::new(name, mime_type, data.freeze()), received));
    }

    Err(ApiError::MissingFile)
}
