use super::models::AppState;
use crate::errors::ApiError;
use nftup_events::AppEvent;
use nftup_models::Cid;
use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
};

pub async fn delete_blob(
    State(state): State<AppState>,
    AxumPath(raw_cid): AxumPath<String>,
) -> Result<StatusCode, ApiError> {
    let cid = Cid::new(raw_cid).map_err(|e| ApiError::InvalidCid(e.to_string()))?;

    if let Err(e) = state.adapter.store().delete_blob(&cid).await {
        state.events.emit(AppEvent::Error {
            context: format!("Delete {}", cid),
            error: e.to_string(),
        });
        return Err(e.into());
    }

    state.events.emit(AppEvent::BlobDeleted { cid: cid.to_string() });
    Ok(StatusCode::NO_CONTENT)
}
