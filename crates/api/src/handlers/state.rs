use super::models::AppState;
use nftup_events::EventBus;
use nftup_uploader::UploadAdapter;
use axum::extract::FromRef;
use std::sync::Arc;

impl AppState {
    pub fn new(adapter: Arc<UploadAdapter>, events: Arc<EventBus>) -> Self {
        Self { adapter, events }
    }
}

impl FromRef<AppState> for Arc<UploadAdapter> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.adapter)
    }
}
