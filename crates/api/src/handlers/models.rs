use nftup_events::EventBus;
use nftup_uploader::UploadAdapter;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) adapter: Arc<UploadAdapter>,
    pub(super) events: Arc<EventBus>,
}
