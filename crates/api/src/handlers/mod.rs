mod models;
mod state;
mod info;
mod upload;
mod blobs;

pub use models::AppState;
pub use info::service_info;
pub use upload::upload_file;
pub use blobs::delete_blob;
