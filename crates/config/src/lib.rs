mod models;
mod defaults;
mod loader;
mod errors;

pub use models::*;
pub use errors::ConfigError;
pub use loader::{API_TOKEN_ENV, ENDPOINT_URL_ENV};
