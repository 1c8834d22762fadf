mod backend;
mod errors;
mod nft_storage;

pub use backend::BlobStore;
pub use errors::*;
pub use nft_storage::NftStorageClient;
