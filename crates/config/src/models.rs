use nftup_models::BYTES_PER_MB;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_file_size_mb`; uploads are buffered in memory
pub const MAX_FILE_SIZE_MB_CAP: u64 = 4096;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "super::defaults::server_settings")]
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "super::defaults::host")]
    pub host: String,
    #[serde(default = "super::defaults::port")]
    pub port: u16,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "super::defaults::endpoint_url")]
    pub endpoint_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "super::defaults::gateway_url")]
    pub gateway_url: String,
    #[serde(default = "super::defaults::storage_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_file_size")]
    pub max_file_size_mb: u64,
}

// Token is redacted so settings can be logged
impl std::fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageSettings")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_token", &"[REDACTED]")
            .field("gateway_url", &self.gateway_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_file_size_mb", &self.max_file_size_mb)
            .finish()
    }
}

impl StorageSettings {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
