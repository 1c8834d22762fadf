/// Default values for configuration fields

pub fn host() -> String {
    "0.0.0.0".to_string()
}

pub fn port() -> u16 {
    8080
}

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    180  // Must cover the upstream upload timeout
}

pub fn max_concurrent_requests() -> usize {
    256
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn enable_compression() -> bool {
    true
}

pub fn server_settings() -> super::models::ServerSettings {
    super::models::ServerSettings {
        host: host(),
        port: port(),
        tcp_nodelay: tcp_nodelay(),
        timeout_secs: timeout_secs(),
        allowed_origins: allowed_origins(),
        max_concurrent_requests: max_concurrent_requests(),
        enable_compression: enable_compression(),
    }
}

// Storage defaults
pub fn endpoint_url() -> String {
    "https://api.nft.storage".to_string()
}

pub fn gateway_url() -> String {
    "https://nftstorage.link/ipfs".to_string()
}

pub fn storage_timeout_secs() -> u64 {
    120
}

pub fn max_file_size() -> u64 {
    50
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# nftup Configuration
# ===============================================================================

[server]
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 8080                          # Server port
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 180                   # Request timeout in seconds
max_concurrent_requests = 256        # Max simultaneous requests
enable_compression = true            # HTTP compression for JSON responses
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

# ===============================================================================
# NFT.STORAGE
# ===============================================================================
[storage]
endpoint_url = "https://api.nft.storage"     # NFT.Storage API endpoint
api_token = ""                               # API token (or set NFTUP_API_TOKEN)
gateway_url = "https://nftstorage.link/ipfs" # Gateway used to build public links
timeout_secs = 120                           # Upstream request timeout in seconds
max_file_size_mb = 50                        # Uploads above this size are rejected locally (max 4096)
"#;
