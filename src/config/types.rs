use serde::Deserialize;

/// Main configuration structure for coursemap
///
/// Every field has a default so the binary runs without a config file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub storage: StorageConfig,
    pub renderer: RendererConfig,
}

/// Target-site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root canonical urls live under
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Page enumerating every career track
    #[serde(rename = "listing-url")]
    pub listing_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.datacamp.com".to_string(),
            listing_url: "https://www.datacamp.com/tracks/career".to_string(),
        }
    }
}

/// Artifact storage configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory for persisted JSON artifacts
    #[serde(rename = "data-dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

/// Renderer behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Whole-request deadline in seconds; a stuck render is bounded by this
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment deadline in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("coursemap/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
