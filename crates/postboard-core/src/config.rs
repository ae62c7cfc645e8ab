// ── Runtime connection configuration ──
//
// Describes *where* the post collection lives and how long to wait for it.
// Never touches disk: the CLI builds a `ClientConfig` from its config file
// and flags, then hands it in.

use std::time::Duration;

use postboard_api::{PostsClient, TransportConfig};
use url::Url;

use crate::error::CoreError;
use crate::store::PostStore;

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Connection settings for one post collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection URL; items live at `{url}/{id}`.
    pub url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parse `url` and pair it with `timeout`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let url = Url::parse(url).map_err(|e| CoreError::Config {
            message: format!("invalid API URL '{url}': {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config {
                message: format!("unsupported URL scheme '{}'", url.scheme()),
            });
        }
        Ok(Self { url, timeout })
    }

    /// Build the HTTP client this config describes.
    pub fn build_client(&self) -> Result<PostsClient, CoreError> {
        let transport = TransportConfig::with_timeout(self.timeout);
        Ok(PostsClient::new(self.url.as_str(), &transport)?)
    }
}

impl PostStore<PostsClient> {
    /// Store backed by a real HTTP client built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        Ok(Self::new(config.build_client()?))
    }
}
