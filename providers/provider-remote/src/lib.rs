//! # provider-remote
//!
//! Video source that fetches the published video document over HTTP.
//!
//! The document lives at a well-known path under the site origin
//! (`{origin}/data/bird-nest-videos.json`) and has the shape
//! `{"videos": [VideoRecord, ...]}`. One GET is issued per call; there is
//! no caching and no retry.
//!
//! ## Configuration
//!
//! ```rust
//! use provider_remote::{RemoteSourceConfig, RemoteVideoSource};
//!
//! let config = RemoteSourceConfig {
//!     origin: "https://tori-live.example".to_string(),
//!     ..Default::default()
//! };
//! let source = RemoteVideoSource::new(config).unwrap();
//! assert_eq!(
//!     source.url().as_str(),
//!     "https://tori-live.example/data/bird-nest-videos.json"
//! );
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tori_live_core::prelude::*;
use tracing::debug;
use url::Url;

/// Path of the video document under the origin.
pub const VIDEOS_PATH: &str = "/data/bird-nest-videos.json";

/// Origin used when the caller has none (local development server).
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch videos: {0}")]
    Status(u16),

    #[error("Failed to parse video document: {0}")]
    Parse(String),

    #[error("Invalid origin URL: {0}")]
    InvalidUrl(String),
}

impl From<RemoteError> for SourceError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Http(e) => SourceError::Network(e.to_string()),
            RemoteError::Status(code) => SourceError::Status(code),
            RemoteError::Parse(e) => SourceError::Decode(e),
            RemoteError::InvalidUrl(e) => SourceError::InvalidOrigin(e),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Where and how to fetch the video document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSourceConfig {
    /// Site origin, e.g. `https://tori-live.example`
    pub origin: String,
    /// Document path under the origin
    pub path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteSourceConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            path: VIDEOS_PATH.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Resolve the document URL for an origin and path.
///
/// Only absolute `http`/`https` origins are accepted.
pub fn document_url(origin: &str, path: &str) -> std::result::Result<Url, RemoteError> {
    let base = Url::parse(origin).map_err(|e| RemoteError::InvalidUrl(format!("{origin}: {e}")))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(RemoteError::InvalidUrl(format!(
            "{origin}: unsupported scheme '{}'",
            base.scheme()
        )));
    }

    base.join(path)
        .map_err(|e| RemoteError::InvalidUrl(format!("{origin}{path}: {e}")))
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct VideoDocument {
    videos: Vec<VideoRecord>,
}

// ============================================================================
// Remote Source Implementation
// ============================================================================

/// Video source that GETs the JSON document from the site origin.
pub struct RemoteVideoSource {
    client: Client,
    url: Url,
}

impl RemoteVideoSource {
    /// Create a remote source from configuration.
    pub fn new(config: RemoteSourceConfig) -> std::result::Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Self::with_client(client, &config.origin, &config.path)
    }

    /// Create a remote source using an existing HTTP client.
    pub fn with_client(
        client: Client,
        origin: &str,
        path: &str,
    ) -> std::result::Result<Self, RemoteError> {
        let url = document_url(origin, path)?;
        Ok(Self { client, url })
    }

    /// The fully resolved document URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch_document(&self) -> std::result::Result<VideoDocument, RemoteError> {
        debug!("Fetching video document: {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

#[async_trait]
impl VideoSource for RemoteVideoSource {
    fn id(&self) -> &'static str {
        "remote"
    }

    async fn videos(&self) -> Result<Vec<VideoRecord>> {
        let document = self.fetch_document().await?;
        debug!("Decoded {} video(s) from {}", document.videos.len(), self.url);
        Ok(document.videos)
    }
}
