//! # Video Source Selection
//!
//! Turns [`SourceConfig`] into a concrete [`VideoSource`] and provides the
//! degrade-to-empty boundary the gallery reads through.
//!
//! Strategies report failures as tagged results. [`fetch_videos`] is the only
//! place those errors are swallowed: each failure is logged once and the
//! caller sees an empty sequence, indistinguishable from "no videos".

use crate::config::{SourceConfig, SourceKind};
use anyhow::{Context, Result};
use provider_remote::RemoteVideoSource;
use provider_static::StaticVideoSource;
use tori_live_core::{VideoRecord, VideoSource};
use tracing::{debug, error};

/// Build the video source described by `config`.
pub fn build_source(config: &SourceConfig) -> Result<Box<dyn VideoSource>> {
    match config.kind {
        SourceKind::Static => Ok(Box::new(StaticVideoSource::bird_nests())),
        SourceKind::Remote => {
            let source = RemoteVideoSource::new(config.remote())
                .context("Failed to create remote video source")?;
            debug!("Remote video source at {}", source.url());
            Ok(Box::new(source))
        }
    }
}

/// Fetch videos from `source`, collapsing any failure to an empty list.
pub async fn fetch_videos(source: &dyn VideoSource) -> Vec<VideoRecord> {
    match source.videos().await {
        Ok(videos) => videos,
        Err(e) => {
            error!("Error fetching videos from '{}' source: {}", source.id(), e);
            Vec::new()
        }
    }
}
