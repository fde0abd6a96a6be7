//! # Gallery
//!
//! One render pass: ask the source for records once, then derive a card for
//! each record in source order. Nothing is cached between passes.

use crate::card::{CardFormatter, GalleryCard};
use crate::config::GalleryConfig;
use crate::source::{build_source, fetch_videos};
use anyhow::Result;
use serde::Serialize;
use tori_live_core::{VideoRecord, VideoSource};
use tracing::info;

/// The cards for a single render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub cards: Vec<GalleryCard>,
}

impl Gallery {
    /// Fetch records from `source` and format them.
    ///
    /// A failing source yields an empty gallery.
    pub async fn load(source: &dyn VideoSource, formatter: &CardFormatter) -> Self {
        let videos = fetch_videos(source).await;
        info!("Loaded {} video(s) from '{}' source", videos.len(), source.id());
        Self::from_records(&videos, formatter)
    }

    /// Build the source and formatter described by `config`, then load.
    ///
    /// Only configuration problems are errors; fetch failures still degrade
    /// to an empty gallery.
    pub async fn from_config(config: &GalleryConfig) -> Result<Self> {
        let source = build_source(&config.source)?;
        let formatter =
            CardFormatter::default().with_reference_date(config.display.reference_date());

        Ok(Self::load(source.as_ref(), &formatter).await)
    }

    /// Format already-fetched records.
    pub fn from_records(videos: &[VideoRecord], formatter: &CardFormatter) -> Self {
        Self {
            cards: videos.iter().map(|video| formatter.card(video)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
