//! # tori-live-core
//!
//! Core types and display helpers for the tori-live bird-nest gallery.
//!
//! This crate defines the abstractions shared by the video source strategies
//! and the gallery:
//!
//! - [`VideoRecord`] - One displayable live-stream video
//! - [`LocalTimeInfo`] - The "current time at filming location" view of a record
//! - [`VideoSource`] - Capability trait for anything that produces records
//! - [`clock`] - Injectable wall clock and timezone database
//! - [`format`] - View count, relative upload date, and watch URL formatting
//! - [`local_time`] - Event-anchored local time resolution

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod clock;
pub mod format;
pub mod local_time;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Failed to decode video document: {0}")]
    Decode(String),

    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;

// ============================================================================
// Video Types
// ============================================================================

/// A single video shown as a card in the gallery.
///
/// Field names follow the camelCase keys of the published JSON document.
/// Optional fields may be absent or `null`; both mean "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// External video-platform identifier.
    pub id: String,
    pub title: String,
    pub channel_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    /// Calendar date in `YYYY-MM-DD` form, no time-of-day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    pub thumbnail_url: String,
    /// IANA identifier of the filming location, e.g. `America/Los_Angeles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// UTC offset (`±HH:MM`) observed at the upload date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<String>,
}

impl VideoRecord {
    /// The `(timezone, timezone_offset)` pair, only when both halves are present.
    pub fn filming_zone(&self) -> Option<(&str, &str)> {
        match (&self.timezone, &self.timezone_offset) {
            (Some(zone), Some(offset)) => Some((zone.as_str(), offset.as_str())),
            _ => None,
        }
    }

    /// True when exactly one of `timezone` / `timezone_offset` is set.
    pub fn has_partial_zone(&self) -> bool {
        self.timezone.is_some() != self.timezone_offset.is_some()
    }

    /// Outbound link to the video on the platform.
    pub fn watch_url(&self) -> String {
        format::video_url(&self.id)
    }
}

/// Localized clock at the filming location, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTimeInfo {
    /// Clock time plus a bracketed zone abbreviation, e.g. `12:00（PDT）`.
    pub time_string: String,
    pub is_daytime: bool,
    /// Hour of day in `0..=23`.
    pub hour: u32,
}

impl LocalTimeInfo {
    /// Build from a resolved wall-clock hour; daytime is `[6, 18)`.
    pub fn new(time_string: String, hour: u32) -> Self {
        Self {
            time_string,
            is_daytime: (6..18).contains(&hour),
            hour,
        }
    }
}

impl Default for LocalTimeInfo {
    fn default() -> Self {
        Self {
            time_string: String::new(),
            is_daytime: true,
            hour: 12,
        }
    }
}

// ============================================================================
// Video Source Trait
// ============================================================================

/// Anything that can produce the ordered sequence of gallery videos.
///
/// Strategies report failures as [`SourceError`]; the gallery boundary is
/// responsible for collapsing them to an empty sequence.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Short identifier used in diagnostics (e.g. "static", "remote").
    fn id(&self) -> &'static str;

    /// Produce the videos, in display order.
    async fn videos(&self) -> Result<Vec<VideoRecord>>;
}

// ============================================================================
// Re-exports
// ============================================================================

pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, IanaZoneDatabase, SystemClock, ZoneDatabase};
    pub use crate::format::{format_upload_date, format_view_count, video_url};
    pub use crate::local_time::resolve_local_time;
    pub use crate::{LocalTimeInfo, Result, SourceError, VideoRecord, VideoSource};
}
