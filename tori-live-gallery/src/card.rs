//! Display cards for the gallery grid.
//!
//! A [`GalleryCard`] is the per-video view the presentation layer renders:
//! every string it needs, already formatted. Cards are derived fresh on each
//! render and never stored.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tori_live_core::clock::{Clock, IanaZoneDatabase, SystemClock, ZoneDatabase};
use tori_live_core::format::{format_view_count, parse_upload_date, relative_upload_date};
use tori_live_core::local_time::resolve_local_time;
use tori_live_core::{LocalTimeInfo, VideoRecord};
use tracing::warn;

/// One formatted video card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryCard {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub thumbnail_url: String,
    pub watch_url: String,
    /// Compact view count; hidden when unknown or zero
    pub views: Option<String>,
    /// Relative upload date; hidden when the date is unknown or malformed
    pub uploaded: Option<String>,
    /// Local time at the filming location; needs the date and both zone fields
    pub local_time: Option<LocalTimeInfo>,
}

/// Formats records into cards using injected time capabilities.
#[derive(Clone)]
pub struct CardFormatter {
    clock: Arc<dyn Clock>,
    zones: Arc<dyn ZoneDatabase>,
    reference_date: Option<NaiveDate>,
}

impl CardFormatter {
    pub fn new(clock: Arc<dyn Clock>, zones: Arc<dyn ZoneDatabase>) -> Self {
        Self {
            clock,
            zones,
            reference_date: None,
        }
    }

    /// Pin the "today" used for relative upload dates.
    pub fn with_reference_date(mut self, date: Option<NaiveDate>) -> Self {
        self.reference_date = date;
        self
    }

    /// The date relative upload strings are measured from.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| self.clock.today())
    }

    /// Derive the card for a single record.
    pub fn card(&self, record: &VideoRecord) -> GalleryCard {
        if record.has_partial_zone() {
            warn!(
                "Video '{}' has only one of timezone/timezoneOffset; local time hidden",
                record.id
            );
        }

        let upload = record.upload_date.as_deref().and_then(|date| {
            let parsed = parse_upload_date(date);
            if parsed.is_none() {
                warn!("Video '{}' has malformed uploadDate '{}'", record.id, date);
            }
            parsed
        });

        let local_time = match (record.upload_date.as_deref(), record.filming_zone()) {
            (Some(date), Some((zone, offset))) => Some(resolve_local_time(
                date,
                Some(zone),
                Some(offset),
                self.zones.as_ref(),
            )),
            _ => None,
        };

        GalleryCard {
            id: record.id.clone(),
            title: record.title.clone(),
            channel_name: record.channel_name.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            watch_url: record.watch_url(),
            views: record
                .view_count
                .filter(|count| *count > 0)
                .map(format_view_count),
            uploaded: upload.map(|date| relative_upload_date(date, self.reference_date())),
            local_time,
        }
    }
}

impl Default for CardFormatter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(IanaZoneDatabase))
    }
}

impl std::fmt::Debug for CardFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardFormatter")
            .field("reference_date", &self.reference_date)
            .finish_non_exhaustive()
    }
}
