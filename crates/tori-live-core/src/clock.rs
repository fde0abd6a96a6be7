//! Injectable time capabilities.
//!
//! The formatters never read the host clock or timezone database directly.
//! They go through [`Clock`] and [`ZoneDatabase`] so callers (and tests) can
//! pin the reference date and the zone data.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;

/// Source of "today" for relative dates.
pub trait Clock: Send + Sync {
    /// Current calendar date in the environment's local timezone.
    fn today(&self) -> NaiveDate;
}

/// The host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn on_date(date: NaiveDate) -> Self {
        Self { today: date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Maps an instant to wall-clock time in a named zone.
pub trait ZoneDatabase: Send + Sync {
    /// Wall-clock time of `instant` in `zone`, or `None` when the zone is unknown.
    fn local_datetime(&self, zone: &str, instant: DateTime<Utc>) -> Option<NaiveDateTime>;
}

/// The compiled-in IANA database.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaZoneDatabase;

impl ZoneDatabase for IanaZoneDatabase {
    fn local_datetime(&self, zone: &str, instant: DateTime<Utc>) -> Option<NaiveDateTime> {
        let tz: Tz = zone.parse().ok()?;
        Some(instant.with_timezone(&tz).naive_local())
    }
}

/// Zone data pinned to fixed offsets, one per identifier.
#[derive(Debug, Clone, Default)]
pub struct FixedZoneDatabase {
    zones: HashMap<String, FixedOffset>,
}

impl FixedZoneDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, zone: impl Into<String>, offset: FixedOffset) -> Self {
        self.zones.insert(zone.into(), offset);
        self
    }
}

impl ZoneDatabase for FixedZoneDatabase {
    fn local_datetime(&self, zone: &str, instant: DateTime<Utc>) -> Option<NaiveDateTime> {
        self.zones
            .get(zone)
            .map(|offset| instant.with_timezone(offset).naive_local())
    }
}
