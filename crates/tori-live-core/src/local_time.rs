//! # Local Time
//!
//! Resolves the "current time at filming location" shown on each card.
//!
//! The time is event-anchored: a record carries only an upload date, so the
//! representative instant is noon of that day under the record's historical
//! UTC offset. That instant is then rendered as wall-clock time in the named
//! zone and labelled with a standard or daylight abbreviation.

use crate::clock::ZoneDatabase;
use crate::format::parse_upload_date;
use crate::LocalTimeInfo;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};

/// Offsets treated as daylight time when picking an abbreviation.
const DAYLIGHT_OFFSETS: [&str; 6] = ["-07:00", "-06:00", "-05:00", "-04:00", "+02:00", "+03:00"];

/// IANA identifier -> (standard, daylight) abbreviation.
const ZONE_ABBREVIATIONS: &[(&str, &str, &str)] = &[
    ("America/Los_Angeles", "PST", "PDT"),
    ("America/Vancouver", "PST", "PDT"),
    ("America/Denver", "MST", "MDT"),
    ("America/Phoenix", "MST", "MST"),
    ("America/Chicago", "CST", "CDT"),
    ("America/New_York", "EST", "EDT"),
    ("America/Toronto", "EST", "EDT"),
    ("America/Halifax", "AST", "ADT"),
    ("America/Anchorage", "AKST", "AKDT"),
    ("Pacific/Honolulu", "HST", "HST"),
    ("Europe/London", "GMT", "BST"),
    ("Europe/Dublin", "GMT", "IST"),
    ("Europe/Paris", "CET", "CEST"),
    ("Europe/Berlin", "CET", "CEST"),
    ("Europe/Amsterdam", "CET", "CEST"),
    ("Europe/Madrid", "CET", "CEST"),
    ("Europe/Rome", "CET", "CEST"),
    ("Europe/Stockholm", "CET", "CEST"),
    ("Europe/Helsinki", "EET", "EEST"),
    ("Europe/Athens", "EET", "EEST"),
    ("Asia/Tokyo", "JST", "JST"),
    ("Asia/Seoul", "KST", "KST"),
    ("Asia/Shanghai", "CST", "CST"),
    ("Asia/Kolkata", "IST", "IST"),
    ("Australia/Sydney", "AEST", "AEDT"),
    ("Australia/Melbourne", "AEST", "AEDT"),
    ("Pacific/Auckland", "NZST", "NZDT"),
];

/// Resolve the local time at the filming location of a video.
///
/// Returns [`LocalTimeInfo::default`] when either half of the timezone pair is
/// missing, or when the date or offset cannot be parsed. A zone the database
/// does not know is rendered under the fixed `timezone_offset` instead.
///
/// # Examples
///
/// ```
/// use tori_live_core::clock::IanaZoneDatabase;
/// use tori_live_core::local_time::resolve_local_time;
///
/// let info = resolve_local_time(
///     "2021-09-16",
///     Some("America/Los_Angeles"),
///     Some("-07:00"),
///     &IanaZoneDatabase,
/// );
/// assert_eq!(info.time_string, "12:00（PDT）");
/// assert!(info.is_daytime);
/// assert_eq!(info.hour, 12);
/// ```
pub fn resolve_local_time(
    upload_date: &str,
    timezone: Option<&str>,
    timezone_offset: Option<&str>,
    zones: &dyn ZoneDatabase,
) -> LocalTimeInfo {
    let (Some(zone), Some(offset)) = (timezone, timezone_offset) else {
        return LocalTimeInfo::default();
    };

    try_resolve(upload_date, zone, offset, zones).unwrap_or_default()
}

fn try_resolve(
    upload_date: &str,
    zone: &str,
    offset: &str,
    zones: &dyn ZoneDatabase,
) -> Option<LocalTimeInfo> {
    let fixed = parse_utc_offset(offset)?;
    let instant = noon_instant(upload_date, fixed)?;
    let local: NaiveDateTime = zones
        .local_datetime(zone, instant)
        .unwrap_or_else(|| instant.with_timezone(&fixed).naive_local());

    let time_string = format!(
        "{}（{}）",
        local.format("%H:%M"),
        zone_abbreviation(zone, offset)
    );

    Some(LocalTimeInfo::new(time_string, local.hour()))
}

/// Noon of `upload_date` under `offset`, as an absolute instant.
fn noon_instant(upload_date: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let noon = parse_upload_date(upload_date)?.and_hms_opt(12, 0, 0)?;
    offset
        .from_local_datetime(&noon)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a strict `±HH:MM` UTC offset.
pub fn parse_utc_offset(offset: &str) -> Option<FixedOffset> {
    let bytes = offset.as_bytes();
    if !offset.is_ascii() || bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = |range: std::ops::Range<usize>| -> Option<i32> {
        let part = &offset[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };
    let hours = digits(1..3)?;
    let minutes = digits(4..6)?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Abbreviation for `zone`, picking daylight or standard by `offset`.
///
/// Zones missing from the table fall back to `UTC{offset}` verbatim.
pub fn zone_abbreviation(zone: &str, offset: &str) -> String {
    match ZONE_ABBREVIATIONS.iter().find(|(name, _, _)| *name == zone) {
        Some((_, standard, daylight)) => {
            if DAYLIGHT_OFFSETS.contains(&offset) {
                daylight.to_string()
            } else {
                standard.to_string()
            }
        }
        None => format!("UTC{}", offset),
    }
}
