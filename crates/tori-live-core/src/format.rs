//! Display formatting for video cards.
//!
//! Pure helpers that turn raw record fields into the strings shown on a card:
//! compact view counts, relative upload dates, and watch URLs.

use crate::clock::Clock;
use chrono::NaiveDate;

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Format a view count compactly (e.g., "500 views", "1.5K views", "1.5M views").
///
/// Thousands and millions are rounded half-up to one decimal place.
///
/// # Examples
///
/// ```
/// use tori_live_core::format::format_view_count;
///
/// assert_eq!(format_view_count(500), "500 views");
/// assert_eq!(format_view_count(15000), "15.0K views");
/// assert_eq!(format_view_count(1500000), "1.5M views");
/// ```
pub fn format_view_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{}M views", one_decimal(count, 1_000_000))
    } else if count >= 1_000 {
        format!("{}K views", one_decimal(count, 1_000))
    } else {
        format!("{} views", count)
    }
}

/// `value / unit` rounded half-up to one decimal, in integer arithmetic.
fn one_decimal(value: u64, unit: u64) -> String {
    let tenths = (u128::from(value) * 10 + u128::from(unit) / 2) / u128::from(unit);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Parse a fixed-width `YYYY-MM-DD` calendar date.
pub fn parse_upload_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    let fixed_width = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !fixed_width {
        return None;
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Describe how long before `reference` the `upload` day was.
///
/// Uploads dated after `reference` are reported as "Today".
pub fn relative_upload_date(upload: NaiveDate, reference: NaiveDate) -> String {
    let days = reference.signed_duration_since(upload).num_days();

    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => units_ago(days / 7, "week"),
        30..=364 => units_ago(days / 30, "month"),
        _ => units_ago(days / 365, "year"),
    }
}

fn units_ago(count: i64, unit: &str) -> String {
    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}

/// Format an upload date relative to `reference`, or to the clock's today.
///
/// Returns `None` when either date is not a valid `YYYY-MM-DD` string.
///
/// # Examples
///
/// ```
/// use tori_live_core::clock::SystemClock;
/// use tori_live_core::format::format_upload_date;
///
/// let formatted = format_upload_date("2025-02-20", Some("2025-03-09"), &SystemClock);
/// assert_eq!(formatted.as_deref(), Some("2 weeks ago"));
/// ```
pub fn format_upload_date(
    upload_date: &str,
    reference_date: Option<&str>,
    clock: &dyn Clock,
) -> Option<String> {
    let upload = parse_upload_date(upload_date)?;
    let reference = match reference_date {
        Some(date) => parse_upload_date(date)?,
        None => clock.today(),
    };

    Some(relative_upload_date(upload, reference))
}

/// Build the outbound watch URL for a video id.
pub fn video_url(id: &str) -> String {
    format!("{}{}", WATCH_URL_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, SystemClock};

    const REFERENCE_DATE: &str = "2025-03-09";

    fn days_before_reference(days: i64) -> String {
        let reference = parse_upload_date(REFERENCE_DATE).unwrap();
        (reference - chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn format_at_reference(upload: &str) -> String {
        format_upload_date(upload, Some(REFERENCE_DATE), &SystemClock).unwrap()
    }

    #[test]
    fn test_format_view_count_below_thousand() {
        assert_eq!(format_view_count(0), "0 views");
        assert_eq!(format_view_count(1), "1 views");
        assert_eq!(format_view_count(500), "500 views");
        assert_eq!(format_view_count(999), "999 views");
    }

    #[test]
    fn test_format_view_count_never_has_decimal_below_thousand() {
        for n in 0..1000u64 {
            assert_eq!(format_view_count(n), format!("{} views", n));
        }
    }

    #[test]
    fn test_format_view_count_thousands() {
        assert_eq!(format_view_count(1000), "1.0K views");
        assert_eq!(format_view_count(1500), "1.5K views");
        assert_eq!(format_view_count(15000), "15.0K views");
        assert_eq!(format_view_count(15437), "15.4K views");
    }

    #[test]
    fn test_format_view_count_millions() {
        assert_eq!(format_view_count(1_000_000), "1.0M views");
        assert_eq!(format_view_count(1_500_000), "1.5M views");
        assert_eq!(format_view_count(15_000_000), "15.0M views");
    }

    #[test]
    fn test_format_view_count_rounds_half_up() {
        assert_eq!(format_view_count(1250), "1.3K views");
        assert_eq!(format_view_count(1249), "1.2K views");
        assert_eq!(format_view_count(2_450_000), "2.5M views");
        assert_eq!(format_view_count(999_950), "1000.0K views");
    }

    #[test]
    fn test_format_view_count_extreme() {
        assert_eq!(format_view_count(u64::MAX), "18446744073709.6M views");
    }

    #[test]
    fn test_format_upload_date_today() {
        assert_eq!(format_at_reference("2025-03-09"), "Today");
    }

    #[test]
    fn test_format_upload_date_yesterday() {
        assert_eq!(format_at_reference("2025-03-08"), "Yesterday");
    }

    #[test]
    fn test_format_upload_date_days() {
        assert_eq!(format_at_reference("2025-03-05"), "4 days ago");
        assert_eq!(format_at_reference(&days_before_reference(2)), "2 days ago");
        assert_eq!(format_at_reference(&days_before_reference(6)), "6 days ago");
    }

    #[test]
    fn test_format_upload_date_weeks() {
        assert_eq!(format_at_reference("2025-02-20"), "2 weeks ago");
        assert_eq!(format_at_reference(&days_before_reference(7)), "1 week ago");
        assert_eq!(format_at_reference(&days_before_reference(13)), "1 week ago");
        assert_eq!(format_at_reference(&days_before_reference(14)), "2 weeks ago");
        assert_eq!(format_at_reference(&days_before_reference(29)), "4 weeks ago");
    }

    #[test]
    fn test_format_upload_date_months() {
        assert_eq!(format_at_reference("2024-12-09"), "3 months ago");
        assert_eq!(format_at_reference(&days_before_reference(30)), "1 month ago");
        assert_eq!(format_at_reference(&days_before_reference(59)), "1 month ago");
        assert_eq!(format_at_reference(&days_before_reference(364)), "12 months ago");
    }

    #[test]
    fn test_format_upload_date_years() {
        assert_eq!(format_at_reference("2023-03-09"), "2 years ago");
        assert_eq!(format_at_reference(&days_before_reference(365)), "1 year ago");
        assert_eq!(format_at_reference(&days_before_reference(729)), "1 year ago");
    }

    #[test]
    fn test_format_upload_date_singular_only_for_one() {
        for days in 7..30 {
            let formatted = format_at_reference(&days_before_reference(days));
            if days / 7 == 1 {
                assert_eq!(formatted, "1 week ago");
            } else {
                assert!(formatted.ends_with("weeks ago"), "{}", formatted);
            }
        }
    }

    #[test]
    fn test_format_upload_date_future_is_today() {
        assert_eq!(format_at_reference("2025-03-10"), "Today");
        assert_eq!(format_at_reference("2026-01-01"), "Today");
    }

    #[test]
    fn test_format_upload_date_uses_clock_when_no_reference() {
        let clock = FixedClock::on_date(parse_upload_date(REFERENCE_DATE).unwrap());
        assert_eq!(
            format_upload_date("2025-03-08", None, &clock).as_deref(),
            Some("Yesterday")
        );
    }

    #[test]
    fn test_format_upload_date_invalid_input() {
        assert_eq!(format_upload_date("not-a-date", Some(REFERENCE_DATE), &SystemClock), None);
        assert_eq!(format_upload_date("2025-03-09", Some("2025/03/09"), &SystemClock), None);
    }

    #[test]
    fn test_format_upload_date_is_idempotent() {
        let first = format_at_reference("2024-12-09");
        let second = format_at_reference("2024-12-09");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_upload_date() {
        assert_eq!(
            parse_upload_date("2021-09-16"),
            NaiveDate::from_ymd_opt(2021, 9, 16)
        );
        assert_eq!(parse_upload_date("2021-9-16"), None);
        assert_eq!(parse_upload_date("2021-09-16T00:00:00"), None);
        assert_eq!(parse_upload_date("2021-02-30"), None);
        assert_eq!(parse_upload_date(""), None);
    }

    #[test]
    fn test_video_url() {
        assert_eq!(video_url("abc123"), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(
            video_url("B4-L2nfGcuE"),
            "https://www.youtube.com/watch?v=B4-L2nfGcuE"
        );
    }
}
