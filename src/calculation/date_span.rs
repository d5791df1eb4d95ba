//! Calendar-day arithmetic for leave spans.
//!
//! All spans are inclusive of both ends and counted in whole calendar days
//! on [`NaiveDate`], so daylight-saving transitions never shift a count.

use chrono::{Days, NaiveDate};

/// Date format used by the request form (`YYYY-MM-DD`).
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a form date, treating blank or malformed text as absent.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::parse_form_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_form_date("2024-01-01"), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(parse_form_date(" 2024-02-29 "), NaiveDate::from_ymd_opt(2024, 2, 29));
/// assert_eq!(parse_form_date(""), None);
/// assert_eq!(parse_form_date("2023-02-29"), None);
/// ```
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT).ok()
}

/// Counts the days from `from` to `to`, both inclusive.
///
/// Returns zero when `to` is before `from`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::inclusive_day_count;
/// use chrono::NaiveDate;
///
/// let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let jan_10 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
///
/// assert_eq!(inclusive_day_count(jan_1, jan_10), 10);
/// assert_eq!(inclusive_day_count(jan_1, jan_1), 1);
/// assert_eq!(inclusive_day_count(jan_10, jan_1), 0);
/// ```
pub fn inclusive_day_count(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let span = days_between(from, to) + 1;
    u32::try_from(span).unwrap_or(u32::MAX)
}

/// Returns the last day of a span of `days` days starting on `from`.
///
/// `None` when `days` is zero (an empty span has no last day) or the result
/// falls outside the supported calendar.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::inclusive_end_date;
/// use chrono::NaiveDate;
///
/// let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(inclusive_end_date(jan_1, 105), NaiveDate::from_ymd_opt(2024, 4, 14));
/// assert_eq!(inclusive_end_date(jan_1, 1), Some(jan_1));
/// assert_eq!(inclusive_end_date(jan_1, 0), None);
/// ```
pub fn inclusive_end_date(from: NaiveDate, days: u32) -> Option<NaiveDate> {
    if days == 0 {
        return None;
    }
    from.checked_add_days(Days::new(u64::from(days - 1)))
}

/// Signed number of whole days from `earlier` to `later`.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Adds whole calendar days to a date, saturating at the calendar's end.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
