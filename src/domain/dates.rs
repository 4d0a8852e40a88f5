//! Calendar date parsing, formatting and range filtering.
//!
//! # Responsibilities
//! - Interpret user-supplied date strings as calendar days (best effort)
//! - Render days in the `Ddd Mon DD YYYY` display format
//! - Apply optional inclusive day-granularity bounds
//!
//! # Design Decisions
//! - Parsing never fails loudly: unrecognized input yields `None`
//! - Date-times are reduced to the calendar day in their own offset
//! - A missing or unparseable bound places no restriction on that side

use chrono::{DateTime, NaiveDate, NaiveDateTime, Weekday};

/// Display format, e.g. `Mon Jan 02 2006`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Rendered in place of a stored date that is not a calendar date.
pub const INVALID_DATE: &str = "Invalid date";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Interprets `input` as a calendar day.
///
/// Accepts ISO dates (`2024-03-05`, `2024-03`, `2024`), RFC 3339 and naive
/// ISO date-times, `MM/DD/YYYY`, and month-name forms with an optional
/// leading weekday (`Tue Mar 05 2024`, `March 5, 2024`). The weekday is not
/// checked against the date. Returns `None` for anything else.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(day) = parse_without_weekday(s) {
        return Some(day);
    }

    // "Tue Mar 05 2024": drop a single leading weekday and retry once.
    let (first, rest) = s.split_once(char::is_whitespace)?;
    if first.trim_end_matches(',').parse::<Weekday>().is_ok() {
        return parse_without_weekday(rest.trim_start());
    }

    None
}

fn parse_without_weekday(s: &str) -> Option<NaiveDate> {
    if let Some(day) = parse_iso_partial(s) {
        return Some(day);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Year-only (`YYYY`) and year-month (`YYYY-MM`) forms resolve to the first
/// day of the period.
fn parse_iso_partial(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let all_digits = |b: &[u8]| b.iter().all(u8::is_ascii_digit);
    match bytes.len() {
        4 if all_digits(bytes) => {
            let year = s.parse().ok()?;
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
        7 if bytes[4] == b'-' && all_digits(&bytes[..4]) && all_digits(&bytes[5..]) => {
            let year = s[..4].parse().ok()?;
            let month = s[5..].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        _ => None,
    }
}

/// Formats a day as `Ddd Mon DD YYYY`.
pub fn format_display_date(day: NaiveDate) -> String {
    day.format(DISPLAY_FORMAT).to_string()
}

/// Inclusive, optionally open-ended range of calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range from raw bound strings.
    /// Bounds that are absent or fail to parse are left open.
    pub fn from_bounds(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_calendar_date),
            to: to.and_then(parse_calendar_date),
        }
    }

    /// Returns true when neither side restricts the range.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Checks whether `day` falls inside the range.
    ///
    /// An unknown day (`None`) only matches an unbounded range.
    pub fn contains(&self, day: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(day) = day else {
            return false;
        };
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }
}
