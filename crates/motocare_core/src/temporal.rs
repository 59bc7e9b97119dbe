//! Spanish temporal expression parsing and date-range resolution.
//!
//! # Responsibility
//! - Extract absolute calendar dates from Spanish free text.
//! - Resolve symbolic range labels (hoy, esta semana, ...) into half-open
//!   date ranges anchored on a caller-provided "today".
//! - Format dates in the fixed es-CO output locale.
//!
//! # Invariants
//! - Parsing never fails: an unrecognized expression is `None`, not an error.
//! - Every produced [`DateRange`] satisfies `start < end`.
//! - All functions are pure: the reference date is always an explicit input.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Spanish month names, January first. Index with `month0()`.
pub const ES_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish day names, Sunday first (matches `num_days_from_sunday`).
pub const ES_DAYS: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

static HOY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bhoy\b").expect("valid hoy regex"));
static PASADO_MANANA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpasado\s+mañana\b").expect("valid pasado mañana regex"));
static MANANA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bmañana\b").expect("valid mañana regex"));
static NUMERIC_DMY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b").expect("valid d/m/y regex"));
static NUMERIC_YMD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b").expect("valid y/m/d regex"));
static DAY_OF_MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    let months = ES_MONTHS.join("|");
    Regex::new(&format!(
        r"\b(\d{{1,2}})\s+de\s+({months})(?:\s+de\s+(\d{{4}}))?\b"
    ))
    .expect("valid day-of-month regex")
});

/// Half-open calendar interval: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range; callers must uphold `start < end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start < end, "date range must be non-empty");
        Self { start, end }
    }

    /// Returns whether `date` falls inside the half-open interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of days covered by the range.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Symbolic range labels understood by the schedule queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeLabel {
    Today,
    Tomorrow,
    ThisWeek,
    ThisMonth,
    NextMonth,
}

/// Resolves a symbolic label into a half-open range anchored on `today`.
///
/// `ThisWeek` starts on Monday (ISO week) and spans 7 days; the Sunday case
/// maps back 6 days instead of forward 1. Month ranges use first-of-month
/// boundaries computed from `today`, never string parsing.
pub fn date_range(label: RangeLabel, today: NaiveDate) -> DateRange {
    match label {
        RangeLabel::Today => DateRange::new(today, today + Duration::days(1)),
        RangeLabel::Tomorrow => {
            let start = today + Duration::days(1);
            DateRange::new(start, start + Duration::days(1))
        }
        RangeLabel::ThisWeek => {
            let day = i64::from(today.weekday().num_days_from_sunday());
            let diff_to_monday = if day == 0 { -6 } else { 1 - day };
            let start = today + Duration::days(diff_to_monday);
            DateRange::new(start, start + Duration::days(7))
        }
        RangeLabel::ThisMonth => {
            let start = first_of_month(today);
            DateRange::new(start, first_of_next_month(start))
        }
        RangeLabel::NextMonth => {
            let start = first_of_next_month(today);
            DateRange::new(start, first_of_next_month(start))
        }
    }
}

/// Extracts one calendar date from Spanish free text.
///
/// Literal forms are tried in fixed priority order, first match wins:
/// 1. relative words (`hoy`, `pasado mañana`, `mañana`);
/// 2. weekday names, resolved to the next occurrence on/after `today`;
/// 3. `DD/MM/YYYY` or `DD-MM-YYYY`;
/// 4. `YYYY/MM/DD` or `YYYY-MM-DD`;
/// 5. `"D de <mes>[ de YYYY]"`, year defaulting to the current year.
///
/// Returns `None` when nothing matches; callers treat that as "no date
/// found", never as an error. A numeric match naming an impossible calendar
/// day (e.g. `31/02/2025`) falls through to the next form.
pub fn parse_date_text(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let t = text.to_lowercase();
    let t = t.trim();

    if HOY_RE.is_match(t) {
        return Some(today);
    }
    // The two-word form must win over the bare word it contains.
    if PASADO_MANANA_RE.is_match(t) {
        return Some(today + Duration::days(2));
    }
    if MANANA_RE.is_match(t) {
        return Some(today + Duration::days(1));
    }

    let today_dow = i64::from(today.weekday().num_days_from_sunday());
    for (index, day_name) in ES_DAYS.iter().enumerate() {
        if t.contains(day_name) {
            let diff = (index as i64 - today_dow).rem_euclid(7);
            return Some(today + Duration::days(diff));
        }
    }

    if let Some(caps) = NUMERIC_DMY_RE.captures(t) {
        if let Some(date) = ymd_opt(&caps[3], &caps[2], &caps[1]) {
            return Some(date);
        }
    }

    if let Some(caps) = NUMERIC_YMD_RE.captures(t) {
        if let Some(date) = ymd_opt(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }

    if let Some(caps) = DAY_OF_MONTH_RE.captures(t) {
        let day: u32 = caps[1].parse().ok()?;
        let month = ES_MONTHS.iter().position(|m| *m == &caps[2])? as u32 + 1;
        let year = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => today.year(),
        };
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

/// Parses a stored date value (snapshot/journal field), not free text.
///
/// Accepts ISO-8601 datetimes, plain `YYYY-MM-DD` dates, and legacy
/// `DD/MM/YYYY` strings embedded in the value.
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    parse_loose_datetime(value).map(|dt| dt.date())
}

/// Datetime variant of [`parse_loose_date`]; date-only inputs map to
/// midnight so calendar ordering stays stable.
pub fn parse_loose_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        // Keep the wall-clock reading of the stored offset; snapshots are
        // written and read on the same device.
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Some(caps) = NUMERIC_DMY_RE.captures(trimmed) {
        if let Some(date) = ymd_opt(&caps[3], &caps[2], &caps[1]) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Formats a date in the fixed Spanish long form: `1 de junio de 2025`.
pub fn format_date_es(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        ES_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Short es-CO numeric form: `01/06/2025`.
pub fn short_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Short form with wall-clock time: `01/06/2025 14:05`.
pub fn short_datetime(datetime: NaiveDateTime) -> String {
    format!(
        "{} {}",
        short_date(datetime.date()),
        datetime.format("%H:%M")
    )
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is always valid")
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

fn ymd_opt(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pasado_manana_is_not_shadowed_by_manana() {
        let today = date(2025, 3, 10);
        assert_eq!(
            parse_date_text("pasado mañana", today),
            Some(date(2025, 3, 12))
        );
        assert_eq!(parse_date_text("mañana", today), Some(date(2025, 3, 11)));
    }

    #[test]
    fn weekday_resolves_to_zero_days_when_today_matches() {
        // 2025-03-10 is a Monday.
        let today = date(2025, 3, 10);
        assert_eq!(parse_date_text("el lunes", today), Some(today));
        assert_eq!(
            parse_date_text("el domingo", today),
            Some(date(2025, 3, 16))
        );
    }

    #[test]
    fn this_week_starts_monday_even_on_sunday() {
        // 2025-03-16 is a Sunday; the week it belongs to started the 10th.
        let range = date_range(RangeLabel::ThisWeek, date(2025, 3, 16));
        assert_eq!(range.start, date(2025, 3, 10));
        assert_eq!(range.end, date(2025, 3, 17));

        // A mid-week anchor lands on the same Monday.
        let midweek = date_range(RangeLabel::ThisWeek, date(2025, 3, 12));
        assert_eq!(midweek.start, date(2025, 3, 10));
        assert_eq!(midweek.len_days(), 7);
    }

    #[test]
    fn invalid_calendar_day_falls_through() {
        let today = date(2025, 3, 10);
        assert_eq!(parse_date_text("31/02/2025", today), None);
    }

    #[test]
    fn loose_parser_reads_iso_and_legacy_forms() {
        assert_eq!(parse_loose_date("2025-06-01"), Some(date(2025, 6, 1)));
        assert_eq!(
            parse_loose_date("2025-06-01T10:30:00.000Z"),
            Some(date(2025, 6, 1))
        );
        assert_eq!(parse_loose_date("vence el 01/06/2025"), Some(date(2025, 6, 1)));
        assert_eq!(parse_loose_date("sin fecha"), None);
    }

    #[test]
    fn next_month_rolls_over_december() {
        let range = date_range(RangeLabel::NextMonth, date(2025, 12, 15));
        assert_eq!(range.start, date(2026, 1, 1));
        assert_eq!(range.end, date(2026, 2, 1));
    }
}
