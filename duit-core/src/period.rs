//! Relative period phrases ("hari ini", "bulan ini", ...) resolved to
//! inclusive calendar-date ranges, plus the local clock they are resolved
//! against.

use anyhow::Result;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Report periods understood in chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
}

/// Checked in order; the first period with a matching phrase wins.
const PERIOD_PHRASES: &[(Period, &[&str])] = &[
    (Period::Today, &["hari ini", "today"]),
    (Period::Yesterday, &["kemarin", "yesterday"]),
    (Period::ThisWeek, &["minggu ini", "this week"]),
    (Period::ThisMonth, &["bulan ini", "this month"]),
];

impl Period {
    /// Detect the period named in `phrase`. Unrecognized text means this month.
    pub fn detect(phrase: &str) -> Self {
        let text = phrase.to_lowercase();
        PERIOD_PHRASES
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| text.contains(p)))
            .map(|(period, _)| *period)
            .unwrap_or(Period::ThisMonth)
    }

    /// Header label used in Indonesian reports
    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Hari Ini",
            Period::Yesterday => "Kemarin",
            Period::ThisWeek => "Minggu Ini",
            Period::ThisMonth => "Bulan Ini",
        }
    }

    /// Concrete range relative to `today`
    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            Period::Today => DateRange::single_day(today),
            Period::Yesterday => DateRange::single_day(today.pred_opt().unwrap_or(today)),
            Period::ThisWeek => {
                // Weeks start on Sunday.
                let back = u64::from(today.weekday().num_days_from_sunday());
                let sunday = today.checked_sub_days(Days::new(back)).unwrap_or(today);
                DateRange { start: sunday, end: today }
            }
            Period::ThisMonth => DateRange {
                start: today.with_day(1).unwrap_or(today),
                end: today,
            },
        }
    }
}

/// Resolve a free-form period phrase against a snapshot of today's date
pub fn resolve_range(phrase: &str, today: NaiveDate) -> DateRange {
    Period::detect(phrase).range(today)
}

/// Parse an IANA timezone name like "Asia/Jakarta"
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

/// Calendar day of `now` in timezone `tz`
pub fn local_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Today's calendar day in timezone `tz`
pub fn local_today(tz: Tz) -> NaiveDate {
    local_date(Utc::now(), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_this_month_starts_on_first() {
        let today = d(2026, 10, 18);
        let range = resolve_range("bulan ini", today);
        assert_eq!(range.start(), d(2026, 10, 1));
        assert_eq!(range.end(), today);
    }

    #[test]
    fn test_this_month_on_first_day() {
        let today = d(2026, 3, 1);
        let range = resolve_range("this month", today);
        assert_eq!(range.start(), today);
        assert_eq!(range.end(), today);
    }

    #[test]
    fn test_today_and_yesterday() {
        let today = d(2026, 10, 18);
        assert_eq!(resolve_range("hari ini", today), DateRange::single_day(today));
        assert_eq!(resolve_range("Kemarin", today), DateRange::single_day(d(2026, 10, 17)));
        // Yesterday across a year boundary
        assert_eq!(
            resolve_range("yesterday", d(2026, 1, 1)),
            DateRange::single_day(d(2025, 12, 31))
        );
    }

    #[test]
    fn test_this_week_starts_on_sunday() {
        // 2026-10-18 is a Sunday
        let sunday = d(2026, 10, 18);
        assert_eq!(resolve_range("minggu ini", sunday).start(), sunday);

        let wednesday = d(2026, 10, 21);
        let range = resolve_range("this week", wednesday);
        assert_eq!(range.start(), sunday);
        assert_eq!(range.end(), wednesday);

        // Saturday reaches back six days, across a month boundary
        let range = resolve_range("minggu ini", d(2026, 10, 3));
        assert_eq!(range.start(), d(2026, 9, 27));
    }

    #[test]
    fn test_unrecognized_defaults_to_this_month() {
        let today = d(2026, 10, 18);
        assert_eq!(resolve_range("tahun lalu", today), resolve_range("bulan ini", today));
        assert_eq!(resolve_range("", today).start(), d(2026, 10, 1));
    }

    #[test]
    fn test_first_phrase_wins() {
        assert_eq!(Period::detect("hari ini atau kemarin"), Period::Today);
        assert_eq!(Period::detect("laporan KEMARIN dan bulan ini"), Period::Yesterday);
        assert_eq!(Period::detect("minggu ini").label(), "Minggu Ini");
    }

    #[test]
    fn test_range_is_ordered() {
        assert!(DateRange::new(d(2026, 10, 2), d(2026, 10, 1)).is_none());
        let r = DateRange::new(d(2026, 10, 1), d(2026, 10, 31)).unwrap();
        assert!(r.contains(d(2026, 10, 31)));
        assert!(!r.contains(d(2026, 11, 1)));
    }

    #[test]
    fn test_local_date_uses_timezone() {
        // 20:00 UTC is already the next day in Jakarta (UTC+7)
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
        let tz = parse_timezone("Asia/Jakarta").unwrap();
        assert_eq!(local_date(now, tz), d(2026, 10, 19));
        assert!(parse_timezone("Mars/Olympus").is_err());
    }
}
