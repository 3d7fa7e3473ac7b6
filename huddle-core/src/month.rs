//! Calendar months and week conventions.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;

use crate::constants::{MAX_YEAR, MIN_YEAR};
use crate::error::HuddleError;

/// A single month of a single year, e.g. November 2026.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `None` unless `month` is 1..=12 and `year` is within MIN_YEAR..=MAX_YEAR.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let valid = (1..=12).contains(&month) && (MIN_YEAR..=MAX_YEAR).contains(&year);
        valid.then_some(YearMonth { year, month })
    }

    /// The month `date` falls in, or `None` outside the supported years.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        YearMonth::new(date.year(), date.month())
    }

    /// Like [`YearMonth::from_date`], but pinned to the nearest supported month.
    pub fn nearest(date: NaiveDate) -> Self {
        YearMonth::from_date(date).unwrap_or(if date.year() < MIN_YEAR {
            YearMonth { year: MIN_YEAR, month: 1 }
        } else {
            YearMonth { year: MAX_YEAR, month: 12 }
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("YearMonth is validated on construction")
    }

    pub fn last_day(&self) -> NaiveDate {
        (28..=31)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(self.year, self.month, day))
            .expect("every month has at least 28 days")
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month. Stays put at the end of the supported range.
    pub fn next(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        YearMonth::new(year, month).unwrap_or(*self)
    }

    /// The preceding month. Stays put at the start of the supported range.
    pub fn previous(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        YearMonth::new(year, month).unwrap_or(*self)
    }

    /// Human-readable label, e.g. "November 2026".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = HuddleError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HuddleError::InvalidMonth(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

/// First day of the week in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Days between the start of `date`'s week and `date` (0..=6).
    pub fn days_into_week(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    /// Short weekday headers in grid order.
    pub fn headers(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    // --- YearMonth ---

    #[test]
    fn rejects_out_of_range_months() {
        assert!(YearMonth::new(2026, 0).is_none());
        assert!(YearMonth::new(2026, 13).is_none());
        assert!(YearMonth::new(0, 5).is_none());
        assert!(YearMonth::new(10_000, 1).is_none());
    }

    #[test]
    fn first_and_last_day() {
        assert_eq!(ym(2026, 11).first_day(), NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
        assert_eq!(ym(2026, 11).last_day(), NaiveDate::from_ymd_opt(2026, 11, 30).unwrap());
        assert_eq!(ym(2026, 2).last_day(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(ym(2024, 2).last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(ym(2026, 12).last_day(), NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn navigation_rolls_over_years() {
        assert_eq!(ym(2026, 12).next(), ym(2027, 1));
        assert_eq!(ym(2027, 1).previous(), ym(2026, 12));
        assert_eq!(ym(2026, 6).next(), ym(2026, 7));
    }

    #[test]
    fn navigation_stops_at_range_edges() {
        assert_eq!(ym(MAX_YEAR, 12).next(), ym(MAX_YEAR, 12));
        assert_eq!(ym(MIN_YEAR, 1).previous(), ym(MIN_YEAR, 1));
    }

    #[test]
    fn from_date_refuses_unsupported_years() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(YearMonth::from_date(date(2026, 10, 18)), Some(ym(2026, 10)));
        assert_eq!(YearMonth::from_date(date(MIN_YEAR, 1, 1)), Some(ym(MIN_YEAR, 1)));
        assert_eq!(YearMonth::from_date(date(MAX_YEAR, 12, 31)), Some(ym(MAX_YEAR, 12)));
        assert_eq!(YearMonth::from_date(date(0, 12, 31)), None);
        assert_eq!(YearMonth::from_date(NaiveDate::MAX), None);
        assert_eq!(YearMonth::from_date(NaiveDate::MIN), None);
    }

    #[test]
    fn nearest_pins_to_range_edges() {
        assert_eq!(YearMonth::nearest(NaiveDate::MAX), ym(MAX_YEAR, 12));
        assert_eq!(YearMonth::nearest(NaiveDate::MIN), ym(MIN_YEAR, 1));
        assert_eq!(
            YearMonth::nearest(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()),
            ym(2026, 3)
        );
    }

    #[test]
    fn contains_ignores_other_years() {
        let october = ym(2026, 10);
        assert!(october.contains(NaiveDate::from_ymd_opt(2026, 10, 31).unwrap()));
        assert!(!october.contains(NaiveDate::from_ymd_opt(2027, 10, 1).unwrap()));
        assert!(!ym(MAX_YEAR, 12).contains(NaiveDate::MAX));
    }

    #[test]
    fn parse_and_display() {
        let month: YearMonth = "2026-11".parse().unwrap();
        assert_eq!(month, ym(2026, 11));
        assert_eq!(month.to_string(), "2026-11");
        assert_eq!(month.label(), "November 2026");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2026".parse::<YearMonth>().is_err());
        assert!("2026-13".parse::<YearMonth>().is_err());
        assert!("nov-2026".parse::<YearMonth>().is_err());
    }

    // --- WeekStart ---

    #[test]
    fn days_into_week() {
        // 2026-10-18 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(WeekStart::Sunday.days_into_week(sunday), 0);
        assert_eq!(WeekStart::Monday.days_into_week(sunday), 6);
    }
}
