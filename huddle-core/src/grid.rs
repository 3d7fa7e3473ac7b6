//! Month grids for calendar views.

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::constants::DAYS_PER_WEEK;
use crate::month::{WeekStart, YearMonth};

/// One square in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// True for leading/trailing days that belong to a neighbouring month
    pub outside: bool,
}

/// Whole weeks covering one month, padded with days from the months around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub week_start: WeekStart,
    pub weeks: Vec<[DayCell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    /// Build the grid for `month`.
    ///
    /// The first row starts on the last `week_start` day on or before the 1st,
    /// the last row ends on the last day of its week on or after the month's
    /// final day.
    pub fn build(month: YearMonth, week_start: WeekStart) -> Self {
        let first = month.first_day();
        let last = month.last_day();

        let grid_start = first - Duration::days(i64::from(week_start.days_into_week(first)));
        let grid_end = last + Duration::days(6 - i64::from(week_start.days_into_week(last)));

        let mut weeks = Vec::new();
        let mut row_start = grid_start;
        while row_start <= grid_end {
            let week: [DayCell; DAYS_PER_WEEK] = std::array::from_fn(|offset| {
                let date = row_start + Duration::days(offset as i64);
                DayCell {
                    date,
                    outside: !month.contains(date),
                }
            });
            weeks.push(week);
            row_start += Duration::days(DAYS_PER_WEEK as i64);
        }

        debug!(
            "Built grid for {} ({} weeks, {} to {})",
            month,
            weeks.len(),
            grid_start,
            grid_end
        );

        MonthGrid {
            month,
            week_start,
            weeks,
        }
    }

    /// All cells in reading order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.cell(date).is_some()
    }
}
