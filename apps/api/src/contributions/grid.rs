use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::contributions::models::{CalendarGrid, ContributionDay};

pub const WEEKS: usize = 53;
pub const DAYS_PER_WEEK: usize = 7;

/// Lays the year's buckets onto a 53×7 Sunday-first grid.
///
/// Column 0 starts on the Sunday on or before January 1. In-year dates
/// without a bucket get a zero-count day; dates from the neighbouring years
/// are `None`. A leap year starting on a Saturday runs one day past the last
/// column, and that day is not shown.
pub fn build_calendar_grid(days: &[ContributionDay], year: i32) -> CalendarGrid {
    let by_date: HashMap<NaiveDate, &ContributionDay> = days.iter().map(|d| (d.date, d)).collect();

    let Some(start) = grid_start(year) else {
        return CalendarGrid {
            year,
            weeks: vec![vec![None; DAYS_PER_WEEK]; WEEKS],
        };
    };

    let mut cells = start.iter_days().take(WEEKS * DAYS_PER_WEEK).map(|date| {
        (date.year() == year).then(|| {
            by_date
                .get(&date)
                .map(|&day| day.clone())
                .unwrap_or_else(|| ContributionDay::empty(date))
        })
    });

    let weeks = (0..WEEKS)
        .map(|_| cells.by_ref().take(DAYS_PER_WEEK).collect::<Vec<_>>())
        .collect();

    CalendarGrid { year, weeks }
}

/// The Sunday on or before January 1 of `year`.
pub fn grid_start(year: i32) -> Option<NaiveDate> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = jan_first.weekday().num_days_from_sunday();
    jan_first.checked_sub_signed(Duration::days(i64::from(offset)))
}
