use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::contributions::models::{ContributionDay, ContributionSummary};

/// All calendar days of `year`, Jan 1 through Dec 31.
/// Empty if `year` is outside the range chrono can represent.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |d| d.year() == year)
}

/// Computes totals and streaks for `year`.
///
/// Streaks are measured over every calendar day of the year, so a day with no
/// bucket breaks a run exactly like a zero-count bucket. `current_streak` is
/// the length of the run that ends on `today`; it is 0 when `today` has no
/// contribution or lies in another year.
pub fn summarize(days: &[ContributionDay], year: i32, today: NaiveDate) -> ContributionSummary {
    let total: u32 = days.iter().map(|d| d.count).sum();
    let max_day_count = days.iter().map(|d| d.count).max().unwrap_or(0);

    let counts: HashMap<NaiveDate, u32> = days.iter().map(|d| (d.date, d.count)).collect();

    let mut max_streak: u32 = 0;
    let mut current_streak: u32 = 0;
    let mut running: u32 = 0;

    for date in days_of_year(year) {
        if counts.get(&date).copied().unwrap_or(0) > 0 {
            running += 1;
            max_streak = max_streak.max(running);
        } else {
            running = 0;
        }

        if date == today {
            current_streak = running;
        }
    }

    ContributionSummary {
        total,
        max_streak,
        current_streak,
        max_day_count,
        year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributions::aggregate::calculate_daily_contributions;
    use crate::contributions::extract::tests::{at, record};
    use crate::contributions::models::{ActivityKind, ContributionActivity};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(date: NaiveDate, count: u32) -> ContributionDay {
        ContributionDay {
            date,
            count,
            activities: (0..count)
                .map(|i| ContributionActivity {
                    kind: ActivityKind::Publish,
                    record_id: i as i32,
                    title: String::new(),
                })
                .collect(),
        }
    }

    /// Five posts, each significantly edited on its own day, June 1–5.
    fn june_run() -> Vec<ContributionDay> {
        let records: Vec<_> = (1..=5)
            .map(|d| record(d as i32, None, at(2024, 5, 1, 0, 0), at(2024, 6, d, 12, 0)))
            .collect();
        calculate_daily_contributions(&records, 2024)
    }

    #[test]
    fn test_days_of_year_lengths() {
        assert_eq!(days_of_year(2023).count(), 365);
        assert_eq!(days_of_year(2024).count(), 366);
        assert_eq!(days_of_year(2024).last(), Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_empty_year_is_all_zero() {
        let summary = summarize(&[], 2024, date(2024, 7, 1));
        assert_eq!(
            summary,
            ContributionSummary {
                total: 0,
                max_streak: 0,
                current_streak: 0,
                max_day_count: 0,
                year: 2024,
            }
        );
    }

    #[test]
    fn test_isolated_days_have_streak_one() {
        let r = record(1, Some(at(2024, 3, 1, 9, 0)), at(2024, 3, 1, 9, 0), at(2024, 3, 5, 14, 0));
        let days = calculate_daily_contributions(&[r], 2024);
        let summary = summarize(&days, 2024, date(2024, 8, 1));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.max_streak, 1);
        assert_eq!(summary.max_day_count, 1);
        assert_eq!(summary.current_streak, 0);
    }

    #[test]
    fn test_run_ending_today_is_current() {
        let summary = summarize(&june_run(), 2024, date(2024, 6, 5));
        assert_eq!(summary.max_streak, 5);
        assert_eq!(summary.current_streak, 5);
    }

    #[test]
    fn test_quiet_today_resets_current() {
        let summary = summarize(&june_run(), 2024, date(2024, 6, 6));
        assert_eq!(summary.max_streak, 5);
        assert_eq!(summary.current_streak, 0);
    }

    #[test]
    fn test_mid_run_today_counts_up_to_today() {
        let summary = summarize(&june_run(), 2024, date(2024, 6, 3));
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.max_streak, 5);
    }

    #[test]
    fn test_other_year_has_no_current_streak() {
        let days = june_run();
        assert_eq!(summarize(&days, 2024, date(2025, 1, 1)).current_streak, 0);
        assert_eq!(summarize(&days, 2024, date(2023, 6, 5)).current_streak, 0);
    }

    #[test]
    fn test_longest_of_several_runs() {
        let days = vec![
            day(date(2024, 1, 1), 1),
            day(date(2024, 1, 2), 3),
            day(date(2024, 1, 4), 1),
            day(date(2024, 1, 5), 1),
            day(date(2024, 1, 6), 2),
            day(date(2024, 1, 7), 1),
            day(date(2024, 12, 31), 4),
        ];
        let summary = summarize(&days, 2024, date(2024, 12, 31));
        assert_eq!(summary.total, 13);
        assert_eq!(summary.max_day_count, 4);
        assert_eq!(summary.max_streak, 4);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn test_zero_count_bucket_breaks_run() {
        let days = vec![
            day(date(2024, 2, 1), 1),
            day(date(2024, 2, 2), 0),
            day(date(2024, 2, 3), 1),
        ];
        let summary = summarize(&days, 2024, date(2024, 2, 3));
        assert_eq!(summary.max_streak, 1);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn test_full_year_streak_is_bounded() {
        let days: Vec<_> = days_of_year(2024).map(|d| day(d, 1)).collect();
        let summary = summarize(&days, 2024, date(2024, 12, 31));
        assert_eq!(summary.max_streak, 366);
        assert_eq!(summary.current_streak, 366);
        assert_eq!(summary.total, 366);
    }

    #[test]
    fn test_buckets_from_other_years_do_not_extend_streaks() {
        let days = vec![day(date(2023, 12, 31), 1), day(date(2024, 1, 1), 1)];
        let summary = summarize(&days, 2024, date(2024, 1, 1));
        assert_eq!(summary.max_streak, 1);
        assert_eq!(summary.current_streak, 1);
    }
}
