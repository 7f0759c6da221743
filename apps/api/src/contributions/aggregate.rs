use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::contributions::extract::extract_events;
use crate::contributions::models::{ContributionDay, ContributionEvent};
use crate::models::post::ContentRecord;

/// Folds events into one bucket per date, ascending by date.
/// Activities keep the order in which their events arrived.
pub fn aggregate_daily(events: Vec<ContributionEvent>) -> Vec<ContributionDay> {
    let mut buckets: BTreeMap<NaiveDate, ContributionDay> = BTreeMap::new();

    for ContributionEvent { date, activity } in events {
        let day = buckets
            .entry(date)
            .or_insert_with(|| ContributionDay::empty(date));
        day.count += 1;
        day.activities.push(activity);
    }

    buckets.into_values().collect()
}

/// Extract + aggregate in one step.
pub fn calculate_daily_contributions(records: &[ContentRecord], year: i32) -> Vec<ContributionDay> {
    aggregate_daily(extract_events(records, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributions::extract::tests::{at, record};
    use crate::contributions::models::ActivityKind;

    fn sample_records() -> Vec<ContentRecord> {
        vec![
            // publish 03-01, update 03-05
            record(1, Some(at(2024, 3, 1, 9, 0)), at(2024, 3, 1, 9, 0), at(2024, 3, 5, 14, 0)),
            // publish 03-05 only
            record(2, Some(at(2024, 3, 5, 8, 0)), at(2024, 3, 5, 7, 30), at(2024, 3, 5, 8, 0)),
            // update 01-20 only (draft)
            record(3, None, at(2024, 1, 2, 0, 0), at(2024, 1, 20, 12, 0)),
        ]
    }

    #[test]
    fn test_buckets_sorted_and_counted() {
        let days = calculate_daily_contributions(&sample_records(), 2024);
        let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-20", "2024-03-01", "2024-03-05"]);
        assert_eq!(days.iter().map(|d| d.count).collect::<Vec<_>>(), vec![1, 1, 2]);
    }

    #[test]
    fn test_activities_keep_input_order() {
        let days = calculate_daily_contributions(&sample_records(), 2024);
        let march_5 = &days[2];
        assert_eq!(march_5.activities.len(), 2);
        assert_eq!(march_5.activities[0].record_id, 1);
        assert_eq!(march_5.activities[0].kind, ActivityKind::Update);
        assert_eq!(march_5.activities[1].record_id, 2);
        assert_eq!(march_5.activities[1].kind, ActivityKind::Publish);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = sample_records();
        assert_eq!(
            calculate_daily_contributions(&records, 2024),
            calculate_daily_contributions(&records, 2024)
        );
    }

    #[test]
    fn test_count_matches_activities_and_events() {
        let records = sample_records();
        let events = extract_events(&records, 2024);
        let n_events = events.len();
        let days = aggregate_daily(events);
        let total: u32 = days.iter().map(|d| d.count).sum();
        assert_eq!(total as usize, n_events);
        assert!(days.iter().all(|d| d.count as usize == d.activities.len()));
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_daily_contributions(&[], 2024).is_empty());
    }
}
