use chrono::{Datelike, Duration, NaiveDate};

use crate::contributions::models::{ActivityKind, ContributionActivity, ContributionEvent};
use crate::models::post::ContentRecord;

/// Minimum gap between creation and last edit for the edit to count on its own.
pub const SIGNIFICANT_UPDATE_HOURS: i64 = 1;

/// True when the record was edited well after it was created, so that
/// `updated_at` is not just the timestamp written by the create itself.
pub fn is_significant_update(record: &ContentRecord) -> bool {
    record.updated_at - record.created_at > Duration::hours(SIGNIFICANT_UPDATE_HOURS)
}

/// Derives the publish/update events of `year` from raw post records.
///
/// All calendar dates are taken in UTC. A record yields at most two events:
/// - `publish` on the date of `publish_at`, when that falls in `year`;
/// - `update` on the date of `updated_at`, when that falls in `year`, the
///   update is significant, and it is not the same day as the publish.
pub fn extract_events(records: &[ContentRecord], year: i32) -> Vec<ContributionEvent> {
    let mut events = Vec::new();

    for record in records {
        let publish_date = record.publish_at.map(|at| at.date_naive());

        if let Some(date) = publish_date.filter(|d| d.year() == year) {
            events.push(event(date, ActivityKind::Publish, record));
        }

        let update_date = record.updated_at.date_naive();
        if update_date.year() == year
            && Some(update_date) != publish_date
            && is_significant_update(record)
        {
            events.push(event(update_date, ActivityKind::Update, record));
        }
    }

    events
}

fn event(date: NaiveDate, kind: ActivityKind, record: &ContentRecord) -> ContributionEvent {
    ContributionEvent {
        date,
        activity: ContributionActivity {
            kind,
            record_id: record.id,
            title: record.title.clone(),
        },
    }
}
