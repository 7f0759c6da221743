use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Publish,
    Update,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionActivity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub record_id: i32,
    /// Title snapshot taken when the activity was derived.
    pub title: String,
}

/// A dated activity, as produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionEvent {
    pub date: NaiveDate,
    pub activity: ContributionActivity,
}

/// One day bucket. `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
    pub activities: Vec<ContributionActivity>,
}

impl ContributionDay {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            activities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSummary {
    pub total: u32,
    pub max_streak: u32,
    pub current_streak: u32,
    pub max_day_count: u32,
    pub year: i32,
}

/// Week-aligned heatmap layout: `weeks[column][row]`, row 0 is Sunday.
/// Cells outside the year are `None` (serialized as `null`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub weeks: Vec<Vec<Option<ContributionDay>>>,
}

impl CalendarGrid {
    /// Iterates over the present cells, week by week, top to bottom.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flatten().flatten()
    }
}
