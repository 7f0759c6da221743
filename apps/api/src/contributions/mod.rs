// Contribution heatmap: post timestamps -> day buckets -> summary + calendar grid.
// Every stage below `store` is pure and synchronous; handlers fetch once per
// request and derive everything from that single record set.

pub mod aggregate;
pub mod extract;
pub mod grid;
pub mod handlers;
pub mod levels;
pub mod models;
pub mod store;
pub mod summary;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::post::ContentRecord;
use aggregate::calculate_daily_contributions;
use grid::build_calendar_grid;
use levels::{ContributionLevel, CONTRIBUTION_LEVELS};
use models::{CalendarGrid, ContributionSummary};
use summary::summarize;

/// Summary and grid derived from the same record set, plus the legend.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionOverview {
    pub summary: ContributionSummary,
    pub grid: CalendarGrid,
    pub levels: &'static [ContributionLevel],
}

pub fn build_overview(records: &[ContentRecord], year: i32, today: NaiveDate) -> ContributionOverview {
    let days = calculate_daily_contributions(records, year);
    ContributionOverview {
        summary: summarize(&days, year, today),
        grid: build_calendar_grid(&days, year),
        levels: CONTRIBUTION_LEVELS,
    }
}
