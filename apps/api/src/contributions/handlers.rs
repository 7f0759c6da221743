use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use crate::contributions::aggregate::calculate_daily_contributions;
use crate::contributions::grid::build_calendar_grid;
use crate::contributions::levels::{level_for, ContributionLevel, CONTRIBUTION_LEVELS};
use crate::contributions::models::{CalendarGrid, ContributionDay, ContributionSummary};
use crate::contributions::summary::summarize;
use crate::contributions::{build_overview, ContributionOverview};
use crate::errors::AppError;
use crate::models::post::ContentRecord;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    pub count: Option<String>,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// GET /api/contributions
pub async fn handle_get_contributions(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> ApiResult<Vec<ContributionDay>> {
    let (records, year, _) = load_year(&state, &params).await?;
    Ok(Json(ApiResponse::success(calculate_daily_contributions(
        &records, year,
    ))))
}

/// GET /api/contributions/summary
pub async fn handle_get_summary(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> ApiResult<ContributionSummary> {
    let (records, year, today) = load_year(&state, &params).await?;
    let days = calculate_daily_contributions(&records, year);
    Ok(Json(ApiResponse::success(summarize(&days, year, today))))
}

/// GET /api/contributions/grid
pub async fn handle_get_grid(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> ApiResult<CalendarGrid> {
    let (records, year, _) = load_year(&state, &params).await?;
    let days = calculate_daily_contributions(&records, year);
    let grid = build_calendar_grid(&days, year);
    debug!(
        "Grid for {year}: {} active of {} shown days",
        grid.days().filter(|d| d.count > 0).count(),
        grid.days().count()
    );
    Ok(Json(ApiResponse::success(grid)))
}

/// GET /api/contributions/overview
pub async fn handle_get_overview(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> ApiResult<ContributionOverview> {
    let (records, year, today) = load_year(&state, &params).await?;
    Ok(Json(ApiResponse::success(build_overview(
        &records, year, today,
    ))))
}

/// GET /api/contributions/levels[?count=N]
/// Without `count`, the whole legend; with it, the single matching level.
pub async fn handle_get_levels(
    Query(params): Query<LevelQuery>,
) -> ApiResult<Vec<&'static ContributionLevel>> {
    let levels = match params.count.as_deref().map(str::trim) {
        None | Some("") => CONTRIBUTION_LEVELS.iter().collect::<Vec<_>>(),
        Some(raw) => {
            let count = raw
                .parse::<u32>()
                .map_err(|_| AppError::Validation(format!("Invalid count parameter: '{raw}'")))?;
            vec![level_for(count)]
        }
    };
    Ok(Json(ApiResponse::success(levels)))
}

async fn load_year(
    state: &AppState,
    params: &YearQuery,
) -> Result<(Vec<ContentRecord>, i32, NaiveDate), AppError> {
    let today = Utc::now().date_naive();
    let year = resolve_year(
        params.year.as_deref(),
        state.config.contribution_min_year,
        today,
    )?;
    let records = state.store.fetch_records_for_year(year).await?;
    info!("Loaded {} records for contributions in {year}", records.len());
    Ok((records, year, today))
}

/// Parses the `year` query parameter, defaulting to the current year.
/// Accepts `min_year ..= current year + 1`.
pub fn resolve_year(raw: Option<&str>, min_year: i32, today: NaiveDate) -> Result<i32, AppError> {
    let current = today.year();
    let year = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => current,
        Some(s) => s
            .parse::<i32>()
            .map_err(|_| AppError::Validation(format!("Invalid year parameter: '{s}'")))?,
    };

    if year < min_year || year > current + 1 {
        return Err(AppError::Validation(format!(
            "Year must be between {min_year} and {}",
            current + 1
        )));
    }
    Ok(year)
}
