//! Post store — the read side the heatmap pulls records from.
//!
//! `AppState` holds an `Arc<dyn PostStore>`; production uses `PgPostStore`,
//! handler tests swap in in-memory doubles.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::post::ContentRecord;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every record whose publish or update time may fall in `year`.
    /// A superset is fine; the extractor filters by year again.
    async fn fetch_records_for_year(&self, year: i32) -> Result<Vec<ContentRecord>, AppError>;
}

pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn fetch_records_for_year(&self, year: i32) -> Result<Vec<ContentRecord>, AppError> {
        let (start, end) = year_range(year)?;

        let records = sqlx::query_as::<_, ContentRecord>(
            r#"
            SELECT id, title, publish_at, updated_at, created_at
            FROM posts
            WHERE status = 'PUBLISHED'
              AND deleted_at IS NULL
              AND (
                    (publish_at >= $1 AND publish_at < $2)
                 OR (updated_at >= $1 AND updated_at < $2)
              )
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} post records for {year}", records.len());
        Ok(records)
    }
}

/// `[Jan 1 of year, Jan 1 of year + 1)` in UTC.
pub fn year_range(year: i32) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single();
    let end = year
        .checked_add(1)
        .and_then(|next| Utc.with_ymd_and_hms(next, 1, 1, 0, 0, 0).single());

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(AppError::Validation(format!("Year {year} is out of range"))),
    }
}
