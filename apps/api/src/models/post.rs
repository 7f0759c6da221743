use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// The slice of a post row the contribution heatmap needs.
/// Read-only; the editor and admin surfaces own the full row.
#[derive(Debug, Clone, FromRow)]
pub struct ContentRecord {
    pub id: i32,
    pub title: String,
    pub publish_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
