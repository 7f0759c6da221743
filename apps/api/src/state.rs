use std::sync::Arc;

use crate::config::Config;
use crate::contributions::store::PostStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record source. Default: `PgPostStore`.
    pub store: Arc<dyn PostStore>,
    pub config: Config,
}
