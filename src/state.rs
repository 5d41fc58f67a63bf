//! Shared application state for all routes.

use crate::db::DbPool;

#[derive(Clone)]
pub struct AppState {
    /// Handed out one connection per request through [`crate::extractors::DbSession`].
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        AppState { pool }
    }
}
