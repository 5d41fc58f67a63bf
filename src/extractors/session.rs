//! Request-scoped database session.

use crate::db::Session;
use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::ops::{Deref, DerefMut};

/// One pooled connection checked out for the lifetime of a request. Dropping the extractor at the
/// end of the handler, on success or error alike, returns the connection to the pool.
#[derive(Debug)]
pub struct DbSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let session = state.pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(DbSession(session))
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}

impl Deref for DbSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.0
    }
}
