//! Word CRUD routes.

use crate::handlers::words::{create_word, delete_word, list_words, read_word};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn word_routes(state: AppState) -> Router {
    Router::new()
        .route("/words", get(list_words).post(create_word))
        .route("/words/:word_id", get(read_word).delete(delete_word))
        .with_state(state)
}
