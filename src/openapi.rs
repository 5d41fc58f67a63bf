//! OpenAPI document for the word endpoints, served at `/openapi.json`.

use crate::error::ErrorBody;
use crate::handlers::words;
use crate::models::{Deleted, Word, WordCreate};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "WordBook API"),
    paths(
        words::list_words,
        words::create_word,
        words::read_word,
        words::delete_word
    ),
    components(schemas(Word, WordCreate, Deleted, ErrorBody)),
    tags((name = "words", description = "Vocabulary entries"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
