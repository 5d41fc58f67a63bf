//! Word handlers: list, create, read, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::DbSession;
use crate::models::{Deleted, ListParams, Word, WordCreate};
use crate::service::WordService;
use axum::{
    extract::{Path, Query},
    Json,
};

const ENTITY: &str = "Word";

#[utoipa::path(
    get,
    path = "/words",
    tag = "words",
    params(ListParams),
    responses(
        (status = 200, description = "Page of words ordered by id", body = Vec<Word>)
    )
)]
pub async fn list_words(
    Query(params): Query<ListParams>,
    mut session: DbSession,
) -> Result<Json<Vec<Word>>, AppError> {
    let words = WordService::list_words(&mut session, params.skip, params.limit).await?;
    Ok(Json(words))
}

#[utoipa::path(
    post,
    path = "/words",
    tag = "words",
    request_body = WordCreate,
    responses(
        (status = 200, description = "Created word", body = Word)
    )
)]
pub async fn create_word(
    mut session: DbSession,
    Json(word_in): Json<WordCreate>,
) -> Result<Json<Word>, AppError> {
    let word = WordService::create_word(&mut session, &word_in).await?;
    Ok(Json(word))
}

#[utoipa::path(
    get,
    path = "/words/{word_id}",
    tag = "words",
    params(("word_id" = i64, Path, description = "Word id")),
    responses(
        (status = 200, description = "Word", body = Word),
        (status = 404, description = "No word with this id", body = ErrorBody)
    )
)]
pub async fn read_word(
    Path(word_id): Path<i64>,
    mut session: DbSession,
) -> Result<Json<Word>, AppError> {
    let word = WordService::get_word(&mut session, word_id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(Json(word))
}

#[utoipa::path(
    delete,
    path = "/words/{word_id}",
    tag = "words",
    params(("word_id" = i64, Path, description = "Word id")),
    responses(
        (status = 200, description = "Word deleted", body = Deleted),
        (status = 404, description = "No word with this id", body = ErrorBody)
    )
)]
pub async fn delete_word(
    Path(word_id): Path<i64>,
    mut session: DbSession,
) -> Result<Json<Deleted>, AppError> {
    if !WordService::delete_word(&mut session, word_id).await? {
        return Err(AppError::NotFound(ENTITY));
    }
    tracing::info!(word_id, "deleted word");
    Ok(Json(Deleted { deleted: true }))
}
