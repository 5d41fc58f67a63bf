//! Word persistence. Each call issues a single statement on the caller's session (delete issues a
//! lookup first); absence is reported through the return value, never as an error.

use crate::db::{on_conn, Session};
use crate::error::AppError;
use crate::models::{Word, WordCreate};
use crate::schema::WORDS;
use crate::sql;

pub struct WordService;

impl WordService {
    /// Fetch one word by primary key.
    pub async fn get_word(session: &mut Session, id: i64) -> Result<Option<Word>, AppError> {
        let sql = sql::select_by_id(&WORDS);
        tracing::debug!(sql = %sql, id, "query");
        let word = on_conn!(session, |conn| sqlx::query_as::<_, Word>(&sql)
            .bind(id)
            .fetch_optional(&mut **conn)
            .await?);
        Ok(word)
    }

    /// Page through words in id order.
    pub async fn list_words(
        session: &mut Session,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Word>, AppError> {
        let sql = sql::select_list(&WORDS);
        tracing::debug!(sql = %sql, skip, limit, "query");
        let words = on_conn!(session, |conn| sqlx::query_as::<_, Word>(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(skip))
            .fetch_all(&mut **conn)
            .await?);
        Ok(words)
    }

    /// Insert a word and return it with its assigned id and creation time.
    pub async fn create_word(session: &mut Session, word_in: &WordCreate) -> Result<Word, AppError> {
        let sql = sql::insert(&WORDS);
        tracing::debug!(sql = %sql, term = %word_in.term, "query");
        let word = on_conn!(session, |conn| sqlx::query_as::<_, Word>(&sql)
            .bind(&word_in.term)
            .bind(&word_in.meaning)
            .bind(&word_in.example)
            .bind(&word_in.part_of_speech)
            .fetch_one(&mut **conn)
            .await?);
        tracing::debug!(id = word.id, "created word");
        Ok(word)
    }

    /// Delete a word if it exists. Returns false when there was nothing to delete.
    pub async fn delete_word(session: &mut Session, id: i64) -> Result<bool, AppError> {
        if Self::get_word(session, id).await?.is_none() {
            return Ok(false);
        }
        let sql = sql::delete(&WORDS);
        tracing::debug!(sql = %sql, id, "query");
        let affected = on_conn!(session, |conn| sqlx::query(&sql)
            .bind(id)
            .execute(&mut **conn)
            .await?
            .rows_affected());
        Ok(affected > 0)
    }
}
