//! Request and response shapes for the word API. `Word` doubles as the row type read back from
//! the `words` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: u32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Word {
    pub id: i64,
    pub term: String,
    pub meaning: String,
    pub example: Option<String>,
    pub part_of_speech: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /words`. Optional fields may be omitted or `null`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WordCreate {
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Rows to skip.
    #[serde(default)]
    pub skip: u32,
    /// Maximum rows to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema)]
pub struct Deleted {
    pub deleted: bool,
}
