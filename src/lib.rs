//! WordBook: a small vocabulary service over PostgreSQL (or SQLite).

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;

pub use config::Settings;
pub use db::{ensure_database_exists, Backend, DbPool, Session};
pub use error::{AppError, ConfigError};
pub use models::{Deleted, ListParams, Word, WordCreate};
pub use routes::{app_router, common_routes, word_routes};
pub use schema::{create_all, drop_all, TABLES};
pub use service::WordService;
pub use state::AppState;
