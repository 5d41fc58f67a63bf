//! Connection pools, per-request sessions and database bootstrap.
//!
//! Two backends are supported: PostgreSQL (the deployment target) and SQLite (local runs and the
//! test suite). Statements are written once with `$n` placeholders, which both drivers accept.

use crate::error::{AppError, ConfigError};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, Postgres, Sqlite, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

/// Run `$body` against the connection held by a [`Session`], binding it as `$conn`.
/// The body is expanded once per backend, so it may use driver-generic sqlx calls.
macro_rules! on_conn {
    ($session:expr, |$conn:ident| $body:expr) => {
        match $session {
            $crate::db::Session::Postgres($conn) => $body,
            $crate::db::Session::Sqlite($conn) => $body,
        }
    };
}
pub(crate) use on_conn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or(url);
            Err(ConfigError::UnsupportedDatabase(scheme.to_string()))
        }
    }
}

#[derive(Clone, Debug)]
pub enum DbPool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DbPool {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        match Backend::from_url(database_url)? {
            Backend::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(max_connections)
                    .connect(database_url)
                    .await?;
                Ok(DbPool::Postgres(pool))
            }
            Backend::Sqlite => {
                let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
                let pool_opts = if is_in_memory(database_url) {
                    // Every in-memory connection is a separate database: keep exactly one alive.
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .min_connections(1)
                        .idle_timeout(None::<Duration>)
                        .max_lifetime(None::<Duration>)
                } else {
                    SqlitePoolOptions::new().max_connections(max_connections)
                };
                Ok(DbPool::Sqlite(pool_opts.connect_with(opts).await?))
            }
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            DbPool::Postgres(_) => Backend::Postgres,
            DbPool::Sqlite(_) => Backend::Sqlite,
        }
    }

    /// Check out one connection. It goes back to the pool when the session is dropped.
    pub async fn acquire(&self) -> Result<Session, sqlx::Error> {
        Ok(match self {
            DbPool::Postgres(pool) => Session::Postgres(pool.acquire().await?),
            DbPool::Sqlite(pool) => Session::Sqlite(pool.acquire().await?),
        })
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            DbPool::Postgres(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            DbPool::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        }
    }

    pub async fn close(&self) {
        match self {
            DbPool::Postgres(pool) => pool.close().await,
            DbPool::Sqlite(pool) => pool.close().await,
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// A pooled connection scoped to one unit of work (one HTTP request, or startup DDL).
#[derive(Debug)]
pub enum Session {
    Postgres(PoolConnection<Postgres>),
    Sqlite(PoolConnection<Sqlite>),
}

impl Session {
    pub fn backend(&self) -> Backend {
        match self {
            Session::Postgres(_) => Backend::Postgres,
            Session::Sqlite(_) => Backend::Sqlite,
        }
    }

    /// Execute a statement without parameters; returns rows affected.
    pub async fn execute(&mut self, sql: &str) -> Result<u64, sqlx::Error> {
        tracing::debug!(sql = %sql, "execute");
        let affected = on_conn!(self, |conn| sqlx::query(sql)
            .execute(&mut **conn)
            .await?
            .rows_affected());
        Ok(affected)
    }
}

/// Create the PostgreSQL database named in `database_url` if it does not exist, connecting
/// through the `postgres` maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[authority_start..]
        .find('/')
        .map(|i| authority_start + i + 1)
        .ok_or_else(|| ConfigError::UnsupportedDatabase(format!("{} (no database name)", url)))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, query)) => (name.trim(), Some(query)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(query) = query {
        admin_url.push('?');
        admin_url.push_str(query);
    }
    Ok((admin_url, db_name.to_string()))
}

pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
