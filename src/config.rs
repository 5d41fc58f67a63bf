//! Process settings read from the environment (after `.env` is loaded by the binary).

use crate::db::Backend;
use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://wordbook_user@localhost:5432/wordbook";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Normalized connection string; see [`normalize_database_url`].
    pub database_url: String,
    pub backend: Backend,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Create the PostgreSQL database on startup when it does not exist yet.
    pub create_database: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let database_url = normalize_database_url(&raw_url);
        let backend = Backend::from_url(&database_url)?;
        let host = lookup("WORDBOOK_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "WORDBOOK_PORT", 3000)?;
        let max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        let create_database = parse_var(&lookup, "WORDBOOK_CREATE_DATABASE", true)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidVar {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        Ok(Settings {
            database_url,
            backend,
            host,
            port,
            max_connections,
            create_database,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}

/// Strip an SQLAlchemy-style driver suffix from the scheme (`postgresql+psycopg2://` -> `postgresql://`).
pub fn normalize_database_url(url: &str) -> String {
    let url = url.trim();
    match url.split_once("://") {
        Some((scheme, rest)) => match scheme.split_once('+') {
            Some((base, _driver)) => format!("{}://{}", base, rest),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}
