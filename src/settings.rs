use std::{env, error::Error, io, net::IpAddr, str::FromStr};

use anyhow::Context;
use tracing::Level;

pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub level: Level,

    pub database_url: String,
    pub db_max_connections: u32,
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env` if
    /// there is one.
    pub fn load_from_env() -> anyhow::Result<Self> {
        check_dotenv(dotenv::dotenv())?;
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Settings {
            host: parse_or(&vars, "APP_HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_or(&vars, "APP_PORT", 8080)?,
            level: parse_or(&vars, "LOG_LEVEL", Level::INFO)?,

            database_url: vars("DATABASE_URL").unwrap_or_else(|| "sqlite://database.db".to_owned()),
            db_max_connections: parse_or(&vars, "DB_MAX_CONNECTIONS", 16)?,
        })
    }
}

/// A missing `.env` is fine, an unreadable or malformed one is not.
fn check_dotenv<T>(result: dotenv::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).context("failed to load .env"),
    }
}

fn parse_or<T>(vars: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    match vars(key) {
        Some(value) => T::from_str(&value).with_context(|| format!("invalid {key}: {value:?}")),
        None => Ok(default),
    }
}
