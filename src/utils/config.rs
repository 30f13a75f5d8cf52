use std::env;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {name} value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| Error::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url = env::var("DATABASE_URL").map_err(|_| Error::Missing("DATABASE_URL"))?;
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 4)?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 8000)?;

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig { host, port },
        })
    }
}
