use std::env;
use std::fmt;

/// How the process receives requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    /// API Gateway proxy events delivered by the Lambda runtime.
    Lambda,
    /// Plain HTTP through the actix-web development server.
    Local,
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMode::Lambda => write!(f, "lambda"),
            ServerMode::Local => write!(f, "local"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_mode: ServerMode,
    pub server_host: String,
    pub server_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `main` loads `.env` before this runs, so values from it are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let server_mode = match lookup("SERVER_MODE") {
            Some(mode) => match mode.to_lowercase().as_str() {
                "lambda" => ServerMode::Lambda,
                "local" => ServerMode::Local,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SERVER_MODE",
                        value: mode,
                    })
                }
            },
            None if lookup("AWS_LAMBDA_RUNTIME_API").is_some() => ServerMode::Lambda,
            None => ServerMode::Local,
        };

        Ok(Self {
            database_url,
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", &lookup, 5)?,
            server_mode,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parse_or("SERVER_PORT", &lookup, 8080)?,
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
