use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use thiserror::Error;

/// Runtime settings, read from the environment (and `.env` if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub backend: Backend,
}

/// Access mechanism used to talk to the database
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// sea-orm entities and active models
    #[default]
    Orm,
    /// Hand-written parameterized SQL
    Sql,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Orm, Backend::Sql];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orm => "orm",
            Self::Sql => "sql",
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orm" => Ok(Self::Orm),
            "sql" => Ok(Self::Sql),
            other => Err(ConfigError::InvalidValue(
                "GYM_BACKEND".to_string(),
                format!("must be orm or sql, got {other}"),
            )),
        }
    }
}

impl Config {
    /// Loads `.env` if one exists, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = env_map
            .get("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_URL".to_string()))?;

        let backend = env_map
            .get("GYM_BACKEND")
            .map(|s| s.parse::<Backend>())
            .transpose()?
            .unwrap_or_default();

        Ok(Config {
            database_url,
            backend,
        })
    }
}
