use std::env::{self, VarError};

use crate::domain::DomainError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub profile: String,
}

impl Config {
    /// Reads `PROFILE` and `DATABASE_URL`. Without an explicit URL each
    /// profile gets its own SQLite file.
    pub fn from_env() -> Result<Self, DomainError> {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) if url.trim().is_empty() => {
                return Err(DomainError::Configuration(
                    "DATABASE_URL is set but empty".to_string(),
                ));
            }
            Ok(url) => url,
            Err(VarError::NotUnicode(_)) => {
                return Err(DomainError::Configuration(
                    "DATABASE_URL is not valid unicode".to_string(),
                ));
            }
            Err(VarError::NotPresent) if profile == "default" => {
                "sqlite://catalog.db?mode=rwc".to_string()
            }
            Err(VarError::NotPresent) => format!("sqlite://catalog_{}.db?mode=rwc", profile),
        };

        Ok(Self {
            database_url,
            profile,
        })
    }
}
