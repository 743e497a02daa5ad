use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::error::AppError;

pub const DB_PATH_ENV: &str = "EXPLORER_TABLE_DB";
const DB_FILE_NAME: &str = "explorer.db";
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
}

impl AppConfig {
    /// Resolves the database location, preferring `EXPLORER_TABLE_DB` over the
    /// platform data directory.
    pub fn from_env() -> Result<Self, AppError> {
        let override_path = std::env::var(DB_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self::resolve(override_path)
    }

    fn resolve(override_path: Option<PathBuf>) -> Result<Self, AppError> {
        let db_path = match override_path {
            Some(path) => path,
            None => ProjectDirs::from("com", "explorer-table", "explorer-table")
                .ok_or_else(|| AppError::Config("could not resolve data directory".to_string()))?
                .data_dir()
                .join(DB_FILE_NAME),
        };

        Ok(Self {
            db_path,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        })
    }
}
