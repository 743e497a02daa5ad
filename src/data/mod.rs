use anyhow::Context;
use rusqlite::Connection;

use crate::config::AppConfig;

pub mod migrations;
pub mod repository;

pub fn open_connection(config: &AppConfig) -> anyhow::Result<Connection> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let conn = Connection::open(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    conn.busy_timeout(config.busy_timeout)?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    tracing::info!(path = %config.db_path.display(), "settings database ready");
    Ok(conn)
}
