use std::collections::BTreeMap;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::layout::{ColumnId, ColumnSizeMap, ColumnVisibilityMap, ExplorerLayoutSettings};

/// Keys naming columns this build does not know are dropped.
fn parse_column_map<V: DeserializeOwned>(
    raw: &str,
) -> Result<BTreeMap<ColumnId, V>, serde_json::Error> {
    let entries: BTreeMap<String, V> = serde_json::from_str(raw)?;
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| key.parse::<ColumnId>().ok().map(|column| (column, value)))
        .collect())
}

pub fn get_layout_settings(
    conn: &Connection,
    view_key: &str,
) -> Result<Option<ExplorerLayoutSettings>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT col_visibility, col_sizes FROM explorer_settings WHERE view_key = ?1",
    )?;

    let raw = stmt
        .query_row(params![view_key], |row| {
            let visibility: String = row.get(0)?;
            let sizes: String = row.get(1)?;
            Ok((visibility, sizes))
        })
        .optional()?;

    let Some((visibility, sizes)) = raw else {
        return Ok(None);
    };

    // A slot that cannot be read at all falls back to its default on its own.
    let defaults = ExplorerLayoutSettings::default();
    let col_visibility = parse_column_map::<bool>(&visibility).unwrap_or_else(|e| {
        tracing::warn!(view = %view_key, error = %e, "unreadable column visibility, using defaults");
        defaults.col_visibility.clone()
    });
    let col_sizes = parse_column_map::<f32>(&sizes).unwrap_or_else(|e| {
        tracing::warn!(view = %view_key, error = %e, "unreadable column sizes, using defaults");
        defaults.col_sizes.clone()
    });

    Ok(Some(ExplorerLayoutSettings {
        col_visibility,
        col_sizes,
    }))
}

pub fn upsert_layout_settings(
    conn: &Connection,
    view_key: &str,
    settings: &ExplorerLayoutSettings,
) -> Result<(), AppError> {
    let visibility = serde_json::to_string(&settings.col_visibility)?;
    let sizes = serde_json::to_string(&settings.col_sizes)?;
    conn.execute(
        "INSERT INTO explorer_settings (view_key, col_visibility, col_sizes, updated_at)
         VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
         ON CONFLICT(view_key) DO UPDATE SET
            col_visibility = excluded.col_visibility,
            col_sizes = excluded.col_sizes,
            updated_at = CURRENT_TIMESTAMP",
        params![view_key, visibility, sizes],
    )?;
    Ok(())
}

/// Writes the visibility slot only. A view without a row gets default sizes alongside.
pub fn save_col_visibility(
    conn: &Connection,
    view_key: &str,
    visibility: &ColumnVisibilityMap,
) -> Result<(), AppError> {
    let visibility_json = serde_json::to_string(visibility)?;
    let default_sizes = serde_json::to_string(&ExplorerLayoutSettings::default().col_sizes)?;
    conn.execute(
        "INSERT INTO explorer_settings (view_key, col_visibility, col_sizes, updated_at)
         VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
         ON CONFLICT(view_key) DO UPDATE SET
            col_visibility = excluded.col_visibility,
            updated_at = CURRENT_TIMESTAMP",
        params![view_key, visibility_json, default_sizes],
    )?;
    Ok(())
}

/// Writes the sizes slot only. A view without a row gets default visibility alongside.
pub fn save_col_sizes(
    conn: &Connection,
    view_key: &str,
    sizes: &ColumnSizeMap,
) -> Result<(), AppError> {
    let sizes_json = serde_json::to_string(sizes)?;
    let default_visibility =
        serde_json::to_string(&ExplorerLayoutSettings::default().col_visibility)?;
    conn.execute(
        "INSERT INTO explorer_settings (view_key, col_visibility, col_sizes, updated_at)
         VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
         ON CONFLICT(view_key) DO UPDATE SET
            col_sizes = excluded.col_sizes,
            updated_at = CURRENT_TIMESTAMP",
        params![view_key, default_visibility, sizes_json],
    )?;
    Ok(())
}

pub fn delete_layout_settings(conn: &Connection, view_key: &str) -> Result<usize, AppError> {
    let count = conn.execute(
        "DELETE FROM explorer_settings WHERE view_key = ?1",
        params![view_key],
    )?;
    Ok(count)
}

// Needed for rusqlite optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
