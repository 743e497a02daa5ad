use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::AppError;
use crate::models::layout::ExplorerLayoutSettings;
use crate::services::layout_sync::{SqliteLayoutStore, TableLayout};

pub struct AppState {
    pub db: Mutex<rusqlite::Connection>,
    pub db_path: PathBuf,
    pub layouts: Mutex<HashMap<String, TableLayout>>,
}

impl AppState {
    pub fn new(conn: rusqlite::Connection, db_path: PathBuf) -> Self {
        Self {
            db: Mutex::new(conn),
            db_path,
            layouts: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `f` against the cached layout of `view_key`, loading it from the
    /// settings store on first use. Locks are always taken db first, then layouts.
    pub fn with_layout<T>(
        &self,
        view_key: &str,
        f: impl FnOnce(&mut TableLayout, &SqliteLayoutStore<'_>) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let conn = self
            .db
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let store = SqliteLayoutStore::new(&conn);

        let mut layouts = self
            .layouts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !layouts.contains_key(view_key) {
            let mut layout = TableLayout::new(view_key);
            layout.load(&store)?;
            layouts.insert(view_key.to_string(), layout);
        }
        let layout = layouts
            .get_mut(view_key)
            .ok_or_else(|| AppError::General(format!("layout not loaded: {view_key}")))?;

        f(layout, &store)
    }

    /// Clears the stored layout before anything is read from it, so a row that
    /// no longer loads can still be reset.
    pub fn reset_layout(&self, view_key: &str) -> Result<ExplorerLayoutSettings, AppError> {
        let conn = self
            .db
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let store = SqliteLayoutStore::new(&conn);

        let mut layouts = self
            .layouts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut layout = layouts
            .remove(view_key)
            .unwrap_or_else(|| TableLayout::new(view_key));
        layout.reset(&store)?;
        let settings = layout.settings();
        layouts.insert(view_key.to_string(), layout);
        Ok(settings)
    }

    /// Drops the cached layout of a closed view. Returns whether one was cached.
    pub fn forget_layout(&self, view_key: &str) -> bool {
        let mut layouts = self
            .layouts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        layouts.remove(view_key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::migrations::run_migrations;
    use crate::models::layout::ColumnId;

    fn test_state() -> AppState {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        AppState::new(conn, PathBuf::new())
    }

    #[test]
    fn layouts_are_cached_per_view() {
        let state = test_state();
        state
            .with_layout("a", |layout, store| {
                layout.toggle_column(store, ColumnId::Kind).map(|_| ())
            })
            .unwrap();

        let kind_visible_a = state
            .with_layout("a", |layout, _| Ok(layout.is_visible(ColumnId::Kind)))
            .unwrap();
        let kind_visible_b = state
            .with_layout("b", |layout, _| Ok(layout.is_visible(ColumnId::Kind)))
            .unwrap();

        assert!(!kind_visible_a);
        assert!(kind_visible_b);
    }

    #[test]
    fn forgotten_layout_reloads_from_store() {
        let state = test_state();
        state
            .with_layout("a", |layout, store| {
                layout.resize_column(store, ColumnId::Kind, 222.0).map(|_| ())
            })
            .unwrap();
        assert!(state.forget_layout("a"));
        assert!(!state.forget_layout("a"));

        let width = state
            .with_layout("a", |layout, _| Ok(layout.column_width(ColumnId::Kind)))
            .unwrap();
        assert_eq!(width, 222.0);
    }

    #[test]
    fn reset_clears_store_before_loading() {
        let state = test_state();
        {
            let conn = state.db.lock().unwrap();
            conn.execute(
                "INSERT INTO explorer_settings (view_key, col_visibility, col_sizes) VALUES (?1, ?2, ?3)",
                rusqlite::params!["a", "not json", "not json"],
            )
            .unwrap();
        }

        let settings = state.reset_layout("a").unwrap();
        assert_eq!(settings, ExplorerLayoutSettings::default());

        let conn = state.db.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM explorer_settings WHERE view_key = 'a'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 0);
    }
}
