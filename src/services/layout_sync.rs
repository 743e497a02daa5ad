//! Two-way mirroring between the table's in-memory column state and the
//! persisted explorer settings.
//!
//! Each slot (visibility, sizes) is a [`ColumnStateSync`]. While the local map is
//! empty the slot is `Uninitialized` and only accepts a seed from the store; once
//! it holds anything it is `Active` and every local change is written back. The
//! empty check alone decides the direction, so a seed is never mistaken for a
//! user edit and an empty map never overwrites real settings.

use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::data::repository;
use crate::error::AppError;
use crate::models::layout::{
    ColumnId, ColumnSizeMap, ColumnVisibilityMap, ExplorerLayoutSettings,
};
use crate::services::column_service::column_def;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Uninitialized,
    Active,
}

#[derive(Debug, Clone)]
pub struct ColumnStateSync<V> {
    local: BTreeMap<ColumnId, V>,
}

impl<V> Default for ColumnStateSync<V> {
    fn default() -> Self {
        Self {
            local: BTreeMap::new(),
        }
    }
}

impl<V: Clone> ColumnStateSync<V> {
    pub fn state(&self) -> SyncState {
        if self.local.is_empty() {
            SyncState::Uninitialized
        } else {
            SyncState::Active
        }
    }

    pub fn local(&self) -> &BTreeMap<ColumnId, V> {
        &self.local
    }

    /// Seeds the local map when it is empty. Returns `true` when this moved the
    /// slot to `Active`.
    pub fn on_persisted_change(&mut self, persisted: &BTreeMap<ColumnId, V>) -> bool {
        if self.state() == SyncState::Active {
            return false;
        }
        self.local = persisted.clone();
        self.state() == SyncState::Active
    }

    /// Replaces the local map and returns what must be persisted, if anything.
    pub fn on_local_change(&mut self, next: BTreeMap<ColumnId, V>) -> Option<&BTreeMap<ColumnId, V>> {
        self.local = next;
        match self.state() {
            SyncState::Active => Some(&self.local),
            SyncState::Uninitialized => None,
        }
    }

    /// Puts back a map whose write to the store failed.
    pub fn revert(&mut self, previous: BTreeMap<ColumnId, V>) {
        self.local = previous;
    }

    pub fn clear(&mut self) {
        self.local.clear();
    }
}

/// Key-value slots holding the persisted layout of each view.
pub trait LayoutStore {
    /// Never-saved views read as the default layout.
    fn load(&self, view_key: &str) -> Result<ExplorerLayoutSettings, AppError>;
    fn save_visibility(&self, view_key: &str, visibility: &ColumnVisibilityMap)
        -> Result<(), AppError>;
    fn save_sizes(&self, view_key: &str, sizes: &ColumnSizeMap) -> Result<(), AppError>;
    fn clear(&self, view_key: &str) -> Result<(), AppError>;
}

pub struct SqliteLayoutStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteLayoutStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl LayoutStore for SqliteLayoutStore<'_> {
    fn load(&self, view_key: &str) -> Result<ExplorerLayoutSettings, AppError> {
        Ok(repository::get_layout_settings(self.conn, view_key)?.unwrap_or_default())
    }

    fn save_visibility(
        &self,
        view_key: &str,
        visibility: &ColumnVisibilityMap,
    ) -> Result<(), AppError> {
        repository::save_col_visibility(self.conn, view_key, visibility)
    }

    fn save_sizes(&self, view_key: &str, sizes: &ColumnSizeMap) -> Result<(), AppError> {
        repository::save_col_sizes(self.conn, view_key, sizes)
    }

    fn clear(&self, view_key: &str) -> Result<(), AppError> {
        repository::delete_layout_settings(self.conn, view_key)?;
        Ok(())
    }
}

/// Column layout of one table view.
#[derive(Debug, Clone)]
pub struct TableLayout {
    view_key: String,
    visibility: ColumnStateSync<bool>,
    sizing: ColumnStateSync<f32>,
}

impl TableLayout {
    pub fn new(view_key: impl Into<String>) -> Self {
        Self {
            view_key: view_key.into(),
            visibility: ColumnStateSync::default(),
            sizing: ColumnStateSync::default(),
        }
    }

    pub fn view_key(&self) -> &str {
        &self.view_key
    }

    pub fn visibility_state(&self) -> SyncState {
        self.visibility.state()
    }

    pub fn sizing_state(&self) -> SyncState {
        self.sizing.state()
    }

    pub fn load(&mut self, store: &impl LayoutStore) -> Result<(), AppError> {
        let persisted = store.load(&self.view_key)?;
        self.on_persisted_change(&persisted);
        Ok(())
    }

    /// Feeds a persisted value into both slots. Active slots ignore it.
    pub fn on_persisted_change(&mut self, persisted: &ExplorerLayoutSettings) {
        if self.visibility.on_persisted_change(&persisted.col_visibility) {
            tracing::debug!(view = %self.view_key, "seeded column visibility");
        }
        if self.sizing.on_persisted_change(&persisted.col_sizes) {
            tracing::debug!(view = %self.view_key, "seeded column sizes");
        }
    }

    /// Columns without an entry are shown.
    pub fn is_visible(&self, column: ColumnId) -> bool {
        self.visibility.local().get(&column).copied().unwrap_or(true)
    }

    pub fn column_width(&self, column: ColumnId) -> f32 {
        self.sizing
            .local()
            .get(&column)
            .copied()
            .unwrap_or(column_def(column).default_size)
    }

    pub fn settings(&self) -> ExplorerLayoutSettings {
        ExplorerLayoutSettings {
            col_visibility: self.visibility.local().clone(),
            col_sizes: self.sizing.local().clone(),
        }
    }

    pub fn set_column_visibility(
        &mut self,
        store: &impl LayoutStore,
        column: ColumnId,
        visible: bool,
    ) -> Result<(), AppError> {
        if !visible && !column_def(column).hideable {
            tracing::debug!(view = %self.view_key, %column, "column cannot be hidden");
            return Ok(());
        }

        let previous = self.visibility.local().clone();
        let mut next = previous.clone();
        next.insert(column, visible);
        if let Some(visibility) = self.visibility.on_local_change(next) {
            if let Err(e) = store.save_visibility(&self.view_key, visibility) {
                self.visibility.revert(previous);
                return Err(e);
            }
            tracing::debug!(view = %self.view_key, %column, visible, "persisted column visibility");
        }
        Ok(())
    }

    pub fn toggle_column(
        &mut self,
        store: &impl LayoutStore,
        column: ColumnId,
    ) -> Result<bool, AppError> {
        let visible = !self.is_visible(column);
        self.set_column_visibility(store, column, visible)?;
        Ok(self.is_visible(column))
    }

    /// Widths below the column minimum are clamped up to it.
    pub fn resize_column(
        &mut self,
        store: &impl LayoutStore,
        column: ColumnId,
        width: f32,
    ) -> Result<f32, AppError> {
        if !width.is_finite() {
            return Err(AppError::General(format!(
                "invalid width for column {column}: {width}"
            )));
        }
        let width = width.max(column_def(column).min_size);

        let previous = self.sizing.local().clone();
        let mut next = previous.clone();
        next.insert(column, width);
        if let Some(sizes) = self.sizing.on_local_change(next) {
            if let Err(e) = store.save_sizes(&self.view_key, sizes) {
                self.sizing.revert(previous);
                return Err(e);
            }
            tracing::debug!(view = %self.view_key, %column, width, "persisted column size");
        }
        Ok(width)
    }

    /// Drops the persisted layout and reseeds from what the store now reports.
    pub fn reset(&mut self, store: &impl LayoutStore) -> Result<(), AppError> {
        store.clear(&self.view_key)?;
        self.visibility.clear();
        self.sizing.clear();
        tracing::info!(view = %self.view_key, "reset explorer layout");
        self.load(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::migrations::run_migrations;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryLayoutStore {
        slots: RefCell<HashMap<String, ExplorerLayoutSettings>>,
        visibility_writes: RefCell<Vec<ColumnVisibilityMap>>,
        size_writes: RefCell<Vec<ColumnSizeMap>>,
    }

    impl MemoryLayoutStore {
        fn with(view_key: &str, settings: ExplorerLayoutSettings) -> Self {
            let store = Self::default();
            store.slots.borrow_mut().insert(view_key.to_string(), settings);
            store
        }
    }

    impl LayoutStore for MemoryLayoutStore {
        fn load(&self, view_key: &str) -> Result<ExplorerLayoutSettings, AppError> {
            Ok(self.slots.borrow().get(view_key).cloned().unwrap_or_default())
        }

        fn save_visibility(
            &self,
            view_key: &str,
            visibility: &ColumnVisibilityMap,
        ) -> Result<(), AppError> {
            self.visibility_writes.borrow_mut().push(visibility.clone());
            self.slots
                .borrow_mut()
                .entry(view_key.to_string())
                .or_default()
                .col_visibility = visibility.clone();
            Ok(())
        }

        fn save_sizes(&self, view_key: &str, sizes: &ColumnSizeMap) -> Result<(), AppError> {
            self.size_writes.borrow_mut().push(sizes.clone());
            self.slots
                .borrow_mut()
                .entry(view_key.to_string())
                .or_default()
                .col_sizes = sizes.clone();
            Ok(())
        }

        fn clear(&self, view_key: &str) -> Result<(), AppError> {
            self.slots.borrow_mut().remove(view_key);
            Ok(())
        }
    }

    /// Accepts loads but fails every write.
    struct ReadOnlyStore;

    impl LayoutStore for ReadOnlyStore {
        fn load(&self, _view_key: &str) -> Result<ExplorerLayoutSettings, AppError> {
            Ok(ExplorerLayoutSettings::default())
        }

        fn save_visibility(
            &self,
            _view_key: &str,
            _visibility: &ColumnVisibilityMap,
        ) -> Result<(), AppError> {
            Err(AppError::General("disk full".to_string()))
        }

        fn save_sizes(&self, _view_key: &str, _sizes: &ColumnSizeMap) -> Result<(), AppError> {
            Err(AppError::General("disk full".to_string()))
        }

        fn clear(&self, _view_key: &str) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn visibility(entries: &[(ColumnId, bool)]) -> ColumnVisibilityMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn seeds_once_then_ignores_persisted_changes() {
        let mut sync = ColumnStateSync::<bool>::default();
        assert_eq!(sync.state(), SyncState::Uninitialized);

        let first = visibility(&[(ColumnId::Kind, false)]);
        assert!(sync.on_persisted_change(&first));
        assert_eq!(sync.state(), SyncState::Active);

        let second = visibility(&[(ColumnId::Kind, true)]);
        assert!(!sync.on_persisted_change(&second));
        assert_eq!(sync.local(), &first);
    }

    #[test]
    fn empty_seed_keeps_slot_uninitialized() {
        let mut sync = ColumnStateSync::<bool>::default();
        assert!(!sync.on_persisted_change(&ColumnVisibilityMap::new()));
        assert_eq!(sync.state(), SyncState::Uninitialized);

        assert!(sync.on_local_change(ColumnVisibilityMap::new()).is_none());

        let later = visibility(&[(ColumnId::Name, true)]);
        assert!(sync.on_persisted_change(&later));
        assert_eq!(sync.local(), &later);
    }

    #[test]
    fn empty_persisted_map_writes_nothing_until_local_has_entries() {
        let store = MemoryLayoutStore::with("view", ExplorerLayoutSettings::empty());
        let mut layout = TableLayout::new("view");

        layout.load(&store).unwrap();
        assert_eq!(layout.visibility_state(), SyncState::Uninitialized);
        assert!(store.visibility_writes.borrow().is_empty());
        assert!(layout.is_visible(ColumnId::DateIndexed));

        layout
            .set_column_visibility(&store, ColumnId::DateIndexed, false)
            .unwrap();
        assert_eq!(layout.visibility_state(), SyncState::Active);
        assert_eq!(
            store.visibility_writes.borrow().as_slice(),
            &[visibility(&[(ColumnId::DateIndexed, false)])]
        );
    }

    #[test]
    fn empty_persisted_sizes_write_nothing_until_local_has_entries() {
        let mut sync = ColumnStateSync::<f32>::default();
        assert!(!sync.on_persisted_change(&ColumnSizeMap::new()));
        assert!(sync.on_local_change(ColumnSizeMap::new()).is_none());

        let store = MemoryLayoutStore::with("view", ExplorerLayoutSettings::empty());
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();
        assert_eq!(layout.sizing_state(), SyncState::Uninitialized);
        assert!(store.size_writes.borrow().is_empty());
        assert_eq!(layout.column_width(ColumnId::Kind), 150.0);

        layout.resize_column(&store, ColumnId::Kind, 175.0).unwrap();
        assert_eq!(layout.sizing_state(), SyncState::Active);
        let expected: ColumnSizeMap = [(ColumnId::Kind, 175.0)].into_iter().collect();
        assert_eq!(store.size_writes.borrow().as_slice(), &[expected]);
        assert!(store.visibility_writes.borrow().is_empty());
    }

    #[test]
    fn failed_writes_leave_local_state_untouched() {
        let store = ReadOnlyStore;
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();
        let before = layout.settings();

        assert!(layout
            .set_column_visibility(&store, ColumnId::Kind, false)
            .is_err());
        assert!(layout.is_visible(ColumnId::Kind));

        assert!(layout.resize_column(&store, ColumnId::Kind, 260.0).is_err());
        assert_eq!(layout.column_width(ColumnId::Kind), 150.0);
        assert_eq!(layout.settings(), before);
    }

    #[test]
    fn failed_first_write_keeps_slot_uninitialized() {
        struct EmptyReadOnlyStore;

        impl LayoutStore for EmptyReadOnlyStore {
            fn load(&self, _view_key: &str) -> Result<ExplorerLayoutSettings, AppError> {
                Ok(ExplorerLayoutSettings::empty())
            }

            fn save_visibility(
                &self,
                view_key: &str,
                visibility: &ColumnVisibilityMap,
            ) -> Result<(), AppError> {
                ReadOnlyStore.save_visibility(view_key, visibility)
            }

            fn save_sizes(&self, view_key: &str, sizes: &ColumnSizeMap) -> Result<(), AppError> {
                ReadOnlyStore.save_sizes(view_key, sizes)
            }

            fn clear(&self, _view_key: &str) -> Result<(), AppError> {
                Ok(())
            }
        }

        let store = EmptyReadOnlyStore;
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();

        assert!(layout.resize_column(&store, ColumnId::Name, 400.0).is_err());
        assert_eq!(layout.sizing_state(), SyncState::Uninitialized);
    }

    #[test]
    fn active_changes_reach_the_store_unchanged() {
        let store = MemoryLayoutStore::default();
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();
        assert_eq!(layout.settings(), ExplorerLayoutSettings::default());

        layout
            .set_column_visibility(&store, ColumnId::ContentId, true)
            .unwrap();
        let width = layout.resize_column(&store, ColumnId::Kind, 210.0).unwrap();
        assert_eq!(width, 210.0);

        let persisted = store.load("view").unwrap();
        assert_eq!(persisted, layout.settings());
        assert_eq!(store.visibility_writes.borrow().len(), 1);
        assert_eq!(store.size_writes.borrow().len(), 1);
    }

    #[test]
    fn name_column_cannot_be_hidden() {
        let store = MemoryLayoutStore::default();
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();

        let visible = layout.toggle_column(&store, ColumnId::Name).unwrap();
        assert!(visible);
        assert!(store.visibility_writes.borrow().is_empty());
    }

    #[test]
    fn resize_clamps_to_minimum() {
        let store = MemoryLayoutStore::default();
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();

        let width = layout.resize_column(&store, ColumnId::Name, 10.0).unwrap();
        assert_eq!(width, column_def(ColumnId::Name).min_size);
        assert!(layout
            .resize_column(&store, ColumnId::Name, f32::NAN)
            .is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let store = MemoryLayoutStore::default();
        let mut layout = TableLayout::new("view");
        layout.load(&store).unwrap();
        layout.toggle_column(&store, ColumnId::Kind).unwrap();
        assert!(!layout.is_visible(ColumnId::Kind));

        layout.reset(&store).unwrap();
        assert!(layout.is_visible(ColumnId::Kind));
        assert_eq!(layout.settings(), ExplorerLayoutSettings::default());
    }

    #[test]
    fn sqlite_store_round_trips_layout() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let store = SqliteLayoutStore::new(&conn);

        let mut layout = TableLayout::new("library/1");
        layout.load(&store).unwrap();
        layout.resize_column(&store, ColumnId::DateModified, 240.0).unwrap();
        layout.toggle_column(&store, ColumnId::ObjectId).unwrap();

        let mut reopened = TableLayout::new("library/1");
        reopened.load(&store).unwrap();
        assert_eq!(reopened.settings(), layout.settings());
        assert_eq!(reopened.column_width(ColumnId::DateModified), 240.0);
        assert!(reopened.is_visible(ColumnId::ObjectId));
    }
}
