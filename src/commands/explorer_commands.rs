use crate::error::AppError;
use crate::models::clipboard::ClipboardState;
use crate::models::explorer_item::ExplorerItem;
use crate::models::layout::{ColumnId, ExplorerLayoutSettings};
use crate::services::table_service::{self, ExplorerTable};
use crate::state::AppState;

fn parse_column(column: &str) -> Result<ColumnId, AppError> {
    column
        .parse()
        .map_err(|_| AppError::UnknownColumn(column.to_string()))
}

pub fn get_explorer_layout(
    state: &AppState,
    view_key: &str,
) -> Result<ExplorerLayoutSettings, AppError> {
    state.with_layout(view_key, |layout, _| Ok(layout.settings()))
}

pub fn set_column_visibility(
    state: &AppState,
    view_key: &str,
    column: &str,
    visible: bool,
) -> Result<ExplorerLayoutSettings, AppError> {
    let column = parse_column(column)?;
    state.with_layout(view_key, |layout, store| {
        layout.set_column_visibility(store, column, visible)?;
        Ok(layout.settings())
    })
}

pub fn resize_column(
    state: &AppState,
    view_key: &str,
    column: &str,
    width: f32,
) -> Result<ExplorerLayoutSettings, AppError> {
    let column = parse_column(column)?;
    state.with_layout(view_key, |layout, store| {
        layout.resize_column(store, column, width)?;
        Ok(layout.settings())
    })
}

pub fn reset_explorer_layout(
    state: &AppState,
    view_key: &str,
) -> Result<ExplorerLayoutSettings, AppError> {
    state.reset_layout(view_key)
}

/// Called when a table view closes; its layout is reloaded from the store on reopen.
pub fn close_explorer_view(state: &AppState, view_key: &str) -> Result<(), AppError> {
    if state.forget_layout(view_key) {
        tracing::debug!(view = %view_key, "released explorer layout");
    }
    Ok(())
}

pub fn build_explorer_table(
    state: &AppState,
    view_key: &str,
    items: &[ExplorerItem],
    clipboard: &ClipboardState,
) -> Result<ExplorerTable, AppError> {
    state.with_layout(view_key, |layout, _| {
        Ok(table_service::build_table(layout, items, clipboard))
    })
}

#[cfg(feature = "desktop")]
pub mod desktop {
    use tauri::{command, State};

    use super::*;

    #[command]
    pub fn get_explorer_layout(
        view_key: String,
        state: State<'_, AppState>,
    ) -> Result<ExplorerLayoutSettings, AppError> {
        super::get_explorer_layout(&state, &view_key).map_err(AppError::log)
    }

    #[command]
    pub fn set_column_visibility(
        view_key: String,
        column: String,
        visible: bool,
        state: State<'_, AppState>,
    ) -> Result<ExplorerLayoutSettings, AppError> {
        super::set_column_visibility(&state, &view_key, &column, visible).map_err(AppError::log)
    }

    #[command]
    pub fn resize_column(
        view_key: String,
        column: String,
        width: f32,
        state: State<'_, AppState>,
    ) -> Result<ExplorerLayoutSettings, AppError> {
        super::resize_column(&state, &view_key, &column, width).map_err(AppError::log)
    }

    #[command]
    pub fn reset_explorer_layout(
        view_key: String,
        state: State<'_, AppState>,
    ) -> Result<ExplorerLayoutSettings, AppError> {
        super::reset_explorer_layout(&state, &view_key).map_err(AppError::log)
    }

    #[command]
    pub fn close_explorer_view(
        view_key: String,
        state: State<'_, AppState>,
    ) -> Result<(), AppError> {
        super::close_explorer_view(&state, &view_key).map_err(AppError::log)
    }

    #[command]
    pub fn build_explorer_table(
        view_key: String,
        items: Vec<ExplorerItem>,
        clipboard: Option<ClipboardState>,
        state: State<'_, AppState>,
    ) -> Result<ExplorerTable, AppError> {
        super::build_explorer_table(&state, &view_key, &items, &clipboard.unwrap_or_default())
            .map_err(AppError::log)
    }
}
