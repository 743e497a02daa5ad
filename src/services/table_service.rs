use serde::Serialize;

use crate::models::clipboard::ClipboardState;
use crate::models::explorer_item::ExplorerItem;
use crate::models::layout::{ColumnId, ColumnSizeMap, ColumnVisibilityMap};
use crate::services::column_service::{render_cell, CellValue, COLUMNS};
use crate::services::item_data::explorer_item_data;
use crate::services::layout_sync::TableLayout;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: ColumnId,
    pub header: &'static str,
    pub size: f32,
    pub min_size: f32,
    pub visible: bool,
    pub hideable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<CellValue>,
}

/// Everything the view layer needs to draw the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTable {
    pub view_key: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub column_visibility: ColumnVisibilityMap,
    pub column_sizing: ColumnSizeMap,
}

pub fn row_key(item: &ExplorerItem) -> String {
    match item {
        ExplorerItem::Path(path) => format!("path:{}", path.file_path.id),
        ExplorerItem::Object(object) => format!("object:{}", object.object.id),
        ExplorerItem::NonIndexedPath(path) => format!("non-indexed:{}", path.path),
        ExplorerItem::Location(location) => format!("location:{}", location.id),
        ExplorerItem::SpacedropPeer(peer) => format!("peer:{}", peer.identity),
        ExplorerItem::Label(label) => format!("label:{}", label.id),
    }
}

pub fn build_row(item: &ExplorerItem, clipboard: &ClipboardState) -> TableRow {
    let data = explorer_item_data(item);
    TableRow {
        key: row_key(item),
        cells: COLUMNS
            .iter()
            .map(|column| render_cell(column.id, item, &data, clipboard))
            .collect(),
    }
}

pub fn build_table(
    layout: &TableLayout,
    items: &[ExplorerItem],
    clipboard: &ClipboardState,
) -> ExplorerTable {
    let columns = COLUMNS
        .iter()
        .map(|column| TableColumn {
            id: column.id,
            header: column.header,
            size: layout.column_width(column.id),
            min_size: column.min_size,
            visible: layout.is_visible(column.id),
            hideable: column.hideable,
        })
        .collect();

    let rows = items.iter().map(|item| build_row(item, clipboard)).collect();
    let settings = layout.settings();

    ExplorerTable {
        view_key: layout.view_key().to_string(),
        columns,
        rows,
        column_visibility: settings.col_visibility,
        column_sizing: settings.col_sizes,
    }
}
