//! Column descriptors and per-cell value computation for the table view.

use serde::Serialize;

use crate::models::clipboard::ClipboardState;
use crate::models::explorer_item::ExplorerItem;
use crate::models::layout::ColumnId;
use crate::services::format_service::{format_bytes, format_date, PLACEHOLDER};
use crate::services::item_data::{self, FilePathRef, ItemData};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub header: &'static str,
    pub default_size: f32,
    pub min_size: f32,
    pub hideable: bool,
}

pub const COLUMNS: [ColumnDef; 9] = [
    ColumnDef {
        id: ColumnId::Name,
        header: "Name",
        default_size: 350.0,
        min_size: 100.0,
        hideable: false,
    },
    ColumnDef {
        id: ColumnId::Kind,
        header: "Type",
        default_size: 150.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::SizeInBytes,
        header: "Size",
        default_size: 100.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::DateCreated,
        header: "Date Created",
        default_size: 150.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::DateModified,
        header: "Date Modified",
        default_size: 150.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::DateIndexed,
        header: "Date Indexed",
        default_size: 150.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::DateAccessed,
        header: "Date Accessed",
        default_size: 150.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::ContentId,
        header: "Content ID",
        default_size: 180.0,
        min_size: 50.0,
        hideable: true,
    },
    ColumnDef {
        id: ColumnId::ObjectId,
        header: "Object ID",
        default_size: 180.0,
        min_size: 50.0,
        hideable: true,
    },
];

pub fn column_def(id: ColumnId) -> &'static ColumnDef {
    // COLUMNS is declared in ColumnId order.
    &COLUMNS[id as usize]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailCell {
    pub key: Option<String>,
    pub has_local_thumbnail: bool,
    pub is_dir: bool,
    pub kind: &'static str,
    /// Set while the item sits in a cut clipboard.
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameCell {
    pub thumbnail: ThumbnailCell,
    pub label: String,
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum CellValue {
    Name(NameCell),
    Text(String),
    /// Rendered as a dash.
    Placeholder,
    /// Rendered as an empty cell.
    Absent,
}

impl CellValue {
    pub fn display(&self) -> Option<&str> {
        match self {
            Self::Name(cell) => Some(cell.label.as_str()),
            Self::Text(text) => Some(text.as_str()),
            Self::Placeholder => Some(PLACEHOLDER),
            Self::Absent => None,
        }
    }
}

pub fn is_cut(item: &ExplorerItem, clipboard: &ClipboardState) -> bool {
    match item_data::item_file_path(item) {
        Some(FilePathRef::Indexed(fp)) => clipboard.is_file_path_cut(fp.id),
        Some(FilePathRef::NonIndexed(path)) => clipboard.is_path_cut(&path.path),
        None => false,
    }
}

/// Computes one cell. Never fails: missing facets degrade to `Placeholder` or `Absent`.
pub fn render_cell(
    column: ColumnId,
    item: &ExplorerItem,
    data: &ItemData,
    clipboard: &ClipboardState,
) -> CellValue {
    match column {
        ColumnId::Name => CellValue::Name(NameCell {
            thumbnail: ThumbnailCell {
                key: data.thumbnail_key.clone(),
                has_local_thumbnail: data.has_local_thumbnail,
                is_dir: data.is_dir,
                kind: data.kind,
                dimmed: is_cut(item, clipboard),
            },
            label: data.full_name.clone().unwrap_or_default(),
            editable: item_data::item_file_path(item).is_some(),
        }),
        ColumnId::Kind => CellValue::Text(data.kind.to_string()),
        ColumnId::SizeInBytes => size_cell(item),
        ColumnId::DateCreated => match item {
            ExplorerItem::SpacedropPeer(_) => CellValue::Absent,
            _ => date_cell(data.date_created.as_ref()),
        },
        ColumnId::DateModified => date_cell(data.date_modified.as_ref()),
        ColumnId::DateIndexed => date_cell(data.date_indexed.as_ref()),
        ColumnId::DateAccessed => date_cell(data.date_accessed.as_ref()),
        ColumnId::ContentId => data
            .cas_id
            .clone()
            .map_or(CellValue::Placeholder, CellValue::Text),
        ColumnId::ObjectId => item_data::item_object_pub_id(item)
            .map_or(CellValue::Placeholder, |id| CellValue::Text(id.to_string())),
    }
}

fn size_cell(item: &ExplorerItem) -> CellValue {
    let Some(file_path) = item_data::item_file_path(item) else {
        return CellValue::Placeholder;
    };
    // Non-indexed sources report directories without a meaningful byte size.
    if matches!(item, ExplorerItem::NonIndexedPath(_)) && file_path.is_dir() {
        return CellValue::Placeholder;
    }
    file_path
        .size_in_bytes()
        .map_or(CellValue::Placeholder, |bytes| {
            CellValue::Text(format_bytes(bytes))
        })
}

fn date_cell(date: Option<&chrono::DateTime<chrono::Utc>>) -> CellValue {
    date.map_or(CellValue::Absent, |d| CellValue::Text(format_date(d)))
}
