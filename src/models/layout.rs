use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Name,
    Kind,
    SizeInBytes,
    DateCreated,
    DateModified,
    DateIndexed,
    DateAccessed,
    ContentId,
    ObjectId,
}

impl ColumnId {
    pub const ALL: [ColumnId; 9] = [
        Self::Name,
        Self::Kind,
        Self::SizeInBytes,
        Self::DateCreated,
        Self::DateModified,
        Self::DateIndexed,
        Self::DateAccessed,
        Self::ContentId,
        Self::ObjectId,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "kind",
            Self::SizeInBytes => "sizeInBytes",
            Self::DateCreated => "dateCreated",
            Self::DateModified => "dateModified",
            Self::DateIndexed => "dateIndexed",
            Self::DateAccessed => "dateAccessed",
            Self::ContentId => "contentId",
            Self::ObjectId => "objectId",
        }
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| format!("unknown column: {s}"))
    }
}

/// Empty means "not loaded yet", not "everything hidden".
pub type ColumnVisibilityMap = BTreeMap<ColumnId, bool>;

/// Column widths in pixels. Empty means "not loaded yet".
pub type ColumnSizeMap = BTreeMap<ColumnId, f32>;

/// Persisted table layout for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerLayoutSettings {
    #[serde(default)]
    pub col_visibility: ColumnVisibilityMap,
    #[serde(default)]
    pub col_sizes: ColumnSizeMap,
}

impl Default for ExplorerLayoutSettings {
    fn default() -> Self {
        let col_visibility = ColumnId::ALL
            .into_iter()
            .map(|column| {
                let shown = !matches!(
                    column,
                    ColumnId::DateIndexed
                        | ColumnId::DateAccessed
                        | ColumnId::ContentId
                        | ColumnId::ObjectId
                );
                (column, shown)
            })
            .collect();

        let col_sizes = ColumnId::ALL
            .into_iter()
            .map(|column| {
                let width = match column {
                    ColumnId::Name => 350.0,
                    ColumnId::SizeInBytes => 100.0,
                    ColumnId::ContentId | ColumnId::ObjectId => 180.0,
                    _ => 150.0,
                };
                (column, width)
            })
            .collect();

        Self {
            col_visibility,
            col_sizes,
        }
    }
}

impl ExplorerLayoutSettings {
    pub fn empty() -> Self {
        Self {
            col_visibility: ColumnVisibilityMap::new(),
            col_sizes: ColumnSizeMap::new(),
        }
    }
}
