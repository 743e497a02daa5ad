use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipboardOperation {
    Cut,
    Copy,
}

/// Items currently held by the explorer clipboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardState {
    pub operation: Option<ClipboardOperation>,
    pub source_location_id: Option<i32>,
    #[serde(default)]
    pub file_path_ids: HashSet<i32>,
    #[serde(default)]
    pub paths: HashSet<String>,
}

impl ClipboardState {
    pub fn cut_file_paths(location_id: i32, ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            operation: Some(ClipboardOperation::Cut),
            source_location_id: Some(location_id),
            file_path_ids: ids.into_iter().collect(),
            paths: HashSet::new(),
        }
    }

    pub fn cut_paths(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            operation: Some(ClipboardOperation::Cut),
            source_location_id: None,
            file_path_ids: HashSet::new(),
            paths: paths.into_iter().collect(),
        }
    }

    pub fn is_cut(&self) -> bool {
        self.operation == Some(ClipboardOperation::Cut)
    }

    pub fn is_file_path_cut(&self, file_path_id: i32) -> bool {
        self.is_cut() && self.file_path_ids.contains(&file_path_id)
    }

    pub fn is_path_cut(&self, path: &str) -> bool {
        self.is_cut() && self.paths.contains(path)
    }
}
