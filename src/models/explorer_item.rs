use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One displayable entity in the explorer. Owned upstream; the table only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "item")]
pub enum ExplorerItem {
    Path(PathItem),
    Object(ObjectItem),
    NonIndexedPath(NonIndexedPathItem),
    Location(LocationItem),
    SpacedropPeer(PeerItem),
    Label(LabelItem),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathItem {
    pub file_path: FilePath,
    #[serde(default)]
    pub has_local_thumbnail: bool,
    pub thumbnail_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectItem {
    pub object: Object,
    #[serde(default)]
    pub file_paths: Vec<FilePath>,
    #[serde(default)]
    pub has_local_thumbnail: bool,
    pub thumbnail_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePath {
    pub id: i32,
    #[serde(default)]
    pub pub_id: Vec<u8>,
    pub cas_id: Option<String>,
    pub location_id: Option<i32>,
    pub materialized_path: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub is_dir: Option<bool>,
    pub kind: Option<i32>,
    /// Big-endian encoded byte count.
    pub size_in_bytes_bytes: Option<Vec<u8>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    pub date_indexed: Option<DateTime<Utc>>,
    pub object: Option<Object>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    pub id: i32,
    #[serde(default)]
    pub pub_id: Vec<u8>,
    pub kind: Option<i32>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_accessed: Option<DateTime<Utc>>,
}

/// A path listed straight from disk, not (yet) in the index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonIndexedPathItem {
    pub path: String,
    pub name: String,
    pub extension: String,
    pub kind: i32,
    pub is_dir: bool,
    pub cas_id: Option<String>,
    #[serde(default)]
    pub size_in_bytes_bytes: Vec<u8>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_local_thumbnail: bool,
    pub thumbnail_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationItem {
    pub id: i32,
    #[serde(default)]
    pub pub_id: Vec<u8>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub total_capacity: Option<i64>,
    pub date_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerItem {
    pub identity: String,
    pub name: String,
    pub device_model: Option<String>,
    pub operating_system: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelItem {
    pub id: i32,
    #[serde(default)]
    pub pub_id: Vec<u8>,
    pub name: String,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object_ids: Vec<i32>,
}
