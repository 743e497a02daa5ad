//! Read-only facet accessors over [`ExplorerItem`].
//!
//! Every accessor returns `None` when the variant does not carry the facet;
//! that is the normal case for peers, labels and locations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::explorer_item::{ExplorerItem, FilePath, NonIndexedPathItem, Object};
use crate::models::object_kind::ObjectKind;

/// The file-path facet, indexed or ephemeral.
#[derive(Debug, Clone, Copy)]
pub enum FilePathRef<'a> {
    Indexed(&'a FilePath),
    NonIndexed(&'a NonIndexedPathItem),
}

impl<'a> FilePathRef<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Self::Indexed(fp) => fp.name.as_deref(),
            Self::NonIndexed(p) => Some(p.name.as_str()),
        }
    }

    pub fn extension(&self) -> Option<&'a str> {
        let ext = match *self {
            Self::Indexed(fp) => fp.extension.as_deref(),
            Self::NonIndexed(p) => Some(p.extension.as_str()),
        };
        ext.filter(|e| !e.is_empty())
    }

    pub fn is_dir(&self) -> bool {
        match *self {
            Self::Indexed(fp) => fp.is_dir.unwrap_or(false),
            Self::NonIndexed(p) => p.is_dir,
        }
    }

    pub fn cas_id(&self) -> Option<&'a str> {
        match *self {
            Self::Indexed(fp) => fp.cas_id.as_deref(),
            Self::NonIndexed(p) => p.cas_id.as_deref(),
        }
    }

    pub fn size_in_bytes(&self) -> Option<u64> {
        match *self {
            Self::Indexed(fp) => fp
                .size_in_bytes_bytes
                .as_deref()
                .and_then(size_from_be_bytes),
            Self::NonIndexed(p) => size_from_be_bytes(&p.size_in_bytes_bytes),
        }
    }

    pub fn date_created(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Indexed(fp) => fp.date_created,
            Self::NonIndexed(p) => p.date_created,
        }
    }

    pub fn date_modified(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Indexed(fp) => fp.date_modified,
            Self::NonIndexed(p) => p.date_modified,
        }
    }

    pub fn date_indexed(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Indexed(fp) => fp.date_indexed,
            Self::NonIndexed(_) => None,
        }
    }

    fn kind(&self) -> Option<i32> {
        match *self {
            Self::Indexed(fp) => fp.kind,
            Self::NonIndexed(p) => Some(p.kind),
        }
    }
}

/// Decodes a big-endian byte count. Anything wider than a `u64` is rejected.
pub fn size_from_be_bytes(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() || bytes.len() > 8 {
        return None;
    }
    Some(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

pub fn item_file_path(item: &ExplorerItem) -> Option<FilePathRef<'_>> {
    match item {
        ExplorerItem::Path(path) => Some(FilePathRef::Indexed(&path.file_path)),
        ExplorerItem::Object(object) => object.file_paths.first().map(FilePathRef::Indexed),
        ExplorerItem::NonIndexedPath(path) => Some(FilePathRef::NonIndexed(path)),
        ExplorerItem::Location(_) | ExplorerItem::SpacedropPeer(_) | ExplorerItem::Label(_) => {
            None
        }
    }
}

pub fn item_object(item: &ExplorerItem) -> Option<&Object> {
    match item {
        ExplorerItem::Object(object) => Some(&object.object),
        ExplorerItem::Path(path) => path.file_path.object.as_ref(),
        _ => None,
    }
}

pub fn item_cas_id(item: &ExplorerItem) -> Option<&str> {
    item_file_path(item).and_then(|fp| fp.cas_id())
}

pub fn item_kind(item: &ExplorerItem) -> &'static str {
    match item {
        ExplorerItem::Location(_) => ObjectKind::Folder.label(),
        ExplorerItem::SpacedropPeer(_) => "Spacedrop",
        ExplorerItem::Label(_) => ObjectKind::Label.label(),
        _ => {
            let file_path = item_file_path(item);
            if file_path.is_some_and(|fp| fp.is_dir()) {
                return ObjectKind::Folder.label();
            }
            let raw = item_object(item)
                .and_then(|o| o.kind)
                .or_else(|| file_path.and_then(|fp| fp.kind()))
                .unwrap_or(0);
            ObjectKind::from_raw(raw).label()
        }
    }
}

pub fn item_object_pub_id(item: &ExplorerItem) -> Option<Uuid> {
    item_object(item).and_then(|o| Uuid::from_slice(&o.pub_id).ok())
}

/// Flattened display data for one item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemData {
    pub kind: &'static str,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub extension: Option<String>,
    pub is_dir: bool,
    pub cas_id: Option<String>,
    pub size_in_bytes: Option<u64>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    pub date_indexed: Option<DateTime<Utc>>,
    pub date_accessed: Option<DateTime<Utc>>,
    pub has_local_thumbnail: bool,
    pub thumbnail_key: Option<String>,
}

pub fn explorer_item_data(item: &ExplorerItem) -> ItemData {
    let file_path = item_file_path(item);
    let object = item_object(item);

    let mut data = ItemData {
        kind: item_kind(item),
        cas_id: file_path.and_then(|fp| fp.cas_id()).map(str::to_string),
        date_accessed: object.and_then(|o| o.date_accessed),
        ..Default::default()
    };

    if let Some(fp) = file_path {
        data.name = fp.name().map(str::to_string);
        data.extension = fp.extension().map(str::to_string);
        data.is_dir = fp.is_dir();
        data.size_in_bytes = fp.size_in_bytes();
        data.date_created = fp.date_created().or_else(|| object.and_then(|o| o.date_created));
        data.date_modified = fp.date_modified();
        data.date_indexed = fp.date_indexed();
    }

    match item {
        ExplorerItem::Path(path) => {
            data.has_local_thumbnail = path.has_local_thumbnail;
            data.thumbnail_key = path.thumbnail_key.clone();
        }
        ExplorerItem::Object(object) => {
            data.has_local_thumbnail = object.has_local_thumbnail;
            data.thumbnail_key = object.thumbnail_key.clone();
        }
        ExplorerItem::NonIndexedPath(path) => {
            data.has_local_thumbnail = path.has_local_thumbnail;
            data.thumbnail_key = path.thumbnail_key.clone();
        }
        ExplorerItem::Location(location) => {
            data.name = location.name.clone();
            data.is_dir = true;
            data.size_in_bytes = location.total_capacity.and_then(|c| u64::try_from(c).ok());
            data.date_created = location.date_created;
        }
        ExplorerItem::SpacedropPeer(peer) => {
            data.name = Some(peer.name.clone());
        }
        ExplorerItem::Label(label) => {
            data.name = Some(label.name.clone());
            data.date_created = label.date_created;
            data.date_modified = label.date_modified;
        }
    }

    data.full_name = data.name.as_ref().map(|name| match &data.extension {
        Some(ext) => format!("{name}.{ext}"),
        None => name.clone(),
    });

    data
}
