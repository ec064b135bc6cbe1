use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Album type reported by iOS for the built-in "Recents"/"Camera Roll" collection
pub const SMART_ALBUM_USER_LIBRARY: &str = "PHAssetCollectionSubtypeSmartAlbumUserLibrary";

/// Title Android galleries use for the camera bucket
pub const CAMERA_ALBUM_TITLE: &str = "Camera";

/// Represents an album as reported by the native gallery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: String,
    pub title: String,
    /// Platform subtype, only set on iOS
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub album_type: Option<String>,
    /// Any further fields the platform attaches
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Album {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            album_type: None,
            extra: Map::new(),
        }
    }

    pub fn with_type(mut self, album_type: impl Into<String>) -> Self {
        self.album_type = Some(album_type.into());
        self
    }
}

/// Represents a single photo or video inside an album
///
/// Only `id` is interpreted by this crate. Everything else the platform
/// reports is carried along untouched in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: String,
    /// Thumbnail reference, filled in once the item has been enriched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl MediaItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail: None,
            metadata: Map::new(),
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.thumbnail.is_some()
    }
}

/// A media item that went through thumbnail enrichment
pub type EnrichedMediaItem = MediaItem;

/// Caller options for [`crate::CameraRoll::load`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Expected number of items; only used for progress reporting
    pub count: Option<u32>,
    /// 1-based page number
    pub page: Option<u32>,
}

impl LoadOptions {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

/// Handle to a local file, as returned by the filesystem capability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FileEntry {
    pub full_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileEntry {
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            ..Self::default()
        }
    }
}

impl std::fmt::Display for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_path)
    }
}

/// File details reported for a resolved entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Configuration for the camera roll loader
#[derive(Debug, Clone)]
pub struct CameraRollConfig {
    /// Number of items per page
    pub page_size: usize,
    /// Progress total used when the caller passes no count
    pub default_count: u32,
    /// Capability requested from the permission gate before reading albums
    pub permission: String,
    /// iOS album subtype identifying the camera roll
    pub smart_album_type: String,
    /// Android album title identifying the camera roll
    pub camera_album_title: String,
    /// Prefix turning native HQ paths into URIs
    pub file_scheme: String,
}

impl Default for CameraRollConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            default_count: 100,
            permission: "get-album".to_string(),
            smart_album_type: SMART_ALBUM_USER_LIBRARY.to_string(),
            camera_album_title: CAMERA_ALBUM_TITLE.to_string(),
            file_scheme: "file://".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_serializes_platform_type() {
        let album = Album::new("1", "Recents").with_type(SMART_ALBUM_USER_LIBRARY);
        let json = serde_json::to_string(&album).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","title":"Recents","type":"PHAssetCollectionSubtypeSmartAlbumUserLibrary"}"#
        );
    }

    #[test]
    fn test_media_item_keeps_unknown_fields() {
        let item: MediaItem =
            serde_json::from_str(r#"{"id":"42","width":640,"height":480}"#).unwrap();
        assert_eq!(item.id, "42");
        assert!(!item.is_enriched());
        assert_eq!(item.metadata.get("width"), Some(&Value::from(640)));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["height"], Value::from(480));
    }

    #[test]
    fn test_default_config() {
        let config = CameraRollConfig::default();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.default_count, 100);
        assert_eq!(config.camera_album_title, "Camera");
    }
}
