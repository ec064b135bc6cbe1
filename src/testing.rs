//! Scripted native capabilities shared by the unit tests.

use crate::error::NativeError;
use crate::models::{Album, FileEntry, FileMetadata, MediaItem};
use crate::native::{NativeFileSystem, NativeGallery, OnFailure, OnSuccess, PermissionGate};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory gallery answering every album with the same media list
#[derive(Default)]
pub struct FakeGallery {
    albums: Vec<Album>,
    media: Vec<MediaItem>,
    albums_error: Option<String>,
    media_error: Option<String>,
    thumbnail_errors: HashMap<String, String>,
    thumbnail_delays: HashMap<String, Duration>,
    thumbnail_requests: Arc<Mutex<Vec<String>>>,
    thumbnail_responses: Arc<Mutex<usize>>,
    hq_errors: HashMap<String, String>,
    album_calls: Arc<Mutex<usize>>,
}

impl FakeGallery {
    /// Gallery with `albums` and `media_count` items named `0..media_count`
    pub fn new(albums: Vec<Album>, media_count: usize) -> Self {
        Self {
            albums,
            media: (0..media_count).map(|i| MediaItem::new(i.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn fail_albums(mut self, message: &str) -> Self {
        self.albums_error = Some(message.to_string());
        self
    }

    pub fn fail_media(mut self, message: &str) -> Self {
        self.media_error = Some(message.to_string());
        self
    }

    pub fn fail_thumbnail(mut self, id: &str, message: &str) -> Self {
        self.thumbnail_errors
            .insert(id.to_string(), message.to_string());
        self
    }

    pub fn fail_hq(mut self, id: &str, message: &str) -> Self {
        self.hq_errors.insert(id.to_string(), message.to_string());
        self
    }

    /// Answer the thumbnail request for `id` only after `delay`
    pub fn delay_thumbnail(mut self, id: &str, delay: Duration) -> Self {
        self.thumbnail_delays.insert(id.to_string(), delay);
        self
    }

    /// Ids of all thumbnail requests, in issue order
    pub fn thumbnail_requests(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.thumbnail_requests)
    }

    /// Number of thumbnail requests the gallery has answered so far
    pub fn thumbnail_responses(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.thumbnail_responses)
    }

    pub fn album_calls(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.album_calls)
    }
}

impl NativeGallery for FakeGallery {
    fn get_albums(&self, on_success: OnSuccess<Vec<Album>>, on_failure: OnFailure) {
        *self.album_calls.lock().unwrap() += 1;
        match &self.albums_error {
            Some(msg) => on_failure(NativeError::new(msg.as_str())),
            None => on_success(self.albums.clone()),
        }
    }

    fn get_media(
        &self,
        _album: &Album,
        on_success: OnSuccess<Vec<MediaItem>>,
        on_failure: OnFailure,
    ) {
        match &self.media_error {
            Some(msg) => on_failure(NativeError::new(msg.as_str())),
            None => on_success(self.media.clone()),
        }
    }

    fn get_media_thumbnail(
        &self,
        mut item: MediaItem,
        on_success: OnSuccess<MediaItem>,
        on_failure: OnFailure,
    ) {
        self.thumbnail_requests.lock().unwrap().push(item.id.clone());

        let delay = self.thumbnail_delays.get(&item.id).copied();
        let outcome = match self.thumbnail_errors.get(&item.id) {
            Some(msg) => Err(NativeError::new(msg.as_str())),
            None => {
                item.thumbnail = Some(format!("thumb://{}", item.id));
                Ok(item)
            }
        };
        let responses = Arc::clone(&self.thumbnail_responses);
        let respond = move || {
            *responses.lock().unwrap() += 1;
            match outcome {
                Ok(item) => on_success(item),
                Err(err) => on_failure(err),
            }
        };

        match delay {
            Some(delay) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    respond();
                });
            }
            None => respond(),
        }
    }

    fn get_hq_image_data(
        &self,
        item: &MediaItem,
        on_success: OnSuccess<String>,
        on_failure: OnFailure,
    ) {
        match self.hq_errors.get(&item.id) {
            Some(msg) => on_failure(NativeError::new(msg.as_str())),
            None => on_success(format!("/var/mobile/Media/DCIM/{}.JPG", item.id)),
        }
    }
}

/// Permission gate with a fixed answer that counts its calls
#[derive(Default)]
pub struct FakePermissions {
    denial: Option<String>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl FakePermissions {
    pub fn granted() -> Self {
        Self::default()
    }

    pub fn denied(message: &str) -> Self {
        Self {
            denial: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requested)
    }
}

#[async_trait::async_trait]
impl PermissionGate for FakePermissions {
    async fn ensure_permission(&self, capability: &str) -> Result<(), String> {
        self.requested.lock().unwrap().push(capability.to_string());
        match &self.denial {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

/// Filesystem knowing a fixed set of paths
#[derive(Default)]
pub struct FakeFileSystem {
    files: HashMap<String, FileMetadata>,
    broken_metadata: bool,
}

impl FakeFileSystem {
    pub fn with_file(mut self, path: &str, name: &str, size: u64, mime_type: &str) -> Self {
        self.files.insert(
            path.to_string(),
            FileMetadata {
                name: name.to_string(),
                size,
                mime_type: mime_type.to_string(),
            },
        );
        self
    }

    pub fn broken_metadata(mut self) -> Self {
        self.broken_metadata = true;
        self
    }
}

impl NativeFileSystem for FakeFileSystem {
    fn resolve_local_file_system_url(
        &self,
        path: &str,
        on_success: OnSuccess<FileEntry>,
        on_failure: OnFailure,
    ) {
        if self.files.contains_key(path) {
            on_success(FileEntry::new(path));
        } else {
            on_failure(NativeError::with_code(1, "NOT_FOUND_ERR"));
        }
    }

    fn file(&self, entry: &FileEntry, on_success: OnSuccess<FileMetadata>, on_failure: OnFailure) {
        match self.files.get(&entry.full_path) {
            Some(meta) if !self.broken_metadata => on_success(meta.clone()),
            _ => on_failure(NativeError::with_code(4, "NOT_READABLE_ERR")),
        }
    }
}
