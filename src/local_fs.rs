//! Filesystem capability backed by the local disk.
//!
//! Mobile hosts provide their own resolver; this one lets `get_file` work on
//! desktop builds and in tests.

use crate::error::NativeError;
use crate::models::{FileEntry, FileMetadata};
use crate::native::{NativeFileSystem, OnFailure, OnSuccess};
use std::path::{Path, PathBuf};
use url::Url;

const NOT_FOUND_ERR: i32 = 1;
const NOT_READABLE_ERR: i32 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Decodes a `file://` URL into a path; anything else is taken as a plain path
fn to_local_path(input: &str) -> PathBuf {
    match Url::parse(input) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .unwrap_or_else(|_| PathBuf::from(input)),
        _ => PathBuf::from(input),
    }
}

/// MIME type derived from the file extension, empty when unknown
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "dng" => "image/x-adobe-dng",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "3gp" => "video/3gpp",
        _ => "",
    }
}

fn resolve(url: &str) -> Result<FileEntry, NativeError> {
    let path = to_local_path(url);
    if path.is_file() {
        Ok(FileEntry::new(path.to_string_lossy()))
    } else {
        Err(NativeError::with_code(NOT_FOUND_ERR, "NOT_FOUND_ERR"))
    }
}

fn read_metadata(full_path: &str) -> Result<FileMetadata, NativeError> {
    let path = Path::new(full_path);
    let meta = std::fs::metadata(path)
        .map_err(|e| NativeError::with_code(NOT_READABLE_ERR, format!("NOT_READABLE_ERR: {}", e)))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FileMetadata {
        name,
        size: meta.len(),
        mime_type: guess_mime_type(path).to_string(),
    })
}

/// Runs blocking filesystem work off the async runtime when one is available
fn run_blocking<T, F>(work: F, on_success: OnSuccess<T>, on_failure: OnFailure)
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, NativeError> + Send + 'static,
{
    let finish = move |result: Result<T, NativeError>| match result {
        Ok(value) => on_success(value),
        Err(err) => on_failure(err),
    };

    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn_blocking(move || finish(work()));
        }
        Err(_) => finish(work()),
    }
}

impl NativeFileSystem for LocalFileSystem {
    fn resolve_local_file_system_url(
        &self,
        path: &str,
        on_success: OnSuccess<FileEntry>,
        on_failure: OnFailure,
    ) {
        let path = path.to_string();
        run_blocking(move || resolve(&path), on_success, on_failure);
    }

    fn file(&self, entry: &FileEntry, on_success: OnSuccess<FileMetadata>, on_failure: OnFailure) {
        let full_path = entry.full_path.clone();
        run_blocking(move || read_metadata(&full_path), on_success, on_failure);
    }
}
