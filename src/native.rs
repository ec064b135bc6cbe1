//! Contracts for the host-provided capabilities.
//!
//! The gallery and filesystem capabilities follow the callback convention of
//! mobile plugin bridges: every call takes a success and a failure callback and
//! invokes exactly one of them, possibly later and from another thread. The
//! permission gate is already asynchronous.

use crate::error::NativeError;
use crate::models::{Album, FileEntry, FileMetadata, MediaItem};

/// Success branch of a native call
pub type OnSuccess<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// Failure branch of a native call
pub type OnFailure = Box<dyn FnOnce(NativeError) + Send + 'static>;

/// Native media gallery
pub trait NativeGallery: Send + Sync {
    fn get_albums(&self, on_success: OnSuccess<Vec<Album>>, on_failure: OnFailure);

    fn get_media(
        &self,
        album: &Album,
        on_success: OnSuccess<Vec<MediaItem>>,
        on_failure: OnFailure,
    );

    /// Hands the item back with its thumbnail attached
    fn get_media_thumbnail(
        &self,
        item: MediaItem,
        on_success: OnSuccess<MediaItem>,
        on_failure: OnFailure,
    );

    /// Reports the filesystem path of the full resolution image
    fn get_hq_image_data(
        &self,
        item: &MediaItem,
        on_success: OnSuccess<String>,
        on_failure: OnFailure,
    );
}

/// Native filesystem resolution
pub trait NativeFileSystem: Send + Sync {
    fn resolve_local_file_system_url(
        &self,
        path: &str,
        on_success: OnSuccess<FileEntry>,
        on_failure: OnFailure,
    );

    /// Reads name, size and type of a resolved entry
    fn file(&self, entry: &FileEntry, on_success: OnSuccess<FileMetadata>, on_failure: OnFailure);
}

/// Grants (or refuses) named capabilities such as album access
#[async_trait::async_trait]
pub trait PermissionGate: Send + Sync {
    /// Resolves once `capability` is usable, requesting it if necessary.
    /// The error string describes the denial.
    async fn ensure_permission(&self, capability: &str) -> Result<(), String>;
}

/// Gate for hosts without a permission model
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGranted;

#[async_trait::async_trait]
impl PermissionGate for AlwaysGranted {
    async fn ensure_permission(&self, capability: &str) -> Result<(), String> {
        log::debug!("Permission '{}' granted implicitly", capability);
        Ok(())
    }
}
