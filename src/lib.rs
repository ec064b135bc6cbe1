//! # Camera Roll
//!
//! Paginated, async access to the device camera roll on top of a host-provided
//! native gallery.
//!
//! This crate provides:
//! - Camera roll album detection for iOS and Android naming conventions
//! - Page-wise loading of the most recent items, each enriched with a thumbnail
//! - Full resolution image lookup
//! - Local file resolution with name, size and MIME type
//!
//! ## Separation of Concerns
//!
//! The native side stays outside of this crate. It is injected through the
//! [`NativeGallery`], [`NativeFileSystem`] and [`PermissionGate`] traits, which
//! keep the success/failure callback style of mobile plugin bridges. This crate
//! does **not**:
//! - Cache results between calls
//! - Keep pagination cursors (every page re-reads the whole album)
//! - Decode or resize images
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use camera_roll::{AlwaysGranted, CameraRoll, CameraRollConfig, LoadOptions};
//! use std::sync::Arc;
//!
//! let roll = CameraRoll::new(CameraRollConfig::default(), Arc::new(AlwaysGranted))
//!     .with_gallery(Arc::new(my_native_gallery));
//!
//! if roll.is_supported() {
//!     let items = roll.load(LoadOptions::page(2)).await?;
//!     let uri = roll.get_hq_image_data(&items[0]).await?;
//! }
//! ```

pub mod album;
pub mod error;
pub mod facade;
pub mod files;
pub mod local_fs;
pub mod models;
pub mod native;
pub mod service;

#[cfg(test)]
mod testing;

pub use album::{find_camera_roll_album, find_camera_roll_album_with};
pub use error::{FacadeOperation, GalleryError, NativeError};
pub use facade::GalleryFacade;
pub use files::FileResolver;
pub use local_fs::LocalFileSystem;
pub use models::{
    Album, CameraRollConfig, EnrichedMediaItem, FileEntry, FileMetadata, LoadOptions, MediaItem,
};
pub use native::{
    AlwaysGranted, NativeFileSystem, NativeGallery, OnFailure, OnSuccess, PermissionGate,
};
pub use service::{page_window, CameraRoll};
