use crate::album::find_camera_roll_album_with;
use crate::error::GalleryError;
use crate::facade::GalleryFacade;
use crate::files::FileResolver;
use crate::models::{CameraRollConfig, EnrichedMediaItem, FileEntry, LoadOptions, MediaItem};
use crate::native::{NativeFileSystem, NativeGallery, PermissionGate};
use std::ops::Range;
use std::sync::Arc;
use tokio::task::JoinSet;

const MISSING_GALLERY: &str =
    "Gallery API is not available. Register a native gallery with CameraRoll::with_gallery.";
const MISSING_FILESYSTEM: &str =
    "Filesystem API is not available. Register one with CameraRoll::with_filesystem.";

/// Camera roll access service
pub struct CameraRoll {
    config: CameraRollConfig,
    gallery: Option<GalleryFacade>,
    files: Option<FileResolver>,
    permissions: Arc<dyn PermissionGate>,
}

impl CameraRoll {
    /// Create a service without native capabilities; add them with the `with_*` methods
    pub fn new(config: CameraRollConfig, permissions: Arc<dyn PermissionGate>) -> Self {
        Self {
            config,
            gallery: None,
            files: None,
            permissions,
        }
    }

    pub fn with_gallery(mut self, gallery: Arc<dyn NativeGallery>) -> Self {
        self.gallery = Some(GalleryFacade::new(gallery));
        self
    }

    pub fn with_filesystem(mut self, filesystem: Arc<dyn NativeFileSystem>) -> Self {
        self.files = Some(FileResolver::new(filesystem));
        self
    }

    /// Checks if a native gallery is available to load items from
    pub fn is_supported(&self) -> bool {
        self.gallery.is_some()
    }

    /// Loads one page of the most recent items from the camera roll
    ///
    /// Every call fetches the full album again and slices out the requested
    /// page (`config.page_size` items, 1-based). Each item of the page gets a
    /// thumbnail; all requests run concurrently and the first failure fails the
    /// whole page. Items come back in album order.
    ///
    /// `options.count` is only used for progress logging; it does not change
    /// the page size.
    ///
    /// A missing native gallery is reported as [`GalleryError::Configuration`]
    /// on the first poll of the returned future, before the permission gate or
    /// any native call is reached. Use [`CameraRoll::is_supported`] to check
    /// up front without awaiting.
    pub async fn load(&self, options: LoadOptions) -> Result<Vec<EnrichedMediaItem>, GalleryError> {
        let gallery = self.gallery.as_ref().ok_or_else(|| {
            log::warn!("load called without a native gallery");
            GalleryError::Configuration(MISSING_GALLERY.to_string())
        })?;

        let count = positive_or_default(options.count, self.config.default_count, "count")?;
        let page = positive_or_default(options.page, 1, "page")?;

        self.permissions
            .ensure_permission(&self.config.permission)
            .await
            .map_err(|msg| {
                log::warn!("Permission '{}' denied: {}", self.config.permission, msg);
                GalleryError::PermissionDenied(msg)
            })?;

        let albums = gallery.get_albums().await?;
        let album = find_camera_roll_album_with(
            &albums,
            &self.config.smart_album_type,
            &self.config.camera_album_title,
        )?;
        let items = gallery.get_media(album).await?;
        log::debug!("Found {} items in album '{}'", items.len(), album.title);

        let window = page_window(items.len(), self.config.page_size, page);
        log::debug!("Loading page {} -> [{}..{})", page, window.start, window.end);

        let page_items: Vec<MediaItem> = items
            .into_iter()
            .skip(window.start)
            .take(window.len())
            .collect();

        let enriched = enrich_page(gallery, page_items, count).await?;
        log::info!("Loaded {} items for page {}", enriched.len(), page);
        Ok(enriched)
    }

    /// Gets a `file://` URI to the high quality version of the item
    pub async fn get_hq_image_data(&self, item: &MediaItem) -> Result<String, GalleryError> {
        let gallery = self
            .gallery
            .as_ref()
            .ok_or_else(|| GalleryError::Configuration(MISSING_GALLERY.to_string()))?;

        let path = gallery.get_hq_image_path(item).await?;
        Ok(format!("{}{}", self.config.file_scheme, path))
    }

    /// Gets a reference to a local file with name, size and type filled in
    pub async fn get_file(&self, path: &str) -> Result<FileEntry, GalleryError> {
        let files = self
            .files
            .as_ref()
            .ok_or_else(|| GalleryError::Configuration(MISSING_FILESYSTEM.to_string()))?;

        files.get_file(path).await
    }
}

fn positive_or_default(value: Option<u32>, default: u32, name: &str) -> Result<u32, GalleryError> {
    match value {
        None => Ok(default),
        Some(0) => Err(GalleryError::InvalidArgument(format!(
            "{} must be at least 1",
            name
        ))),
        Some(v) => Ok(v),
    }
}

/// Index range of `page` (1-based) clamped to a list of `len` items
pub fn page_window(len: usize, page_size: usize, page: u32) -> Range<usize> {
    let page = page.max(1) as usize;
    let start = page_size.saturating_mul(page - 1).min(len);
    let end = page_size.saturating_mul(page).min(len);
    start..end
}

/// Requests thumbnails for all items at once and reassembles them in input order
///
/// On the first failure the remaining requests are detached: they keep running
/// but their results are never looked at.
async fn enrich_page(
    gallery: &GalleryFacade,
    items: Vec<MediaItem>,
    count: u32,
) -> Result<Vec<EnrichedMediaItem>, GalleryError> {
    let mut slots: Vec<Option<EnrichedMediaItem>> = vec![None; items.len()];
    let mut join_set = JoinSet::new();

    for (index, item) in items.into_iter().enumerate() {
        log::debug!("Thumbnail progress: {}/{}", index, count);
        let facade = gallery.clone();
        join_set.spawn(async move { (index, facade.get_media_thumbnail(item).await) });
    }

    while let Some(joined) = join_set.join_next().await {
        let outcome = joined.map_err(GalleryError::from).and_then(|(index, result)| {
            result.map(|item| (index, item))
        });

        match outcome {
            Ok((index, item)) => slots[index] = Some(item),
            Err(err) => {
                log::error!("{}", err);
                join_set.detach_all();
                return Err(err);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}
