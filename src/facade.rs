use crate::error::{FacadeOperation, GalleryError, NativeError};
use crate::models::{Album, MediaItem};
use crate::native::{NativeGallery, OnFailure, OnSuccess};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type Slot<T> = Arc<Mutex<Option<oneshot::Sender<Result<T, NativeError>>>>>;

/// Runs one callback-style native call and waits for whichever callback fires first.
///
/// Later invocations are ignored. If the native side drops both callbacks
/// without calling either, the call fails with a `NativeError`.
pub(crate) async fn call_native<T, F>(call: F) -> Result<T, NativeError>
where
    T: Send + 'static,
    F: FnOnce(OnSuccess<T>, OnFailure),
{
    let (tx, rx) = oneshot::channel();
    let slot: Slot<T> = Arc::new(Mutex::new(Some(tx)));
    let failure_slot = Arc::clone(&slot);

    call(
        Box::new(move |value| complete(&slot, Ok(value))),
        Box::new(move |err| complete(&failure_slot, Err(err))),
    );

    rx.await.unwrap_or_else(|_| {
        Err(NativeError::new(
            "native callback dropped without a result",
        ))
    })
}

fn complete<T>(slot: &Slot<T>, result: Result<T, NativeError>) {
    let sender = match slot.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    match sender {
        Some(tx) => {
            // Receiver is gone when the caller stopped waiting
            let _ = tx.send(result);
        }
        None => log::warn!("Native capability invoked a callback twice, ignoring"),
    }
}

/// Async adapters over the native gallery
///
/// Each method performs exactly one native call. There is no retry and no
/// timeout; failures carry the operation and the album/item id.
#[derive(Clone)]
pub struct GalleryFacade {
    native: Arc<dyn NativeGallery>,
}

impl GalleryFacade {
    pub fn new(native: Arc<dyn NativeGallery>) -> Self {
        Self { native }
    }

    pub async fn get_albums(&self) -> Result<Vec<Album>, GalleryError> {
        let native = &self.native;
        call_native(|ok, fail| native.get_albums(ok, fail))
            .await
            .map_err(|e| GalleryError::facade(FacadeOperation::GetAlbums, "", e))
    }

    pub async fn get_media(&self, album: &Album) -> Result<Vec<MediaItem>, GalleryError> {
        let native = &self.native;
        call_native(|ok, fail| native.get_media(album, ok, fail))
            .await
            .map_err(|e| GalleryError::facade(FacadeOperation::GetMedia, album.id.clone(), e))
    }

    /// Passes the item to the native side and returns it with a thumbnail attached
    pub async fn get_media_thumbnail(&self, item: MediaItem) -> Result<MediaItem, GalleryError> {
        let id = item.id.clone();
        let native = &self.native;
        call_native(move |ok, fail| native.get_media_thumbnail(item, ok, fail))
            .await
            .map_err(|e| GalleryError::facade(FacadeOperation::GetMediaThumbnail, id, e))
    }

    /// Raw filesystem path of the full resolution image
    pub async fn get_hq_image_path(&self, item: &MediaItem) -> Result<String, GalleryError> {
        let native = &self.native;
        call_native(|ok, fail| native.get_hq_image_data(item, ok, fail))
            .await
            .map_err(|e| GalleryError::facade(FacadeOperation::GetHqImageData, item.id.clone(), e))
    }
}

impl std::fmt::Debug for GalleryFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryFacade").finish_non_exhaustive()
    }
}
