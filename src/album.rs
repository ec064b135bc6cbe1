use crate::error::GalleryError;
use crate::models::{Album, CAMERA_ALBUM_TITLE, SMART_ALBUM_USER_LIBRARY};

/// Finds the album pointing to the device camera
///
/// - iOS: type is `PHAssetCollectionSubtypeSmartAlbumUserLibrary`
/// - Android: title is `Camera`
///
/// The iOS match always wins. Within a tier the first album in list order is
/// returned.
pub fn find_camera_roll_album(albums: &[Album]) -> Result<&Album, GalleryError> {
    find_camera_roll_album_with(albums, SMART_ALBUM_USER_LIBRARY, CAMERA_ALBUM_TITLE)
}

/// Same as [`find_camera_roll_album`] with custom match values
pub fn find_camera_roll_album_with<'a>(
    albums: &'a [Album],
    smart_album_type: &str,
    camera_title: &str,
) -> Result<&'a Album, GalleryError> {
    albums
        .iter()
        .find(|album| album.album_type.as_deref() == Some(smart_album_type))
        .or_else(|| albums.iter().find(|album| album.title == camera_title))
        .ok_or_else(|| GalleryError::NotFound {
            available: albums.to_vec(),
        })
}
