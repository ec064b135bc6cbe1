use crate::error::{FacadeOperation, GalleryError};
use crate::facade::call_native;
use crate::models::FileEntry;
use crate::native::NativeFileSystem;
use std::sync::Arc;

/// Turns filesystem paths into file entries carrying name, size and type
#[derive(Clone)]
pub struct FileResolver {
    native: Arc<dyn NativeFileSystem>,
}

impl FileResolver {
    pub fn new(native: Arc<dyn NativeFileSystem>) -> Self {
        Self { native }
    }

    /// Resolve the file entry for a path
    pub async fn resolve_local_file_system_url(
        &self,
        path: &str,
    ) -> Result<FileEntry, GalleryError> {
        let native = &self.native;
        call_native(|ok, fail| native.resolve_local_file_system_url(path, ok, fail))
            .await
            .map_err(|e| GalleryError::facade(FacadeOperation::ResolveUrl, path, e))
    }

    /// Fill in name, size and type of a resolved entry
    pub async fn enrich_file(&self, mut entry: FileEntry) -> Result<FileEntry, GalleryError> {
        let native = &self.native;
        let metadata = call_native(|ok, fail| native.file(&entry, ok, fail))
            .await
            .map_err(|e| {
                GalleryError::facade(FacadeOperation::ReadFileMetadata, entry.to_string(), e)
            })?;

        entry.name = Some(metadata.name);
        entry.size = Some(metadata.size);
        entry.mime_type = Some(metadata.mime_type);
        Ok(entry)
    }

    /// Gets a reference to a local file with its metadata
    pub async fn get_file(&self, path: &str) -> Result<FileEntry, GalleryError> {
        let entry = self.resolve_local_file_system_url(path).await?;
        log::debug!("Resolved {} to {}", path, entry);
        self.enrich_file(entry).await
    }
}

impl std::fmt::Debug for FileResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileResolver").finish_non_exhaustive()
    }
}
