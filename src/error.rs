use crate::models::Album;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure reported by a native capability through its error callback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    pub message: String,
}

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// JSON rendering used in filesystem diagnostics
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self.message))
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NativeError {}

impl From<String> for NativeError {
    fn from(message: String) -> Self {
        NativeError::new(message)
    }
}

impl From<&str> for NativeError {
    fn from(message: &str) -> Self {
        NativeError::new(message)
    }
}

/// Native call an adapter was performing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacadeOperation {
    GetAlbums,
    GetMedia,
    GetMediaThumbnail,
    GetHqImageData,
    ResolveUrl,
    ReadFileMetadata,
}

/// Error type for camera roll operations
#[derive(Debug)]
pub enum GalleryError {
    /// Required native capability was never injected
    Configuration(String),
    /// Caller passed an unusable option
    InvalidArgument(String),
    /// Permission gate refused access; message is passed through unchanged
    PermissionDenied(String),
    /// No album looks like the camera roll
    NotFound { available: Vec<Album> },
    /// A native adapter call failed
    Facade {
        operation: FacadeOperation,
        target: String,
        cause: NativeError,
    },
    Other(String),
}

impl GalleryError {
    pub(crate) fn facade(
        operation: FacadeOperation,
        target: impl Into<String>,
        cause: impl Into<NativeError>,
    ) -> Self {
        GalleryError::Facade {
            operation,
            target: target.into(),
            cause: cause.into(),
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            GalleryError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GalleryError::PermissionDenied(msg) => write!(f, "{}", msg),
            GalleryError::NotFound { available } => {
                let albums = serde_json::to_string(available).unwrap_or_else(|_| "[]".into());
                write!(
                    f,
                    "Can't find Camera Roll album. Available albums: {}",
                    albums
                )
            }
            GalleryError::Facade {
                operation,
                target,
                cause,
            } => match operation {
                FacadeOperation::GetAlbums => write!(f, "Failed to get albums: {}", cause),
                FacadeOperation::GetMedia => {
                    write!(f, "Failed to load items for album {}: {}", target, cause)
                }
                FacadeOperation::GetMediaThumbnail => {
                    write!(f, "Failed to load thumbnail for item {}: {}", target, cause)
                }
                FacadeOperation::GetHqImageData => write!(
                    f,
                    "Failed to load HQ image data for item {}: {}",
                    target, cause
                ),
                FacadeOperation::ResolveUrl => write!(
                    f,
                    "Failed to resolve URL for path {}: {}",
                    target,
                    cause.to_json()
                ),
                FacadeOperation::ReadFileMetadata => write!(
                    f,
                    "Failed to resolve file entry {}: {}",
                    target,
                    cause.to_json()
                ),
            },
            GalleryError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalleryError::Facade { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

impl From<tokio::task::JoinError> for GalleryError {
    fn from(err: tokio::task::JoinError) -> Self {
        GalleryError::Other(format!("Task join error: {}", err))
    }
}
