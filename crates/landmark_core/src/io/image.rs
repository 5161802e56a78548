//! Image file loading.
//!
//! # Responsibility
//! - Resolve a user-selected file into a displayable `ImagePayload`.
//!
//! # Invariants
//! - A failed load never yields a partial payload.
//! - The mime subtype is derived from the file extension only.
//! - Reads never block the calling thread; `FsImageLoader` must be awaited
//!   inside a Tokio runtime.

use crate::model::landmark::{ImagePayload, ValidationError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Resolves image files into data-URL payloads.
#[allow(async_fn_in_trait)]
pub trait ImageLoader {
    async fn load(&self, path: &Path) -> Result<ImagePayload, ImageLoadError>;
}

/// Reads images from the local filesystem through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    async fn load(&self, path: &Path) -> Result<ImagePayload, ImageLoadError> {
        let Some(subtype) = mime_subtype(path) else {
            warn!("event=image_load module=io status=error reason=unsupported_format");
            return Err(ImageLoadError::UnsupportedFormat(path.to_path_buf()));
        };

        let bytes = tokio::fs::read(path).await.map_err(|source| {
            warn!(
                "event=image_load module=io status=error reason=io kind={:?}",
                source.kind()
            );
            ImageLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let payload = ImagePayload::from_base64(subtype, &STANDARD.encode(&bytes))?;
        debug!(
            "event=image_load module=io status=ok bytes={} mime={}",
            bytes.len(),
            payload.mime_type()
        );
        Ok(payload)
    }
}

fn mime_subtype(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("png"),
        "jpg" | "jpeg" => Some("jpeg"),
        "gif" => Some("gif"),
        "webp" => Some("webp"),
        "svg" => Some("svg+xml"),
        "bmp" => Some("bmp"),
        _ => None,
    }
}

/// Image read failure surfaced to the initiating interaction.
#[derive(Debug)]
pub enum ImageLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    UnsupportedFormat(PathBuf),
    InvalidPayload(ValidationError),
}

impl Display for ImageLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read image `{}`: {source}", path.display())
            }
            Self::UnsupportedFormat(path) => {
                write!(f, "unsupported image format: `{}`", path.display())
            }
            Self::InvalidPayload(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImageLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::UnsupportedFormat(_) => None,
            Self::InvalidPayload(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ImageLoadError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidPayload(value)
    }
}
