//! Photo file resolution and image probing.

use campusnav_core::error::{CampusError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Base filename of a stored file reference.
///
/// Both `/` and `\` separate directories, so references exported on Windows
/// reduce to their filename as well.
pub fn base_filename(file_ref: &str) -> &str {
    file_ref.rsplit(['/', '\\']).next().unwrap_or(file_ref)
}

/// Location of a photo on this machine: its base filename under `image_dir`.
///
/// The directory part of the stored reference is always discarded.
pub fn image_path(image_dir: &Path, file_ref: &str) -> PathBuf {
    image_dir.join(base_filename(file_ref))
}

/// Dimensions of an image that could be opened and decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Open an image and read its dimensions.
///
/// Any failure (missing file, unknown format, corrupt header) is an
/// [`CampusError::ImageLoad`] for this image only.
pub fn probe_image(path: &Path) -> Result<ImageInfo> {
    match image::image_dimensions(path) {
        Ok((width, height)) => Ok(ImageInfo { path: path.to_path_buf(), width, height }),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Could not load image: {}", e);
            Err(CampusError::ImageLoad { path: path.to_path_buf(), reason: e.to_string() })
        }
    }
}
