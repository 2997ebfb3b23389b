// SPDX-License-Identifier: MPL-2.0
//! Asset delivery port.
//!
//! Frames are addressed by the string paths produced by
//! [`FrameSet`](crate::domain::FrameSet) (for example `/black-matte/12.png`).
//! A [`FrameSource`] turns such a path into decoded pixels. The filesystem
//! adapter resolves paths under an asset root directory, the same way a web
//! server would resolve them under its document root.

use super::image::{load_image, ImageData};
use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fetches and decodes one asset.
///
/// Implementations are called from blocking worker threads and may be called
/// concurrently for different paths.
pub trait FrameSource: Send + Sync {
    /// Fetches the asset at `asset_path` and decodes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset is missing or cannot be decoded.
    fn fetch(&self, asset_path: &str) -> Result<ImageData>;
}

/// Serves assets from a directory on disk.
#[derive(Clone)]
pub struct FsFrameSource {
    root: PathBuf,
}

impl FsFrameSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps an asset path onto the filesystem.
    ///
    /// Leading slashes are stripped so that `/black-matte/1.png` lands inside
    /// the root instead of at the filesystem root.
    #[must_use]
    pub fn resolve(&self, asset_path: &str) -> PathBuf {
        self.root.join(asset_path.trim_start_matches('/'))
    }
}

impl FrameSource for FsFrameSource {
    fn fetch(&self, asset_path: &str) -> Result<ImageData> {
        load_image(self.resolve(asset_path))
    }
}

impl fmt::Debug for FsFrameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsFrameSource")
            .field("root", &self.root)
            .finish()
    }
}
