// SPDX-License-Identifier: MPL-2.0
//! Frame set addressing.
//!
//! A frame set is one rotatable variant: `frame_count` still images named by
//! a 1-based index under `base_path`, plus a single static alternate image
//! named `Cockpit`. Frames are addressed internally by a 0-based index.
//!
//! # Example
//!
//! ```
//! use iced_turntable::domain::FrameSet;
//!
//! let set = FrameSet::new("/black-matte/", 36).unwrap();
//! assert_eq!(set.frame_path(0), "/black-matte/1.png");
//! assert_eq!(set.frame_path(35), "/black-matte/36.png");
//! assert_eq!(set.static_path(), "/black-matte/Cockpit.jpg");
//! ```

use std::fmt;

/// Default file extension of rotation frames.
pub const DEFAULT_FRAME_EXTENSION: &str = "png";

/// Default file extension of the static alternate image.
pub const DEFAULT_STATIC_EXTENSION: &str = "jpg";

/// File stem of the static alternate image.
pub const STATIC_IMAGE_STEM: &str = "Cockpit";

/// Reasons a frame set description is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFrameSet {
    EmptyBasePath,
    EmptyExtension,
    EmptyStaticExtension,
}

impl fmt::Display for InvalidFrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidFrameSet::EmptyBasePath => write!(f, "base path must not be empty"),
            InvalidFrameSet::EmptyExtension => write!(f, "frame extension must not be empty"),
            InvalidFrameSet::EmptyStaticExtension => {
                write!(f, "static image extension must not be empty")
            }
        }
    }
}

impl std::error::Error for InvalidFrameSet {}

/// Addressable collection of still images representing one rotatable variant.
///
/// Two frame sets are equal when every addressing component matches; any
/// difference means a full reload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSet {
    base_path: String,
    frame_count: usize,
    extension: String,
    static_extension: String,
}

impl FrameSet {
    /// Creates a frame set with the default extensions (`png` frames,
    /// `jpg` static image).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFrameSet::EmptyBasePath`] if `base_path` is empty.
    pub fn new(base_path: impl Into<String>, frame_count: usize) -> Result<Self, InvalidFrameSet> {
        Self::with_extensions(
            base_path,
            frame_count,
            DEFAULT_FRAME_EXTENSION,
            DEFAULT_STATIC_EXTENSION,
        )
    }

    /// Creates a frame set with explicit extensions.
    ///
    /// A `frame_count` of zero is accepted: such a set has nothing to show and
    /// is ready as soon as it is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path or either extension is empty.
    pub fn with_extensions(
        base_path: impl Into<String>,
        frame_count: usize,
        extension: impl Into<String>,
        static_extension: impl Into<String>,
    ) -> Result<Self, InvalidFrameSet> {
        let base_path = base_path.into();
        let extension = extension.into();
        let static_extension = static_extension.into();

        if base_path.is_empty() {
            return Err(InvalidFrameSet::EmptyBasePath);
        }
        if extension.is_empty() {
            return Err(InvalidFrameSet::EmptyExtension);
        }
        if static_extension.is_empty() {
            return Err(InvalidFrameSet::EmptyStaticExtension);
        }

        Ok(Self {
            base_path,
            frame_count,
            extension,
            static_extension,
        })
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[must_use]
    pub fn static_extension(&self) -> &str {
        &self.static_extension
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Path of the frame at the given 0-based index.
    ///
    /// File names use the 1-based index: internal index 0 maps to `1.<ext>`.
    #[must_use]
    pub fn frame_path(&self, index: usize) -> String {
        format!("{}{}.{}", self.base_path, index + 1, self.extension)
    }

    /// Paths of every frame, ordered by internal index.
    #[must_use]
    pub fn frame_paths(&self) -> Vec<String> {
        (0..self.frame_count).map(|i| self.frame_path(i)).collect()
    }

    /// Path of the static alternate image.
    #[must_use]
    pub fn static_path(&self) -> String {
        format!(
            "{}{}.{}",
            self.base_path, STATIC_IMAGE_STEM, self.static_extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_use_one_based_file_index() {
        let set = FrameSet::new("/m-package/", 3).unwrap();
        assert_eq!(
            set.frame_paths(),
            vec![
                "/m-package/1.png".to_string(),
                "/m-package/2.png".to_string(),
                "/m-package/3.png".to_string(),
            ]
        );
    }

    #[test]
    fn custom_extensions_are_used() {
        let set = FrameSet::with_extensions("/style-sport/", 2, "webp", "svg").unwrap();
        assert_eq!(set.frame_path(1), "/style-sport/2.webp");
        assert_eq!(set.static_path(), "/style-sport/Cockpit.svg");
    }

    #[test]
    fn zero_frames_is_valid_and_empty() {
        let set = FrameSet::new("/empty/", 0).unwrap();
        assert!(set.is_empty());
        assert!(set.frame_paths().is_empty());
    }

    #[test]
    fn empty_base_path_is_rejected() {
        assert_eq!(
            FrameSet::new("", 36).unwrap_err(),
            InvalidFrameSet::EmptyBasePath
        );
    }

    #[test]
    fn empty_extensions_are_rejected() {
        assert_eq!(
            FrameSet::with_extensions("/a/", 1, "", "jpg").unwrap_err(),
            InvalidFrameSet::EmptyExtension
        );
        assert_eq!(
            FrameSet::with_extensions("/a/", 1, "png", "").unwrap_err(),
            InvalidFrameSet::EmptyStaticExtension
        );
    }

    #[test]
    fn sets_differing_in_extension_are_not_equal() {
        let png = FrameSet::new("/a/", 36).unwrap();
        let webp = FrameSet::with_extensions("/a/", 36, "webp", "jpg").unwrap();
        assert_ne!(png, webp);
    }
}
