// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("SVG Error: {0}")]
    Svg(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A frame set description that can never be loaded (empty base path,
    /// empty extension). Rejected before any fetch is issued.
    #[error("Invalid frame set: {0}")]
    InvalidFrameSet(String),

    #[error("Asset Error: {0}")]
    AssetLoad(#[from] AssetLoadFailure),
}

/// One or more frames of a frame set could not be fetched or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to load {errored} of {total} frames")]
pub struct AssetLoadFailure {
    /// Number of frame attempts that failed.
    pub errored: usize,
    /// Number of frames in the set.
    pub total: usize,
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Svg(_) => "error-svg",
            Error::Config(_) => "error-config",
            Error::InvalidFrameSet(_) => "error-invalid-frame-set",
            Error::AssetLoad(_) => "error-load-frames",
        }
    }
}

impl From<crate::domain::InvalidFrameSet> for Error {
    fn from(err: crate::domain::InvalidFrameSet) -> Self {
        Error::InvalidFrameSet(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn asset_load_failure_reports_counts() {
        let failure = AssetLoadFailure {
            errored: 2,
            total: 36,
        };
        assert_eq!(failure.to_string(), "Failed to load 2 of 36 frames");

        let err: Error = failure.into();
        assert!(matches!(err, Error::AssetLoad(f) if f.errored == 2));
        assert_eq!(err.i18n_key(), "error-load-frames");
    }

    #[test]
    fn invalid_frame_set_has_dedicated_key() {
        let err = Error::InvalidFrameSet("empty base path".into());
        assert_eq!(err.i18n_key(), "error-invalid-frame-set");
        assert!(err.to_string().contains("empty base path"));
    }
}
