// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Rotation**: Drag sensitivity and frame set shape
//! - **Assets**: Where frame images are read from

use crate::domain::frame_set;
use crate::domain::ui::newtypes::sensitivity_bounds;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default drag sensitivity (frame steps per container width per frame).
pub const DEFAULT_SENSITIVITY: f32 = sensitivity_bounds::DEFAULT;

/// Minimum accepted sensitivity.
pub const MIN_SENSITIVITY: f32 = sensitivity_bounds::MIN;

/// Maximum accepted sensitivity.
pub const MAX_SENSITIVITY: f32 = sensitivity_bounds::MAX;

/// Default number of frames per variant.
pub const DEFAULT_FRAME_COUNT: usize = 36;

/// Upper bound on frames per variant. Every frame is kept decoded.
pub const MAX_FRAME_COUNT: usize = 720;

/// Default frame file extension.
pub const DEFAULT_FRAME_EXTENSION: &str = frame_set::DEFAULT_FRAME_EXTENSION;

/// Default static image file extension.
pub const DEFAULT_STATIC_EXTENSION: &str = frame_set::DEFAULT_STATIC_EXTENSION;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Asset root used when none is configured, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets/frames";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SENSITIVITY > 0.0);
    assert!(MAX_SENSITIVITY > MIN_SENSITIVITY);
    assert!(DEFAULT_SENSITIVITY >= MIN_SENSITIVITY);
    assert!(DEFAULT_SENSITIVITY <= MAX_SENSITIVITY);

    assert!(DEFAULT_FRAME_COUNT > 0);
    assert!(DEFAULT_FRAME_COUNT <= MAX_FRAME_COUNT);

    assert!(!DEFAULT_FRAME_EXTENSION.is_empty());
    assert!(!DEFAULT_STATIC_EXTENSION.is_empty());
};
