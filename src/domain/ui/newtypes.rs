// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Sensitivity Bounds
// =============================================================================

/// Drag sensitivity bounds.
pub mod sensitivity_bounds {
    /// Minimum sensitivity accepted from configuration.
    pub const MIN: f32 = 0.1;
    /// Maximum sensitivity accepted from configuration.
    pub const MAX: f32 = 50.0;
    /// Default sensitivity.
    pub const DEFAULT: f32 = 6.0;
}

// =============================================================================
// Sensitivity
// =============================================================================

/// Divisor controlling how many pixels of drag correspond to one frame step.
///
/// Always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensitivity(f32);

impl Sensitivity {
    /// Default sensitivity (6.0).
    pub const DEFAULT: Self = Self(sensitivity_bounds::DEFAULT);

    /// Creates a sensitivity, rejecting zero, negative and non-finite values.
    #[must_use]
    pub fn new(value: f32) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Creates a sensitivity, clamping the value to the configurable range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn clamped(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(sensitivity_bounds::MIN, sensitivity_bounds::MAX))
        } else {
            Self::DEFAULT
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::DEFAULT
    }
}
