// SPDX-License-Identifier: MPL-2.0
//! Which of the two mutually exclusive presentations is active.

/// Rotating frame sequence or single static alternate image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The 360° frame sequence.
    #[default]
    Rotation,
    /// The fixed alternate (cockpit) image.
    Static,
}

impl ViewMode {
    /// Switches to the rotation view. Idempotent.
    pub fn activate_rotation(&mut self) {
        *self = ViewMode::Rotation;
    }

    /// Switches to the static view. Idempotent.
    pub fn activate_static(&mut self) {
        *self = ViewMode::Static;
    }

    #[must_use]
    pub fn is_rotation(self) -> bool {
        matches!(self, ViewMode::Rotation)
    }

    #[must_use]
    pub fn is_static(self) -> bool {
        matches!(self, ViewMode::Static)
    }
}
