// SPDX-License-Identifier: MPL-2.0
//! Current frame position of the turntable.
//!
//! The index always stays within `[0, frame_count)`. It only moves in
//! response to a drag; switching views or reloading frames leaves it alone.
//!
//! # Example
//!
//! ```
//! use iced_turntable::domain::Sensitivity;
//! use iced_turntable::ui::state::{DragSession, FramePosition};
//!
//! let mut position = FramePosition::default();
//! let session = DragSession {
//!     anchor_client_x: 0.0,
//!     anchor_frame_index: 0,
//!     container_width: 720.0,
//! };
//! position.apply_drag(&session, 40.0, 36, Sensitivity::DEFAULT);
//! assert_eq!(position.index(), 12);
//! assert_eq!(position.file_index(), 13);
//! ```

use super::drag::DragSession;
use crate::domain::rotation::{frame_shift, wrap_frame_index};
use crate::domain::Sensitivity;

/// Internal 0-based index of the visible frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramePosition(usize);

impl FramePosition {
    /// Returns the 0-based index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the 1-based index used in frame file names.
    #[must_use]
    pub fn file_index(self) -> usize {
        self.0 + 1
    }

    /// Moves to the frame reached by dragging from the session anchor to
    /// `client_x`. Returns `true` if the index changed.
    pub fn apply_drag(
        &mut self,
        session: &DragSession,
        client_x: f32,
        frame_count: usize,
        sensitivity: Sensitivity,
    ) -> bool {
        let shift = frame_shift(
            session.delta(client_x),
            session.container_width,
            frame_count,
            sensitivity,
        );
        let next = wrap_frame_index(session.anchor_frame_index, shift, frame_count);
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    /// Pulls the index back into range after the frame count shrank.
    pub fn clamp_to(&mut self, frame_count: usize) {
        if frame_count == 0 {
            self.0 = 0;
        } else if self.0 >= frame_count {
            self.0 %= frame_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(anchor_x: f32, anchor_frame: usize) -> DragSession {
        DragSession {
            anchor_client_x: anchor_x,
            anchor_frame_index: anchor_frame,
            container_width: 720.0,
        }
    }

    #[test]
    fn default_is_first_frame() {
        let position = FramePosition::default();
        assert_eq!(position.index(), 0);
        assert_eq!(position.file_index(), 1);
    }

    #[test]
    fn drag_right_advances() {
        let mut position = FramePosition::default();
        assert!(position.apply_drag(&session(100.0, 0), 140.0, 36, Sensitivity::DEFAULT));
        assert_eq!(position.index(), 12);
    }

    #[test]
    fn drag_left_wraps_to_last_frame() {
        let mut position = FramePosition::default();
        position.apply_drag(&session(100.0, 0), 99.0, 36, Sensitivity::DEFAULT);
        assert_eq!(position.index(), 35);
    }

    #[test]
    fn result_depends_only_on_final_position() {
        // Intermediate moves do not accumulate: only anchor and final X matter.
        let mut stepped = FramePosition::default();
        let drag = session(0.0, 5);
        for x in [10.0, -30.0, 55.0, 20.0] {
            stepped.apply_drag(&drag, x, 36, Sensitivity::DEFAULT);
        }
        let mut direct = FramePosition::default();
        direct.apply_drag(&drag, 20.0, 36, Sensitivity::DEFAULT);
        assert_eq!(stepped, direct);
    }

    #[test]
    fn no_change_reports_false() {
        let mut position = FramePosition::default();
        assert!(!position.apply_drag(&session(0.0, 0), 1.0, 36, Sensitivity::DEFAULT));
    }

    #[test]
    fn clamp_to_smaller_set() {
        let mut position = FramePosition::default();
        position.apply_drag(&session(0.0, 30), 0.0, 36, Sensitivity::DEFAULT);
        assert_eq!(position.index(), 30);
        position.clamp_to(24);
        assert_eq!(position.index(), 6);
        position.clamp_to(0);
        assert_eq!(position.index(), 0);
    }
}
