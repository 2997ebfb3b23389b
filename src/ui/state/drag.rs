// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles press-and-drag interaction state for spinning through frames.

use iced::touch::Finger;

/// Contact point that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pointer {
    #[default]
    Mouse,
    Touch(Finger),
}

/// An active pointer interaction.
///
/// Exists only between press and release. Carries everything needed to turn
/// a later pointer position into a frame index without reading any other
/// state, so coalesced or dropped move events never accumulate error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at press time, in window coordinates.
    pub anchor_client_x: f32,
    /// Frame index shown at press time.
    pub anchor_frame_index: usize,
    /// Width of the rotating surface at press time.
    pub container_width: f32,
}

impl DragSession {
    /// Horizontal displacement since the press.
    #[must_use]
    pub fn delta(&self, client_x: f32) -> f32 {
        client_x - self.anchor_client_x
    }
}

/// Manages the single active drag session and the contact that owns it.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    session: Option<(Pointer, DragSession)>,
}

impl DragState {
    /// Starts a drag session owned by `pointer`.
    ///
    /// Returns `false` and leaves the existing session untouched if one is
    /// already active: only one contact point drives the rotation.
    pub fn start(
        &mut self,
        pointer: Pointer,
        client_x: f32,
        frame_index: usize,
        container_width: f32,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some((
            pointer,
            DragSession {
                anchor_client_x: client_x,
                anchor_frame_index: frame_index,
                container_width,
            },
        ));
        true
    }

    /// Ends the drag session. Idempotent.
    pub fn stop(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether `pointer` started the active session.
    #[must_use]
    pub fn is_owned_by(&self, pointer: Pointer) -> bool {
        self.session.is_some_and(|(owner, _)| owner == pointer)
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref().map(|(_, session)| session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.session().is_none());
        assert!(!state.is_owned_by(Pointer::Mouse));
    }

    #[test]
    fn start_drag_records_anchors() {
        let mut state = DragState::default();
        assert!(state.start(Pointer::Mouse, 100.0, 7, 720.0));

        assert!(state.is_dragging());
        assert_eq!(
            state.session(),
            Some(&DragSession {
                anchor_client_x: 100.0,
                anchor_frame_index: 7,
                container_width: 720.0,
            })
        );
    }

    #[test]
    fn second_press_keeps_first_session() {
        let mut state = DragState::default();
        state.start(Pointer::Touch(Finger(1)), 100.0, 7, 720.0);
        assert!(!state.start(Pointer::Touch(Finger(2)), 300.0, 20, 720.0));

        let session = state.session().unwrap();
        assert_eq!(session.anchor_client_x, 100.0);
        assert_eq!(session.anchor_frame_index, 7);
        assert!(state.is_owned_by(Pointer::Touch(Finger(1))));
        assert!(!state.is_owned_by(Pointer::Touch(Finger(2))));
        assert!(!state.is_owned_by(Pointer::Mouse));
    }

    #[test]
    fn stop_drag_clears_state_and_is_idempotent() {
        let mut state = DragState::default();
        state.start(Pointer::Mouse, 100.0, 0, 720.0);
        state.stop();
        assert!(!state.is_dragging());
        state.stop();
        assert!(!state.is_dragging());
    }

    #[test]
    fn delta_is_relative_to_anchor() {
        let session = DragSession {
            anchor_client_x: 200.0,
            anchor_frame_index: 0,
            container_width: 720.0,
        };
        assert_eq!(session.delta(240.0), 40.0);
        assert_eq!(session.delta(180.0), -20.0);
    }
}
