// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure interaction state for the turntable, kept apart from widgets so it
//! can be tested without a renderer.

pub mod drag;
pub mod rotation;

pub use drag::{DragSession, DragState, Pointer};
pub use rotation::FramePosition;
