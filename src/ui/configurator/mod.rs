// SPDX-License-Identifier: MPL-2.0
//! Product configurator side panel.
//!
//! Owns the selected variant and the active [`ViewMode`](crate::domain::ViewMode).
//! Selecting a variant emits [`Effect::FrameSetChanged`] so the application
//! can hand the new frame set to the rotator.

pub mod component;
pub mod variant_list;

pub use component::{Effect, Message, State, ViewContext};
