// SPDX-License-Identifier: MPL-2.0
//! Drag-to-rotate turntable over a preloaded frame sequence.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── drag_surface - press detection over the frame stack
//!     ├── controls     - 360° / static view toggle
//!     ├── loading      - spinner and slow-load warning
//!     └── error_state  - failed preload panel with retry
//! ```

pub mod component;
pub mod controls;
pub mod drag_surface;
pub mod error_state;
pub mod loading;

pub use component::{Effect, Message, RenderState, State, ViewEnv};
