// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes `State`, `Message`, an `Effect` returned from `handle`, and `view`.
//!
//! # Components
//!
//! - [`rotator`] - Drag-to-rotate turntable with loading and error states
//! - [`configurator`] - Variant list, price and view mode
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Drag session and frame position
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod configurator;
pub mod design_tokens;
pub mod rotator;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
