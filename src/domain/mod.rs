// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core configurator rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`frame_set`]: Frame addressing ([`FrameSet`](frame_set::FrameSet))
//! - [`rotation`]: Drag displacement to frame index arithmetic
//! - [`ui`]: UI value objects ([`Sensitivity`](ui::Sensitivity),
//!   [`ViewMode`](ui::ViewMode))

pub mod frame_set;
pub mod rotation;
pub mod ui;

pub use frame_set::{FrameSet, InvalidFrameSet};
pub use ui::{Sensitivity, ViewMode};
