// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across views.
//!
//! - [`error_display`] - Error and warning panels with expandable technical
//!   details and i18n labels

pub mod error_display;
