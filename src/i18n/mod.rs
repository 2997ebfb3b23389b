// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system. Translation files are embedded from
//! `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Missing keys render as `MISSING: <key>` instead of failing

pub mod fluent;
