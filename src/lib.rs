// SPDX-License-Identifier: MPL-2.0
//! `iced_turntable` is a 360° product configurator built with the Iced GUI
//! framework.
//!
//! A product variant is shown as a sequence of pre-rendered frames that the
//! user spins by dragging. Every frame of a variant is decoded before
//! interaction is enabled, so rotation never stalls on I/O.
//!
//! The core is usable without a window:
//!
//! - [`media::AssetPreloader`] fetches and tracks a whole frame set
//! - [`ui::rotator::State`] maps drags onto frame indices
//! - [`domain`] holds the pure frame addressing and rotation math

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
