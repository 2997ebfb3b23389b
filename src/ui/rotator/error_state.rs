// SPDX-License-Identifier: MPL-2.0
//! Error display state sub-component.
//!
//! Shown in place of the frame stack when a preload fails. Drag input stays
//! disabled until a new load succeeds.

use crate::error::AssetLoadFailure;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use iced::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    friendly_key: &'static str,
    details: String,
    show_details: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleDetails,
}

impl State {
    #[must_use]
    pub fn new(friendly_key: &'static str, details: String) -> Self {
        Self {
            friendly_key,
            details,
            show_details: false,
        }
    }

    /// Error state for a failed frame preload.
    #[must_use]
    pub fn from_failure(failure: AssetLoadFailure) -> Self {
        Self::new("error-load-frames", failure.to_string())
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}

/// Renders the error panel with a retry action.
pub fn view<'a, M: Clone + 'static>(
    state: &State,
    i18n: &I18n,
    on_retry: M,
    on_toggle_details: M,
) -> Element<'a, M> {
    let display = ErrorDisplay::new(ErrorSeverity::Error)
        .title(i18n.tr("error-load-frames-heading"))
        .message(i18n.tr(state.friendly_key))
        .details(state.details.clone())
        .details_visible(state.show_details)
        .details_labels(
            i18n.tr("error-details-show"),
            i18n.tr("error-details-hide"),
            i18n.tr("error-details-technical-heading"),
        )
        .action(i18n.tr("rotator-retry-button"), on_retry)
        .on_toggle_details(on_toggle_details);

    centered_error_view(display)
}
