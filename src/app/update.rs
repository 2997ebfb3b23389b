// SPDX-License-Identifier: MPL-2.0
//! Translation of component effects into runtime tasks.

use super::{App, Message};
use crate::domain::ViewMode;
use crate::media::{fetch_asset, fetch_frame};
use crate::ui::{configurator, rotator};
use iced::Task;

impl App {
    pub(super) fn handle_rotator_message(&mut self, message: rotator::Message) -> Task<Message> {
        let effect = self.rotator.handle(message);
        self.run_rotator_effect(effect)
    }

    pub(super) fn handle_configurator_message(
        &mut self,
        message: configurator::Message,
    ) -> Task<Message> {
        match self.configurator.handle(message) {
            configurator::Effect::None => Task::none(),
            configurator::Effect::FrameSetChanged { base_path } => self.change_frame_set(base_path),
        }
    }

    pub(super) fn handle_dismiss_notice(&mut self) -> Task<Message> {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
        Task::none()
    }

    /// Loads the frame set of the selected variant.
    pub(super) fn load_selected_variant(&mut self) -> Task<Message> {
        match self.configurator.base_path() {
            Some(base_path) => self.change_frame_set(base_path),
            None => Task::none(),
        }
    }

    /// Hands the frame set rooted at `base_path` to the rotator.
    ///
    /// In static mode the new variant's static image is requested right away.
    fn change_frame_set(&mut self, base_path: String) -> Task<Message> {
        let frame_set = match self.rotation.frame_set(base_path.as_str()) {
            Ok(frame_set) => frame_set,
            Err(err) => {
                tracing::error!(%base_path, error = %err, "rejecting invalid frame set");
                self.push_notice("error-invalid-frame-set");
                return Task::none();
            }
        };

        let preload = self.rotator.set_frame_set(frame_set);
        let mut tasks = vec![self.run_rotator_effect(preload)];
        if self.configurator.view_mode().is_static() {
            let fetch = self.rotator.request_static();
            tasks.push(self.run_rotator_effect(fetch));
        }
        Task::batch(tasks)
    }

    fn run_rotator_effect(&mut self, effect: rotator::Effect) -> Task<Message> {
        match effect {
            rotator::Effect::None => Task::none(),
            rotator::Effect::FetchFrames(requests) => {
                tracing::debug!(frames = requests.len(), "fetching frames");
                let source = &self.source;
                Task::batch(requests.into_iter().map(|request| {
                    Task::perform(fetch_frame(source.clone(), request), |loaded| {
                        Message::Rotator(rotator::Message::FrameLoaded(loaded))
                    })
                }))
            }
            rotator::Effect::FetchStatic(path) => {
                tracing::debug!(%path, "fetching static image");
                let source = self.source.clone();
                Task::perform(fetch_asset(source, path.clone()), move |result| {
                    Message::Rotator(rotator::Message::StaticLoaded { path, result })
                })
            }
            rotator::Effect::SwitchMode(ViewMode::Rotation) => {
                self.configurator.activate_rotation();
                Task::none()
            }
            rotator::Effect::SwitchMode(ViewMode::Static) => {
                self.configurator.activate_static();
                let fetch = self.rotator.request_static();
                self.run_rotator_effect(fetch)
            }
        }
    }

    pub(super) fn push_notice(&mut self, key: &str) {
        if !self.notices.iter().any(|existing| existing == key) {
            self.notices.push(key.to_string());
        }
    }
}
