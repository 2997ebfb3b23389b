// SPDX-License-Identifier: MPL-2.0
//! Rotator component encapsulating state and update logic.
//!
//! Drag input is only accepted once every frame of the current frame set is
//! decoded. While a drag session exists the component subscribes to
//! window-wide pointer events; the subscription disappears with the session.

use super::drag_surface::{DragSurface, Press};
use super::{controls, error_state, loading};
use crate::domain::{FrameSet, Sensitivity, ViewMode};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::{
    AssetPreloader, FrameLoaded, FrameRequest, ImageData, LoadOutcome, LoadState,
    StaticImageCache,
};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::{DragState, FramePosition, Pointer};
use crate::ui::widgets::AnimatedSpinner;
use fluent_bundle::FluentValue;
use iced::widget::{image, Column, Container, Stack, Text};
use iced::{alignment, event, mouse, time, touch, window, ContentFit, Element, Event, Length};
use iced::{Subscription, Theme};
use std::time::Duration;

/// Spinner refresh period while loading.
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Messages emitted by the rotator and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    PressStarted(Press),
    /// Window-wide motion of `pointer`.
    PointerMoved { pointer: Pointer, client_x: f32 },
    /// `pointer` was released or lost.
    PressEnded { pointer: Pointer },
    FrameLoaded(FrameLoaded),
    StaticLoaded {
        path: String,
        result: Result<ImageData>,
    },
    Controls(controls::Message),
    ErrorState(error_state::Message),
    Retry,
    SpinnerTick,
}

/// Side effects the application should perform after a rotator update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch every frame of a new preload batch.
    FetchFrames(Vec<FrameRequest>),
    /// Fetch the static image at this asset path.
    FetchStatic(String),
    /// The user asked for another view mode.
    SwitchMode(ViewMode),
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub load_state: LoadState,
    pub current_frame_index: usize,
    pub view_mode: ViewMode,
    /// `frame_image_paths[i]` is the asset path of internal frame `i`.
    pub frame_image_paths: Vec<String>,
    pub static_image_path: Option<String>,
}

/// Lazily fetched static image of the current frame set.
#[derive(Debug, Clone)]
enum StaticImage {
    Idle,
    Loading(String),
    Ready { path: String, image: ImageData },
    Failed { path: String, details: String },
}

/// Environment information required to render the rotator.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub view_mode: ViewMode,
}

/// Complete rotator component state.
#[derive(Debug)]
pub struct State {
    frame_set: Option<FrameSet>,
    sensitivity: Sensitivity,
    preloader: AssetPreloader,
    position: FramePosition,
    drag: DragState,
    loading: loading::State,
    error: Option<error_state::State>,
    static_cache: StaticImageCache,
    static_image: StaticImage,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Sensitivity::DEFAULT)
    }
}

impl State {
    #[must_use]
    pub fn new(sensitivity: Sensitivity) -> Self {
        Self {
            frame_set: None,
            sensitivity,
            preloader: AssetPreloader::new(),
            position: FramePosition::default(),
            drag: DragState::default(),
            loading: loading::State::default(),
            error: None,
            static_cache: StaticImageCache::default(),
            static_image: StaticImage::Idle,
        }
    }

    /// Switches to a new frame set and restarts the preload.
    ///
    /// Passing the frame set already shown only reloads it after a failed
    /// preload; otherwise it does nothing.
    pub fn set_frame_set(&mut self, frame_set: FrameSet) -> Effect {
        if self.frame_set.as_ref() == Some(&frame_set) {
            return self.retry();
        }

        tracing::debug!(
            base_path = frame_set.base_path(),
            frame_count = frame_set.frame_count(),
            "frame set changed"
        );
        self.position.clamp_to(frame_set.frame_count());
        self.static_image = StaticImage::Idle;
        self.frame_set = Some(frame_set);
        self.start_preload()
    }

    /// Reloads the current frame set after a failure.
    pub fn retry(&mut self) -> Effect {
        if !self.preloader.state().is_failed() {
            return Effect::None;
        }
        tracing::info!("retrying frame preload");
        if matches!(self.static_image, StaticImage::Failed { .. }) {
            self.static_image = StaticImage::Idle;
        }
        self.start_preload()
    }

    fn start_preload(&mut self) -> Effect {
        let Some(frame_set) = &self.frame_set else {
            return Effect::None;
        };

        self.drag.stop();
        self.error = None;

        let plan = self.preloader.begin(frame_set);
        if let Some(outcome) = plan.outcome {
            self.settle(outcome);
            return Effect::None;
        }

        self.loading.handle(loading::Message::Start);
        Effect::FetchFrames(plan.requests)
    }

    pub fn set_sensitivity(&mut self, sensitivity: Sensitivity) {
        self.sensitivity = sensitivity;
    }

    #[must_use]
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Begins a mouse drag session. Ignored unless frames are ready and no
    /// session is active. Returns whether a session started.
    pub fn on_press_start(&mut self, client_x: f32, container_width: f32) -> bool {
        self.press_start(Pointer::Mouse, client_x, container_width)
    }

    fn press_start(&mut self, pointer: Pointer, client_x: f32, container_width: f32) -> bool {
        if !self.preloader.state().is_ready() {
            return false;
        }
        let started = self
            .drag
            .start(pointer, client_x, self.position.index(), container_width);
        if started {
            tracing::trace!(?pointer, client_x, frame = self.position.index(), "drag started");
        }
        started
    }

    /// Applies pointer motion to the active drag session. Returns whether
    /// the visible frame changed.
    pub fn on_move(&mut self, client_x: f32) -> bool {
        let Some(session) = self.drag.session().copied() else {
            return false;
        };
        let frame_count = self.frame_count();
        self.position
            .apply_drag(&session, client_x, frame_count, self.sensitivity)
    }

    /// Ends the drag session. Idempotent.
    pub fn on_press_end(&mut self) {
        if self.drag.is_dragging() {
            tracing::trace!(frame = self.position.index(), "drag ended");
        }
        self.drag.stop();
    }

    /// Starts fetching the static image of the current frame set, unless it
    /// is cached, already in flight, or already failed.
    pub fn request_static(&mut self) -> Effect {
        let Some(frame_set) = &self.frame_set else {
            return Effect::None;
        };
        let path = frame_set.static_path();

        match &self.static_image {
            StaticImage::Loading(current)
            | StaticImage::Ready { path: current, .. }
            | StaticImage::Failed { path: current, .. }
                if *current == path =>
            {
                return Effect::None;
            }
            _ => {}
        }

        if let Some(image) = self.static_cache.get(&path) {
            self.static_image = StaticImage::Ready { path, image };
            return Effect::None;
        }

        self.static_image = StaticImage::Loading(path.clone());
        Effect::FetchStatic(path)
    }

    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.position.index()
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.preloader.state()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn frame_set(&self) -> Option<&FrameSet> {
        self.frame_set.as_ref()
    }

    #[must_use]
    pub fn preloader(&self) -> &AssetPreloader {
        &self.preloader
    }

    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        self.error.as_ref()
    }

    /// Decoded static image, once available.
    #[must_use]
    pub fn static_image(&self) -> Option<&ImageData> {
        match &self.static_image {
            StaticImage::Ready { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Technical details of a failed static image fetch.
    #[must_use]
    pub fn static_error(&self) -> Option<&str> {
        match &self.static_image {
            StaticImage::Failed { details, .. } => Some(details),
            _ => None,
        }
    }

    #[must_use]
    pub fn render_state(&self, view_mode: ViewMode) -> RenderState {
        RenderState {
            load_state: self.load_state(),
            current_frame_index: self.position.index(),
            view_mode,
            frame_image_paths: self
                .frame_set
                .as_ref()
                .map(FrameSet::frame_paths)
                .unwrap_or_default(),
            static_image_path: self.frame_set.as_ref().map(FrameSet::static_path),
        }
    }

    fn frame_count(&self) -> usize {
        self.frame_set.as_ref().map_or(0, FrameSet::frame_count)
    }

    fn settle(&mut self, outcome: LoadOutcome) {
        self.loading.handle(loading::Message::Stop);
        match outcome {
            LoadOutcome::Ready => self.error = None,
            LoadOutcome::Failed(failure) => {
                self.drag.stop();
                self.error = Some(error_state::State::from_failure(failure));
            }
        }
    }

    fn record_frame(&mut self, loaded: FrameLoaded) {
        if let Some(outcome) = self.preloader.record(loaded) {
            self.settle(outcome);
        }
    }

    fn record_static(&mut self, path: String, result: Result<ImageData>) {
        let awaited = matches!(&self.static_image, StaticImage::Loading(p) if *p == path);

        match result {
            Ok(image) => {
                if !self.static_cache.insert(path.clone(), image.clone()) {
                    tracing::debug!(%path, "static image exceeds cache budget");
                }
                if awaited {
                    self.static_image = StaticImage::Ready { path, image };
                }
            }
            Err(err) => {
                tracing::warn!(%path, error = %err, "failed to load static image");
                if awaited {
                    self.static_image = StaticImage::Failed {
                        path,
                        details: err.to_string(),
                    };
                }
            }
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PressStarted(press) => {
                self.press_start(press.pointer, press.client_x, press.container_width);
                Effect::None
            }
            // Other contacts never steer or end the session.
            Message::PointerMoved { pointer, client_x } => {
                if self.drag.is_owned_by(pointer) {
                    self.on_move(client_x);
                }
                Effect::None
            }
            Message::PressEnded { pointer } => {
                if self.drag.is_owned_by(pointer) {
                    self.on_press_end();
                }
                Effect::None
            }
            Message::FrameLoaded(loaded) => {
                self.record_frame(loaded);
                Effect::None
            }
            Message::StaticLoaded { path, result } => {
                self.record_static(path, result);
                Effect::None
            }
            Message::Controls(controls::Message::ActivateRotation) => {
                Effect::SwitchMode(ViewMode::Rotation)
            }
            Message::Controls(controls::Message::ActivateStatic) => {
                Effect::SwitchMode(ViewMode::Static)
            }
            Message::ErrorState(msg) => {
                if let Some(error) = &mut self.error {
                    error.handle(msg);
                }
                Effect::None
            }
            Message::Retry => self.retry(),
            Message::SpinnerTick => {
                if self.loading.handle(loading::Message::SpinnerTick) == loading::Effect::TimedOut
                {
                    let (settled, total) = self.preloader.progress().unwrap_or_default();
                    tracing::warn!(
                        generation = %self.preloader.generation(),
                        settled,
                        total,
                        "frame preload is taking longer than expected"
                    );
                }
                Effect::None
            }
        }
    }

    /// Pointer tracking while dragging, spinner ticks while loading.
    pub fn subscription(&self) -> Subscription<Message> {
        let pointer = if self.drag.is_dragging() {
            event::listen_with(pointer_event)
        } else {
            Subscription::none()
        };

        let spinner = if self.loading.is_loading() {
            time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([pointer, spinner])
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        match self.preloader.state() {
            LoadState::NotStarted | LoadState::Loading => self.loading_view(env.i18n),
            LoadState::Failed(_) => match &self.error {
                Some(error) => error_state::view(
                    error,
                    env.i18n,
                    Message::Retry,
                    Message::ErrorState(error_state::Message::ToggleDetails),
                ),
                None => self.loading_view(env.i18n),
            },
            LoadState::Ready => {
                let content = match env.view_mode {
                    ViewMode::Rotation => self.frame_stack(env.i18n),
                    ViewMode::Static => self.static_view(env.i18n),
                };

                let mode_controls = controls::view(controls::ViewContext {
                    i18n: env.i18n,
                    view_mode: env.view_mode,
                })
                .map(Message::Controls);

                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(content)
                    .push(
                        Container::new(mode_controls)
                            .height(Length::Fill)
                            .padding(spacing::XS)
                            .align_y(alignment::Vertical::Center),
                    )
                    .into()
            }
        }
    }

    /// Every decoded frame stays mounted; only the current one is opaque.
    fn frame_stack<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let current = self.position.index();
        let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

        for index in 0..self.frame_count() {
            if let Some(frame) = self.preloader.frame(index) {
                let opacity = if index == current { 1.0 } else { 0.0 };
                stack = stack.push(
                    image(frame.handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .content_fit(ContentFit::Contain)
                        .opacity(opacity),
                );
            }
        }

        let hint = Container::new(Text::new(i18n.tr("rotator-drag-hint")).size(typography::CAPTION))
            .center_x(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_y(alignment::Vertical::Bottom);

        stack
            .push(hint)
            .push(
                DragSurface::new(true, self.drag.is_dragging(), Message::PressStarted)
                    .into_element(),
            )
            .into()
    }

    fn static_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.static_image {
            StaticImage::Ready { image: data, .. } => image(data.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            StaticImage::Failed { .. } => Text::new(i18n.tr("error-load-static"))
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::ERROR_500),
                })
                .into(),
            StaticImage::Idle | StaticImage::Loading(_) => {
                Text::new(i18n.tr("rotator-loading-static"))
                    .size(typography::BODY)
                    .into()
            }
        };

        Container::new(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn loading_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let spinner =
            AnimatedSpinner::new(palette::PRIMARY_500, self.loading.spinner_rotation())
                .into_element();

        let mut column = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(Text::new(i18n.tr("rotator-loading")).size(typography::BODY));

        if let Some((settled, total)) = self.preloader.progress() {
            let progress = i18n.tr_with_args(
                "rotator-loading-progress",
                &[
                    ("settled", FluentValue::from(settled)),
                    ("total", FluentValue::from(total)),
                ],
            );
            column = column.push(Text::new(progress).size(typography::CAPTION));
        }

        Container::new(column)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

/// Maps window-wide pointer events to drag messages.
fn pointer_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved {
            pointer: Pointer::Mouse,
            client_x: position.x,
        }),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PressEnded {
                pointer: Pointer::Mouse,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => Some(Message::PointerMoved {
            pointer: Pointer::Touch(id),
            client_x: position.x,
        }),
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => Some(Message::PressEnded {
            pointer: Pointer::Touch(id),
        }),
        _ => None,
    }
}
