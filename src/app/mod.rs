// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the configurator and
//! the turntable.
//!
//! The `App` struct wires together the components (configurator, rotator,
//! localization) and translates their effects into runtime tasks such as
//! frame fetches.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, Catalog};
use crate::config::{self, Config, RotationConfig};
use crate::i18n::fluent::I18n;
use crate::media::{FrameSource, FsFrameSource};
use crate::ui::theming::ThemeMode;
use crate::ui::{configurator, rotator};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    rotation: RotationConfig,
    configurator: configurator::State,
    rotator: rotator::State,
    source: Arc<dyn FrameSource>,
    /// i18n keys of startup warnings, oldest first.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.configurator.selected_index())
            .field("view_mode", &self.configurator.view_mode())
            .field("load_state", &self.rotator.load_state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the catalog, then starts preloading the first variant.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let asset_root = flags
            .assets
            .map(PathBuf::from)
            .unwrap_or_else(|| config.assets.root());
        let (catalog, catalog_warning) = catalog::load(&asset_root);
        tracing::info!(
            assets = %asset_root.display(),
            model = %catalog.model_name,
            variants = catalog.variants.len(),
            "starting configurator"
        );

        let source: Arc<dyn FrameSource> = Arc::new(FsFrameSource::new(asset_root));
        let mut app = Self::with_parts(i18n, &config, catalog, source);

        if let Some(key) = config_warning {
            app.push_notice(&key);
        }
        if let Some(key) = catalog_warning {
            app.push_notice(key);
        }

        let task = app.load_selected_variant();
        (app, task)
    }

    /// Assembles the application without touching the filesystem.
    fn with_parts(
        i18n: I18n,
        config: &Config,
        catalog: Catalog,
        source: Arc<dyn FrameSource>,
    ) -> Self {
        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            rotation: config.rotation.clone(),
            configurator: configurator::State::new(catalog),
            rotator: rotator::State::new(config.rotation.sensitivity()),
            source,
            notices: Vec::new(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.configurator.selected_variant() {
            Some(variant) => format!(
                "{} {} - {}",
                self.configurator.catalog().model_name,
                variant.name,
                app_name
            ),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Rotator(msg) => self.handle_rotator_message(msg),
            Message::Configurator(msg) => self.handle_configurator_message(msg),
            Message::DismissNotice => self.handle_dismiss_notice(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            configurator: &self.configurator,
            rotator: &self.rotator,
            notice: self.notices.first().map(String::as_str),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        self.rotator.subscription().map(Message::Rotator)
    }
}
