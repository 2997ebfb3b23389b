// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The configurator panel sits on the left, the turntable stage fills the
//! rest of the window. Startup warnings stack above the stage.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::styles::container as container_styles;
use crate::ui::{configurator, rotator};
use iced::widget::{Column, Container, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub configurator: &'a configurator::State,
    pub rotator: &'a rotator::State,
    /// i18n key of the warning to show, if any.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = ctx
        .configurator
        .view(configurator::ViewContext { i18n: ctx.i18n })
        .map(Message::Configurator);

    let turntable = ctx
        .rotator
        .view(rotator::ViewEnv {
            i18n: ctx.i18n,
            view_mode: ctx.configurator.view_mode(),
        })
        .map(Message::Rotator);

    let stage = Container::new(turntable)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::stage);

    let mut main = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill);
    if let Some(key) = ctx.notice {
        main = main.push(notice_banner(ctx.i18n, key));
    }
    main = main.push(stage);

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(panel)
        .push(main)
        .into()
}

fn notice_banner(i18n: &I18n, key: &str) -> Element<'static, Message> {
    let banner = ErrorDisplay::new(ErrorSeverity::Warning)
        .title(i18n.tr("notification-warning-heading"))
        .message(i18n.tr(key))
        .action(i18n.tr("notification-dismiss"), Message::DismissNotice)
        .view();

    Container::new(banner).center_x(Length::Fill).into()
}
