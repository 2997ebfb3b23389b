// SPDX-License-Identifier: MPL-2.0
//! View mode toggle: 360° rotation and the static cockpit image.

use crate::domain::ViewMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, tooltip, Column, Container, Text};
use iced::{Element, Length};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ActivateRotation,
    ActivateStatic,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let rotation = mode_button(
        ctx.i18n.tr("rotator-mode-rotation"),
        ctx.i18n.tr("rotator-mode-rotation-tooltip"),
        ctx.view_mode.is_rotation(),
        Message::ActivateRotation,
    );
    let fixed = mode_button(
        ctx.i18n.tr("rotator-mode-static"),
        ctx.i18n.tr("rotator-mode-static-tooltip"),
        ctx.view_mode.is_static(),
        Message::ActivateStatic,
    );

    Column::new()
        .spacing(spacing::XXS)
        .push(rotation)
        .push(fixed)
        .into()
}

fn mode_button<'a>(
    label: String,
    hint: String,
    active: bool,
    message: Message,
) -> Element<'a, Message> {
    let style = if active {
        button_styles::selected
    } else {
        button_styles::unselected
    };

    let btn = button(
        Container::new(Text::new(label).size(typography::CAPTION))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::MODE_BUTTON))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(style)
    .on_press(message);

    tooltip(btn, Text::new(hint), tooltip::Position::Right).into()
}
