// SPDX-License-Identifier: MPL-2.0
//! Selectable list of colors and packages.

use super::component::Message;
use crate::catalog::Variant;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, text, Column, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

const CHECK_MARK: &str = "✓";

/// Label of a variant's extra cost.
pub fn add_price_label(variant: &Variant, i18n: &I18n) -> String {
    if variant.is_included() {
        i18n.tr("configurator-add-price-none")
    } else {
        i18n.tr_with_args(
            "configurator-add-price",
            &[("amount", FluentValue::from(variant.add_price.as_str()))],
        )
    }
}

pub fn view<'a>(variants: &'a [Variant], selected: usize, i18n: &'a I18n) -> Element<'a, Message> {
    variants
        .iter()
        .enumerate()
        .fold(
            Column::new().spacing(spacing::XS).width(Length::Fill),
            |column, (index, variant)| column.push(row(variant, index, index == selected, i18n)),
        )
        .into()
}

fn row<'a>(variant: &'a Variant, index: usize, selected: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(variant.name.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(add_price_label(variant, i18n))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    if !variant.description.is_empty() {
        details = details.push(Text::new(variant.description.as_str()).size(typography::BODY_SM));
    }

    let marker: Element<'a, Message> = if selected {
        Text::new(CHECK_MARK)
            .size(typography::TITLE_SM)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_500),
            })
            .into()
    } else {
        Space::new().width(Length::Shrink).into()
    };

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(details)
        .push(marker);

    button(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(button_styles::variant_row(selected))
        .on_press(Message::SelectVariant(index))
        .into()
}
