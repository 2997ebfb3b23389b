// SPDX-License-Identifier: MPL-2.0
//! Variant selection and view mode ownership.

use super::variant_list;
use crate::catalog::{Catalog, Variant};
use crate::domain::ViewMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{rule, scrollable, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectVariant(usize),
}

/// Side effects the application must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The selected variant changed; its frame set lives under `base_path`.
    FrameSetChanged { base_path: String },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    catalog: Catalog,
    selected: usize,
    view_mode: ViewMode,
}

impl State {
    /// Starts on the first variant in rotation mode.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: 0,
            view_mode: ViewMode::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_variant(&self) -> Option<&Variant> {
        self.catalog.variant(self.selected)
    }

    /// Base path of the selected variant's frames.
    #[must_use]
    pub fn base_path(&self) -> Option<String> {
        self.selected_variant().map(Variant::base_path)
    }

    /// Displayed price of the selected variant.
    #[must_use]
    pub fn price(&self) -> &str {
        self.selected_variant().map_or("", |v| v.price.as_str())
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn activate_rotation(&mut self) {
        self.view_mode.activate_rotation();
    }

    pub fn activate_static(&mut self) {
        self.view_mode.activate_static();
    }

    /// Selects a variant by index.
    ///
    /// Reselecting the current variant reports its frame set again so a
    /// failed load can be recovered. An unknown index changes nothing.
    pub fn select_variant(&mut self, index: usize) -> Effect {
        let Some(variant) = self.catalog.variant(index) else {
            tracing::warn!(index, variants = self.catalog.variants.len(), "ignoring unknown variant");
            return Effect::None;
        };

        let base_path = variant.base_path();
        tracing::info!(variant = %variant.id, price = %variant.price, "variant selected");
        self.selected = index;
        Effect::FrameSetChanged { base_path }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectVariant(index) => self.select_variant(index),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let header = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("configurator-model-heading")).size(typography::CAPTION))
            .push(Text::new(self.catalog.model_name.as_str()).size(typography::TITLE_MD))
            .push(
                Text::new(format!(
                    "{}: {}",
                    i18n.tr("configurator-price-label"),
                    self.price()
                ))
                .size(typography::TITLE_SM),
            );

        let list = variant_list::view(&self.catalog.variants, self.selected, i18n);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(rule::horizontal(1))
            .push(Text::new(i18n.tr("configurator-colors-heading")).size(typography::BODY_LG))
            .push(scrollable(list).height(Length::Fill));

        Container::new(content)
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .padding(spacing::MD)
            .style(container_styles::panel)
            .into()
    }
}
