// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

/// Style for the selected button of a toggle group.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light(theme) {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for the unselected buttons of a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = is_light(theme);
    let (bg_color, text_color) = if light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (
            if light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            },
            palette::PRIMARY_500,
            shadow::SM,
        ),
        button::Status::Disabled => (bg_color, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (bg_color, palette::GRAY_400, shadow::NONE)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Style for a row of the variant list.
///
/// Rows are flat; the selected one gets a brand-colored outline and a faint
/// brand tint.
pub fn variant_row(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.palette().text;
        let hovered = status == button::Status::Hovered;

        let background = match (selected, hovered) {
            (true, _) => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            (false, true) => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            (false, false) => None,
        };

        let border = if selected {
            Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            }
        } else {
            Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            }
        };

        button::Style {
            background,
            text_color,
            border,
            shadow: if hovered { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}
