// SPDX-License-Identifier: MPL-2.0
//! Button styles for the overlay control bar and bookmark cards.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Flat button drawn over the video: transparent until hovered.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..BLACK
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Highlighted state, used for the active playback rate.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Bookmark thumbnail card below the player.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => extended.background.strong.color,
    };

    button::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: extended.background.weak.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}
