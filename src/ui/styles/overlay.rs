// SPDX-License-Identifier: MPL-2.0
//! Styles for what is drawn on top of the video.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scrim() -> Color {
    Color {
        a: opacity::SCRIM,
        ..BLACK
    }
}

/// Translucent band behind the control rows.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scrim())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Player surface behind the frame (letterboxing).
#[must_use]
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Rate menu popping up above the rate button.
#[must_use]
pub fn menu(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::GRAY_900
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// One-line player error banner.
#[must_use]
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
