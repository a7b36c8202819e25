// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Top app bar carrying the window title.
pub fn app_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        shadow: crate::ui::design_tokens::shadow::SM,
        ..Default::default()
    }
}
