// SPDX-License-Identifier: MPL-2.0
//! Overlay control bar drawn on top of the video.
//!
//! Three bands: title and bookmark button at the top, the rewind /
//! play-pause / fast-forward cluster in the middle, and the seek slider with
//! the secondary controls at the bottom. The bar is stateless; everything it
//! shows comes from [`ViewContext`].

use crate::domain::playback::PlaybackRate;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::time_format;
use crate::video_player::PlaybackState;
use iced::widget::{button, column, container, row, slider, text, Column, Space};
use iced::{alignment, Element, Length};

/// Seek slider resolution in percent.
const SEEK_STEP_PERCENT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Bookmark,
    Rewind,
    TogglePlayPause,
    FastForward,
    /// Seek slider moved, in percent (0–100).
    SeekChanged(f64),
    /// Seek slider released.
    SeekReleased,
    ToggleMute,
    /// Volume slider moved, in percent (0–100).
    VolumeChanged(f64),
    ToggleDisplayFormat,
    ToggleRateMenu,
    RateSelected(PlaybackRate),
    ToggleFullscreen,
}

pub struct ViewContext<'a> {
    pub title: &'a str,
    pub state: &'a PlaybackState,
    /// Elapsed (or remaining) time label.
    pub elapsed: String,
    pub total: String,
    pub rate_menu_open: bool,
    pub fullscreen: bool,
}

fn control_button<'a>(
    label: impl text::IntoFragment<'a>,
    message: Message,
) -> button::Button<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::overlay)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;
    let play_label = if state.playing { "Pause" } else { "Play" };

    let top = row![
        text(ctx.title).size(typography::TITLE_SM),
        Space::new().width(Length::Fill),
        control_button("Bookmark", Message::Bookmark),
    ]
    .spacing(spacing::XS)
    .align_y(alignment::Vertical::Center);

    let center = row![
        control_button("<<", Message::Rewind).height(Length::Fixed(sizing::CENTER_BUTTON_HEIGHT)),
        control_button(play_label, Message::TogglePlayPause)
            .height(Length::Fixed(sizing::CENTER_BUTTON_HEIGHT)),
        control_button(">>", Message::FastForward)
            .height(Length::Fixed(sizing::CENTER_BUTTON_HEIGHT)),
    ]
    .spacing(spacing::LG)
    .align_y(alignment::Vertical::Center);

    let seek = row![
        slider(0.0..=100.0, state.played.percent(), Message::SeekChanged)
            .on_release(Message::SeekReleased)
            .step(SEEK_STEP_PERCENT)
            .width(Length::Fill),
        text(ctx.elapsed.clone()).size(typography::CAPTION),
    ]
    .spacing(spacing::XS)
    .align_y(alignment::Vertical::Center);

    let mute_label = if state.muted { "Unmute" } else { "Mute" };
    let fullscreen_label = if ctx.fullscreen {
        "Exit fullscreen"
    } else {
        "Fullscreen"
    };

    let bottom = row![
        control_button(play_label, Message::TogglePlayPause),
        control_button(mute_label, Message::ToggleMute),
        slider(0.0..=100.0, state.volume.percent(), Message::VolumeChanged)
            .step(1.0)
            .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH)),
        control_button(
            format!("{} / {}", ctx.elapsed, ctx.total),
            Message::ToggleDisplayFormat
        ),
        Space::new().width(Length::Fill),
        control_button(
            time_format::format_rate(state.playback_rate),
            Message::ToggleRateMenu
        ),
        control_button(fullscreen_label, Message::ToggleFullscreen),
    ]
    .spacing(spacing::XS)
    .align_y(alignment::Vertical::Center);

    let mut bottom_band = Column::new().spacing(spacing::XXS);
    if ctx.rate_menu_open {
        bottom_band = bottom_band.push(row![
            Space::new().width(Length::Fill),
            rate_menu(state.playback_rate)
        ]);
    }
    bottom_band = bottom_band.push(seek).push(bottom);

    let layout = column![
        container(top).padding(spacing::XS).width(Length::Fill),
        container(center)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        container(bottom_band).padding(spacing::XS).width(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::controls_container)
        .into()
}

/// Rates listed bottom-up, the active one highlighted.
fn rate_menu<'a>(active: PlaybackRate) -> Element<'a, Message> {
    let items = PlaybackRate::ALL.iter().rev().map(|&rate| {
        let item = button(text(time_format::format_rate(rate)).size(typography::BODY))
            .on_press(Message::RateSelected(rate))
            .width(Length::Fill);
        let item = if rate == active {
            item.style(styles::button::selected)
        } else {
            item.style(styles::button::overlay)
        };
        item.into()
    });

    container(Column::with_children(items).spacing(spacing::XXS))
        .width(Length::Fixed(sizing::RATE_MENU_WIDTH))
        .padding(spacing::XXS)
        .style(styles::overlay::menu)
        .into()
}
