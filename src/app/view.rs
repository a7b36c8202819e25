// SPDX-License-Identifier: MPL-2.0
//! Application view: app bar, player area with its overlay, bookmark grid.

use super::Message;
use crate::media::BookmarkStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{bookmarks, controls, styles};
use iced::widget::{
    button, center, column, container, image, mouse_area, row, scrollable, text, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

/// Window and app bar title.
pub const APP_TITLE: &str = "Video Player";

pub(super) struct ViewContext<'a> {
    /// `None` when no source was configured.
    pub controls: Option<controls::ViewContext<'a>>,
    pub controls_visible: bool,
    pub frame: Option<&'a image::Handle>,
    pub bookmarks: &'a BookmarkStore,
    pub bookmark_images: &'a [image::Handle],
    pub fullscreen: bool,
    pub last_error: Option<&'a str>,
}

pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let fullscreen = ctx.fullscreen;
    let bookmarks = ctx.bookmarks;
    let bookmark_images = ctx.bookmark_images;
    let player = player_area(ctx);

    if fullscreen {
        return player;
    }

    let app_bar = container(text(APP_TITLE).size(typography::TITLE_MD))
        .padding([0.0, spacing::MD])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::APP_BAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(styles::container::app_bar);

    let grid = scrollable(bookmarks::view(
        bookmarks,
        bookmark_images,
        Message::BookmarkClicked,
    ))
    .width(Length::Fill)
    .height(Length::FillPortion(1));

    column![
        app_bar,
        container(player)
            .width(Length::Fill)
            .height(Length::FillPortion(3)),
        grid,
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn player_area(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let video: Element<'_, Message> = match (ctx.frame, ctx.controls.is_some()) {
        (Some(handle), _) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, true) => center(text("Loading…").size(typography::BODY)).into(),
        (None, false) => center(
            text("No video source. Pass a file or URL on the command line, or set [player] source in settings.toml.")
                .size(typography::BODY),
        )
        .into(),
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            container(video)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::video_surface),
        );

    if let Some(controls_ctx) = ctx.controls {
        if ctx.controls_visible {
            stack = stack.push(controls::view(controls_ctx).map(Message::Controls));
        }
    }

    if let Some(error) = ctx.last_error {
        let banner = container(
            row![
                text(error).size(typography::BODY),
                Space::new().width(Length::Fill),
                button(text("Dismiss").size(typography::CAPTION))
                    .on_press(Message::DismissError)
                    .style(styles::button::overlay),
            ]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
        )
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::overlay::error_banner);

        stack = stack.push(
            container(banner)
                .padding(spacing::MD)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Top),
        );
    }

    mouse_area(stack)
        .on_move(|_| Message::PointerMoved)
        .into()
}
