// SPDX-License-Identifier: MPL-2.0
//! Bookmark grid below the player.

use crate::media::BookmarkStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, text, Row};
use iced::{Element, Length};

/// Renders one card per bookmark in capture order, wrapping onto new rows.
///
/// `handles` holds the decoded thumbnail image for each bookmark, at the
/// same index. `on_select` builds the message sent when a card is clicked.
pub fn view<'a, Message: Clone + 'a>(
    store: &'a BookmarkStore,
    handles: &'a [image::Handle],
    on_select: fn(usize) -> Message,
) -> Element<'a, Message> {
    if store.is_empty() {
        return container(text("No bookmarks yet").size(typography::BODY))
            .padding(spacing::MD)
            .into();
    }

    let cards = store
        .iter()
        .zip(handles)
        .enumerate()
        .map(|(index, (bookmark, handle))| {
            let content = column![
                image(handle.clone())
                    .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT)),
                text(bookmark.label()).size(typography::CAPTION),
            ]
            .spacing(spacing::XXS);

            button(content)
                .on_press(on_select(index))
                .padding(spacing::XS)
                .style(styles::button::card)
                .into()
        });

    container(
        Row::with_children(cards)
            .spacing(spacing::SM)
            .wrap()
            .vertical_spacing(spacing::SM),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}
