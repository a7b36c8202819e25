// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring.
//!
//! `App` owns the transport controller, the bookmark store and the control
//! bar state, and bridges them to the embedded player subscription and the
//! window. All transport logic lives in [`TransportController`]; this module
//! only routes messages and pushes the resulting props to the player.

mod fullscreen;
mod message;
mod subscription;
mod update;
mod view;

pub use fullscreen::WindowFullscreen;
pub use message::{Flags, Message};
pub use view::APP_TITLE;

use crate::config::{self, Config};
use crate::media::{BookmarkStore, MediaSource};
use crate::ui::controls;
use crate::ui::state::ControlsVisibility;
use crate::video_player::{DecodedFrame, PlayerHandle, PlayerProps, TransportController};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    config: Config,
    source: Option<MediaSource>,
    /// Short source name shown in the control bar.
    source_title: String,
    transport: TransportController,
    player: PlayerHandle,
    pushed_props: Option<PlayerProps>,
    controls: ControlsVisibility,
    bookmarks: BookmarkStore,
    /// Decoded thumbnails, same order as `bookmarks`.
    bookmark_images: Vec<image::Handle>,
    current_frame: Option<DecodedFrame>,
    frame_handle: Option<image::Handle>,
    fullscreen: WindowFullscreen,
    rate_menu_open: bool,
    last_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("player", &self.player)
            .field("bookmarks", &self.bookmarks.len())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the media source: command line first, then configuration.
fn resolve_source(cli: Option<&str>, config: &Config) -> Option<MediaSource> {
    cli.or(config.player.source.as_deref())
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(MediaSource::parse)
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            log::warn!("{warning}");
        }
        (Self::with_config(config, flags.source.as_deref()), Task::none())
    }

    fn with_config(config: Config, cli_source: Option<&str>) -> Self {
        let source = resolve_source(cli_source, &config);
        match &source {
            Some(source) => log::info!("Opening {source}"),
            None => log::info!("No media source configured"),
        }

        let idle_ticks = config
            .controls
            .idle_ticks
            .unwrap_or(config::DEFAULT_IDLE_TICKS);

        Self {
            source_title: source.as_ref().map(MediaSource::title).unwrap_or_default(),
            transport: TransportController::with_config(&config),
            controls: ControlsVisibility::new(idle_ticks),
            source,
            player: PlayerHandle::default(),
            pushed_props: None,
            bookmarks: BookmarkStore::new(),
            bookmark_images: Vec::new(),
            current_frame: None,
            frame_handle: None,
            fullscreen: WindowFullscreen::default(),
            rate_menu_open: false,
            last_error: None,
            config,
        }
    }

    fn title(&self) -> String {
        match &self.source {
            Some(_) => format!("{} - {}", self.source_title, APP_TITLE),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_video_subscription(
                self.source.as_ref(),
                self.config.player.progress_interval(),
            ),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            transport: &mut self.transport,
            player: &mut self.player,
            controls: &mut self.controls,
            bookmarks: &mut self.bookmarks,
            bookmark_images: &mut self.bookmark_images,
            current_frame: &mut self.current_frame,
            frame_handle: &mut self.frame_handle,
            fullscreen: &mut self.fullscreen,
            rate_menu_open: &mut self.rate_menu_open,
            last_error: &mut self.last_error,
            pushed_props: &mut self.pushed_props,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Controls(msg) => update::handle_controls(&mut self.update_context(), msg),
            Message::Playback(msg) => {
                update::handle_playback(&mut self.update_context(), msg);
                Task::none()
            }
            Message::BookmarkClicked(index) => {
                update::handle_bookmark_clicked(&mut self.update_context(), index);
                Task::none()
            }
            Message::PointerMoved => {
                self.controls.on_pointer_moved();
                Task::none()
            }
            Message::WindowOpened(id) => {
                self.fullscreen.attach(id);
                Task::none()
            }
            Message::DismissError => {
                self.last_error = None;
                Task::none()
            }
        };

        update::sync_player_props(&self.transport, &self.player, &mut self.pushed_props);
        task
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = self.source.as_ref().map(|_| controls::ViewContext {
            title: &self.source_title,
            state: self.transport.state(),
            elapsed: self.transport.elapsed_time(&self.player),
            total: self.transport.total_duration(&self.player),
            rate_menu_open: self.rate_menu_open,
            fullscreen: self.fullscreen.is_active(),
        });

        view::view(view::ViewContext {
            controls,
            controls_visible: self.controls.is_visible(),
            frame: self.frame_handle.as_ref(),
            bookmarks: &self.bookmarks,
            bookmark_images: &self.bookmark_images,
            fullscreen: self.fullscreen.is_active(),
            last_error: self.last_error.as_deref(),
        })
    }
}
