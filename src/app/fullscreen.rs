// SPDX-License-Identifier: MPL-2.0
//! Window-level fullscreen capability.
//!
//! Switching the window mode is an iced `Task`, so `toggle` only records the
//! task; the update loop picks it up with [`WindowFullscreen::take_task`].

use super::Message;
use crate::application::port::FullscreenCapability;
use crate::error::CapabilityError;
use iced::{window, Task};

#[derive(Default)]
pub struct WindowFullscreen {
    window_id: Option<window::Id>,
    active: bool,
    pending: Option<Task<Message>>,
}

impl WindowFullscreen {
    /// Records the main window. Later ids are ignored.
    pub fn attach(&mut self, id: window::Id) {
        if self.window_id.is_none() {
            self.window_id = Some(id);
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The window mode switch requested by the last successful toggle.
    pub fn take_task(&mut self) -> Task<Message> {
        self.pending.take().unwrap_or_else(Task::none)
    }
}

impl FullscreenCapability for WindowFullscreen {
    fn toggle(&mut self) -> Result<bool, CapabilityError> {
        let id = self
            .window_id
            .ok_or(CapabilityError::Unavailable("window not open yet"))?;

        self.active = !self.active;
        let mode = if self.active {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        self.pending = Some(window::set_mode(id, mode));
        Ok(self.active)
    }
}

impl std::fmt::Debug for WindowFullscreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowFullscreen")
            .field("window_id", &self.window_id)
            .field("active", &self.active)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
