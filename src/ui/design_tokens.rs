// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the player views.
//!
//! Colors, spacing, sizes and type scale live here so the control bar, the
//! bookmark grid and the app bar stay visually consistent.
//!
//! ```
//! use iced_reel::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::SCRIM, ..palette::BLACK };
//! assert!(spacing::MD > spacing::XS);
//! # let _ = scrim;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // App bar and active controls
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Control bar background over the video.
    pub const SCRIM: f32 = 0.6;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

/// 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Rewind / play / fast-forward cluster in the middle of the video.
    pub const CENTER_BUTTON_HEIGHT: f32 = 56.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 100.0;
    pub const RATE_MENU_WIDTH: f32 = 64.0;
    pub const APP_BAR_HEIGHT: f32 = 56.0;
    /// Bookmark thumbnails are drawn at their capture size.
    pub const THUMBNAIL_WIDTH: f32 = 160.0;
    pub const THUMBNAIL_HEIGHT: f32 = 90.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
