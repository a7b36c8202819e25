// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`player`]: Embedded player command/query surface and fullscreen capability
//! - [`capture`]: Frame-to-thumbnail capture
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Queries that depend on the player being ready return `Option`
//! - No `async fn` - commands are fire-and-forget, results arrive as messages

pub mod capture;
pub mod player;

pub use capture::FrameCapture;
pub use player::{FullscreenCapability, PlayerTransport, SeekTarget};
