// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions for the collaborators the transport core
//!   commands (embedded player, fullscreen, frame capture)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure (FFmpeg decoder, iced window) implements application ports
//! - The transport core only ever sees the ports

pub mod port;
