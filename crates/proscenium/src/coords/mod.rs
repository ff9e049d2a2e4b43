//! Coordinate types shared by positions, shapes and canvases.
//!
//! Host space:
//! - Host units (usually logical pixels)
//! - Origin and axis directions are whatever the host canvas uses
//!
//! The scene never converts between spaces; it hands coordinates to the
//! canvas exactly as members resolve them.

mod vec2;

pub use vec2::Vec2;
