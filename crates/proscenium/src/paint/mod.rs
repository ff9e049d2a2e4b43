//! Paint model shared between styled members and host canvases.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - text tokens (font names, alignment)
//! - [`Style`], the fill/stroke/text bundle applied before a member renders
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod style;
pub mod text;

pub use color::Color;
pub use style::{Fill, Stroke, Style, TextStyle};
pub use text::{Font, HorizontalAlign, VerticalAlign};
