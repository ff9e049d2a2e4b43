//! Host drawing contract.
//!
//! The scene never rasterizes. Members talk to the host through two traits:
//! - [`PaintCtx`]: the host's global paint state (save/restore + style setters)
//! - [`Canvas`]: primitive draw calls, issued with the current paint state
//!
//! Convention:
//! - `rect` and `ellipse` take a center and a full size (center mode).
//! - Every `save` is paired with exactly one `restore`; use [`PaintScope`].

mod record;
mod scope;

use crate::coords::Vec2;
use crate::paint::{Color, Font, HorizontalAlign, VerticalAlign};

pub use record::{CanvasCmd, RecordingCanvas};
pub use scope::PaintScope;

/// Host paint state.
///
/// The state is process-wide on most immediate-mode hosts, so callers must
/// bracket changes with `save`/`restore`.
pub trait PaintCtx {
    /// Pushes a copy of the current paint state.
    fn save(&mut self);
    /// Pops the state pushed by the matching `save`.
    fn restore(&mut self);

    fn fill(&mut self, color: Color);
    fn no_fill(&mut self);

    fn stroke(&mut self, color: Color);
    fn stroke_weight(&mut self, weight: f32);
    fn no_stroke(&mut self);

    fn text_size(&mut self, size: f32);
    fn text_font(&mut self, font: &Font);
    fn text_align(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign);
    /// Disables text styling. Hosts without a text toggle may treat this as a no-op.
    fn no_text(&mut self);
}

/// Primitive draw calls of an immediate-mode host.
pub trait Canvas: PaintCtx {
    fn point(&mut self, at: Vec2);
    fn line(&mut self, from: Vec2, to: Vec2);
    fn rect(&mut self, center: Vec2, size: Vec2);
    fn ellipse(&mut self, center: Vec2, size: Vec2);
    fn text(&mut self, text: &str, at: Vec2);
}
