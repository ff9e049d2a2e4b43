//! Leaf shapes.
//!
//! Each shape is a [`Geometry`](super::Geometry) that hands its resolved
//! coordinates to one canvas primitive. Wrap it in [`Styled`] (or use the
//! constructors below, which do so) to put it on a stage.
//!
//! Extending the shape set:
//! - add a module here with the geometry struct and its `Geometry` impl
//! - put shape-specific chainable setters in an `impl Styled<YourShape>` block
//! - add a constructor below

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod rect;
pub(crate) mod text;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use rect::Rect;
pub use text::Text;

use super::Styled;

/// Point at the origin: black stroke of weight 10, no fill.
pub fn point() -> Styled<Point> {
    Styled::new(Point::default())
}

/// Zero-length line at the origin: black stroke of weight 1, no fill.
pub fn line() -> Styled<Line> {
    Styled::new(Line::default())
}

/// Empty rectangle at the origin: black stroke of weight 1, white fill.
pub fn rect() -> Styled<Rect> {
    Styled::new(Rect::default())
}

/// Circle of radius 50 at the origin: black stroke of weight 1, white fill.
pub fn circle() -> Styled<Circle> {
    Styled::new(Circle::default())
}

/// Text at the origin: black fill, no stroke, 12pt Arial, centered both ways.
pub fn text(content: impl Into<String>) -> Styled<Text> {
    let mut shape = Styled::new(Text::default());
    shape.set_text(content);
    shape
}
