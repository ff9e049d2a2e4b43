use crate::error::MemberError;
use crate::paint::{Color, Style};
use crate::position::{Anchor, PositionSource};
use crate::render::Canvas;
use crate::scene::{Geometry, Scene, Styled};

/// Segment between two anchors.
///
/// Either end may follow or orbit another member. A line has no location of
/// its own, so followers targeting it read their fallback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub start: Anchor,
    pub end: Anchor,
}

impl Geometry for Line {
    fn default_style() -> Style {
        let mut style = Style::default();
        style.stroke.enabled = true;
        style.stroke.weight = 1.0;
        style.stroke.color = Color::BLACK;
        style
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
        let from = self.start.read(scene)?;
        let to = self.end.read(scene)?;
        canvas.line(from, to);
        Ok(())
    }
}

impl Styled<Line> {
    pub fn set_start(&mut self, start: impl Into<Anchor>) -> &mut Self {
        self.geometry_mut().start = start.into();
        self
    }

    pub fn set_end(&mut self, end: impl Into<Anchor>) -> &mut Self {
        self.geometry_mut().end = end.into();
        self
    }
}
