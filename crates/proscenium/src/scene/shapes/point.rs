use crate::error::MemberError;
use crate::paint::{Color, Style};
use crate::position::{Anchor, PositionSource};
use crate::render::Canvas;
use crate::scene::{Geometry, Scene};

/// Single point at its anchor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub location: Anchor,
}

impl Geometry for Point {
    fn default_style() -> Style {
        let mut style = Style::default();
        style.stroke.enabled = true;
        style.stroke.weight = 10.0;
        style.stroke.color = Color::BLACK;
        style
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
        canvas.point(self.location.read(scene)?);
        Ok(())
    }

    fn anchor(&self) -> Option<&Anchor> {
        Some(&self.location)
    }

    fn anchor_mut(&mut self) -> Option<&mut Anchor> {
        Some(&mut self.location)
    }
}
