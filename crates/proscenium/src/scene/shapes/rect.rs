use crate::coords::Vec2;
use crate::error::MemberError;
use crate::paint::{Color, Style};
use crate::position::{Anchor, PositionSource};
use crate::render::Canvas;
use crate::scene::{Geometry, Scene, Styled};

/// Axis-aligned rectangle centered on its anchor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rect {
    pub location: Anchor,
    pub width: f32,
    pub height: f32,
}

impl Geometry for Rect {
    fn default_style() -> Style {
        let mut style = Style::default();
        style.stroke.enabled = true;
        style.stroke.weight = 1.0;
        style.stroke.color = Color::BLACK;
        style.fill.enabled = true;
        style.fill.color = Color::WHITE;
        style
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
        let center = self.location.read(scene)?;
        canvas.rect(center, Vec2::new(self.width, self.height));
        Ok(())
    }

    fn anchor(&self) -> Option<&Anchor> {
        Some(&self.location)
    }

    fn anchor_mut(&mut self) -> Option<&mut Anchor> {
        Some(&mut self.location)
    }
}

impl Styled<Rect> {
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.geometry_mut().width = width;
        self
    }

    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.geometry_mut().height = height;
        self
    }
}
