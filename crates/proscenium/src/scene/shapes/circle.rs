use crate::coords::Vec2;
use crate::error::MemberError;
use crate::paint::{Color, Style};
use crate::position::{Anchor, PositionSource};
use crate::render::Canvas;
use crate::scene::{Geometry, Scene, Styled};

/// Circle centered on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub location: Anchor,
    pub radius: f32,
}

impl Default for Circle {
    fn default() -> Self {
        Self { location: Anchor::default(), radius: 50.0 }
    }
}

impl Geometry for Circle {
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
        let diameter = self.radius * 2.0;
        canvas.ellipse(center, Vec2::new(diameter, diameter));
        Ok(())
    }

    fn anchor(&self) -> Option<&Anchor> {
        Some(&self.location)
    }

    fn anchor_mut(&mut self) -> Option<&mut Anchor> {
        Some(&mut self.location)
    }
}

impl Styled<Circle> {
    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        self.geometry_mut().radius = radius;
        self
    }

    /// Sets the radius to half of `width`.
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.geometry_mut().radius = width / 2.0;
        self
    }

    /// Sets the radius to half of `height`.
    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.geometry_mut().radius = height / 2.0;
        self
    }
}
