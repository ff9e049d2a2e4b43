use crate::error::MemberError;
use crate::paint::{Color, Font, HorizontalAlign, Style, VerticalAlign};
use crate::position::{Anchor, PositionSource};
use crate::render::Canvas;
use crate::scene::{Geometry, Scene, Styled};

/// A run of text placed at its anchor, aligned by the style's text group.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub location: Anchor,
    pub content: String,
}

impl Default for Text {
    fn default() -> Self {
        Self { location: Anchor::default(), content: String::from("Text") }
    }
}

impl Geometry for Text {
    fn default_style() -> Style {
        let mut style = Style::default();
        style.stroke.enabled = false;
        style.fill.enabled = true;
        style.fill.color = Color::BLACK;
        style.text.enabled = true;
        style.text.size = 12.0;
        style.text.font = Font::from("Arial");
        style.text.horizontal_align = HorizontalAlign::Center;
        style.text.vertical_align = VerticalAlign::Center;
        style
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
        canvas.text(&self.content, self.location.read(scene)?);
        Ok(())
    }

    fn anchor(&self) -> Option<&Anchor> {
        Some(&self.location)
    }

    fn anchor_mut(&mut self) -> Option<&mut Anchor> {
        Some(&mut self.location)
    }
}

impl Styled<Text> {
    pub fn set_text(&mut self, content: impl Into<String>) -> &mut Self {
        self.geometry_mut().content = content.into();
        self
    }
}
