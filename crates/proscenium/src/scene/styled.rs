use crate::coords::Vec2;
use crate::error::{MemberError, PositionError};
use crate::paint::{Color, Font, HorizontalAlign, Style, VerticalAlign};
use crate::position::{Anchor, PositionSource};
use crate::render::{Canvas, PaintScope};

use super::{Capabilities, Scene, SceneMember};

/// Shape-specific rendering plugged into [`Styled`].
///
/// `render` is called with the member's [`Style`] already applied inside a
/// saved paint scope; it only issues primitive draw calls.
pub trait Geometry: 'static {
    /// Style a freshly constructed [`Styled`] starts with.
    fn default_style() -> Style
    where
        Self: Sized,
    {
        Style::default()
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError>;

    /// Location of the shape, for geometries that have one.
    fn anchor(&self) -> Option<&Anchor> {
        None
    }

    fn anchor_mut(&mut self) -> Option<&mut Anchor> {
        None
    }
}

/// A visible scene member: a geometry plus the style it is drawn with.
///
/// All setters mutate one attribute and return `&mut Self`, so configuration
/// chains in any order, both before insertion and through
/// [`Stage::get_mut`](super::Stage::get_mut):
///
/// ```rust,ignore
/// let mut label = shapes::text("Earth");
/// label.set_text_size(18.0).set_fill_color(Color::WHITE).set_location(Follower::new(earth));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Styled<G> {
    visible: bool,
    style: Style,
    geometry: G,
}

impl<G: Geometry> Styled<G> {
    pub fn new(geometry: G) -> Self {
        Self { visible: true, style: G::default_style(), geometry }
    }
}

impl<G> Styled<G> {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    #[inline]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    #[inline]
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    // ── visibility ────────────────────────────────────────────────────────

    pub fn set_visible(&mut self) -> &mut Self {
        self.visible = true;
        self
    }

    pub fn set_not_visible(&mut self) -> &mut Self {
        self.visible = false;
        self
    }

    // ── fill ──────────────────────────────────────────────────────────────

    pub fn set_filled(&mut self) -> &mut Self {
        self.style.fill.enabled = true;
        self
    }

    pub fn set_not_filled(&mut self) -> &mut Self {
        self.style.fill.enabled = false;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.style.fill.color = color;
        self
    }

    // ── stroke ────────────────────────────────────────────────────────────

    pub fn set_stroked(&mut self) -> &mut Self {
        self.style.stroke.enabled = true;
        self
    }

    pub fn set_not_stroked(&mut self) -> &mut Self {
        self.style.stroke.enabled = false;
        self
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.style.stroke.color = color;
        self
    }

    pub fn set_stroke_weight(&mut self, weight: f32) -> &mut Self {
        self.style.stroke.weight = weight;
        self
    }

    // ── text ──────────────────────────────────────────────────────────────

    pub fn set_has_text(&mut self) -> &mut Self {
        self.style.text.enabled = true;
        self
    }

    pub fn set_no_text(&mut self) -> &mut Self {
        self.style.text.enabled = false;
        self
    }

    pub fn set_text_size(&mut self, size: f32) -> &mut Self {
        self.style.text.size = size;
        self
    }

    pub fn set_text_font(&mut self, font: impl Into<Font>) -> &mut Self {
        self.style.text.font = font.into();
        self
    }

    pub fn set_text_horizontal_align_left(&mut self) -> &mut Self {
        self.style.text.horizontal_align = HorizontalAlign::Left;
        self
    }

    pub fn set_text_horizontal_align_center(&mut self) -> &mut Self {
        self.style.text.horizontal_align = HorizontalAlign::Center;
        self
    }

    pub fn set_text_horizontal_align_right(&mut self) -> &mut Self {
        self.style.text.horizontal_align = HorizontalAlign::Right;
        self
    }

    pub fn set_text_vertical_align_top(&mut self) -> &mut Self {
        self.style.text.vertical_align = VerticalAlign::Top;
        self
    }

    pub fn set_text_vertical_align_center(&mut self) -> &mut Self {
        self.style.text.vertical_align = VerticalAlign::Center;
        self
    }

    pub fn set_text_vertical_align_bottom(&mut self) -> &mut Self {
        self.style.text.vertical_align = VerticalAlign::Bottom;
        self
    }
}

impl<G: Geometry> Styled<G> {
    /// Replaces the location strategy (fixed point, follower, orbiter).
    ///
    /// Ignored by geometries without a location.
    pub fn set_location(&mut self, anchor: impl Into<Anchor>) -> &mut Self {
        if let Some(slot) = self.geometry.anchor_mut() {
            *slot = anchor.into();
        }
        self
    }

    /// Moves a fixed location. Derived locations ignore the write.
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        if let Some(anchor) = self.geometry.anchor_mut() {
            anchor.try_write(Vec2::new(x, y));
        }
        self
    }

    #[inline]
    pub fn location(&self) -> Option<&Anchor> {
        self.geometry.anchor()
    }
}

impl<G: Geometry> SceneMember for Styled<G> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::DRAW
    }

    fn draw(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
        if !self.visible {
            return Ok(());
        }

        let mut scope = PaintScope::new(canvas);
        self.style.apply(&mut *scope);
        self.geometry.render(&mut *scope, scene)
    }

    fn position(&self, scene: &Scene<'_>) -> Result<Option<Vec2>, PositionError> {
        self.geometry.anchor().map(|a| a.read(scene)).transpose()
    }

    fn try_set_position(&mut self, to: Vec2) -> bool {
        self.geometry.anchor_mut().is_some_and(|a| a.try_write(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CanvasCmd, RecordingCanvas};
    use crate::scene::Stage;
    use crate::time::FrameTime;

    /// Geometry that records how often it rendered and can be told to fail.
    #[derive(Debug, Default)]
    struct Probe {
        at: Anchor,
        fail: bool,
    }

    impl Geometry for Probe {
        fn render(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
            if self.fail {
                return Err(MemberError::failed("probe refused to render"));
            }
            canvas.point(self.at.read(scene)?);
            Ok(())
        }

        fn anchor(&self) -> Option<&Anchor> {
            Some(&self.at)
        }

        fn anchor_mut(&mut self) -> Option<&mut Anchor> {
            Some(&mut self.at)
        }
    }

    fn draw_one(member: Styled<Probe>) -> (RecordingCanvas, Result<(), MemberError>) {
        let stage = Stage::new();
        let frame = FrameTime::at(0.0);
        let mut canvas = RecordingCanvas::new();
        let result = member.draw(&mut canvas, &stage.scene(&frame));
        (canvas, result)
    }

    #[test]
    fn visible_draw_saves_applies_renders_restores() {
        let mut member = Styled::new(Probe::default());
        member.set_filled().set_fill_color(Color::BLACK).set_xy(1.0, 2.0);

        let (canvas, result) = draw_one(member);
        assert!(result.is_ok());
        assert_eq!(
            canvas.cmds(),
            &[
                CanvasCmd::Save,
                CanvasCmd::Fill(Color::BLACK),
                CanvasCmd::NoStroke,
                CanvasCmd::NoText,
                CanvasCmd::Point(Vec2::new(1.0, 2.0)),
                CanvasCmd::Restore,
            ]
        );
    }

    #[test]
    fn invisible_member_touches_nothing() {
        let mut member = Styled::new(Probe::default());
        member.set_filled().set_not_visible();

        let (canvas, result) = draw_one(member);
        assert!(result.is_ok());
        assert!(canvas.cmds().is_empty());
    }

    #[test]
    fn failing_render_still_restores() {
        let mut member = Styled::new(Probe { fail: true, ..Probe::default() });
        member.set_stroked().set_stroke_weight(9.0);

        let (canvas, result) = draw_one(member);
        assert!(result.is_err());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.cmds().last(), Some(&CanvasCmd::Restore));
        assert_eq!(canvas.current(), &Style::default());
    }

    #[test]
    fn setters_touch_one_attribute_each() {
        let mut member = Styled::new(Probe::default());
        member
            .set_has_text()
            .set_text_size(20.0)
            .set_text_font("Menlo")
            .set_text_horizontal_align_right()
            .set_text_vertical_align_bottom()
            .set_stroked()
            .set_stroke_color(Color::WHITE);

        let style = member.style();
        assert!(style.text.enabled);
        assert_eq!(style.text.size, 20.0);
        assert_eq!(style.text.font, Font::from("Menlo"));
        assert_eq!(style.text.horizontal_align, HorizontalAlign::Right);
        assert_eq!(style.text.vertical_align, VerticalAlign::Bottom);
        assert!(style.stroke.enabled);
        assert_eq!(style.stroke.color, Color::WHITE);
        assert!(!style.fill.enabled);

        member.set_no_text().set_not_stroked();
        assert!(!member.style().text.enabled);
        assert!(!member.style().stroke.enabled);
        assert_eq!(member.style().text.size, 20.0);
    }

    #[test]
    fn set_xy_is_ignored_on_derived_location() {
        let mut stage = Stage::new();
        let target = stage.add(Styled::new(Probe::default()));

        let mut member = Styled::new(Probe::default());
        member.set_location(crate::position::Follower::new(target)).set_xy(9.0, 9.0);
        assert!(!member.try_set_position(Vec2::new(1.0, 1.0)));
        assert!(member.location().is_some_and(Anchor::is_derived));
    }
}
