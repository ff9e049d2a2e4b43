use crate::render::PaintCtx;

use super::{Color, Font, HorizontalAlign, VerticalAlign};

/// Fill group of a [`Style`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub enabled: bool,
    pub color: Color,
}

impl Default for Fill {
    fn default() -> Self {
        Self { enabled: false, color: Color::WHITE }
    }
}

/// Stroke group of a [`Style`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub enabled: bool,
    pub color: Color,
    /// Line weight in host units.
    pub weight: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self { enabled: false, color: Color::BLACK, weight: 1.0 }
    }
}

/// Text group of a [`Style`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub enabled: bool,
    pub size: f32,
    pub font: Font,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            size: 12.0,
            font: Font::default(),
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
        }
    }
}

/// Paint and text attributes a styled member pushes into the host before rendering.
///
/// Each group carries its own `enabled` flag; values of a disabled group are
/// kept but never reach the host. Disabled groups emit the host's "off" call
/// instead, so [`apply`](Self::apply) always specifies all three groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Fill,
    pub stroke: Stroke,
    pub text: TextStyle,
}

impl Style {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes every group into `ctx`.
    ///
    /// Idempotent: applying an unchanged style twice leaves the host in the same state.
    pub fn apply<C: PaintCtx + ?Sized>(&self, ctx: &mut C) {
        if self.fill.enabled {
            ctx.fill(self.fill.color);
        } else {
            ctx.no_fill();
        }

        if self.stroke.enabled {
            ctx.stroke(self.stroke.color);
            ctx.stroke_weight(self.stroke.weight);
        } else {
            ctx.no_stroke();
        }

        if self.text.enabled {
            ctx.text_size(self.text.size);
            ctx.text_font(&self.text.font);
            ctx.text_align(self.text.horizontal_align, self.text.vertical_align);
        } else {
            ctx.no_text();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CanvasCmd, RecordingCanvas};

    #[test]
    fn default_style_turns_every_group_off() {
        let mut canvas = RecordingCanvas::new();
        Style::default().apply(&mut canvas);
        assert_eq!(
            canvas.cmds(),
            &[CanvasCmd::NoFill, CanvasCmd::NoStroke, CanvasCmd::NoText]
        );
    }

    #[test]
    fn enabled_groups_emit_their_values() {
        let mut style = Style::new();
        style.fill = Fill { enabled: true, color: Color::gray(200) };
        style.stroke = Stroke { enabled: true, color: Color::BLACK, weight: 3.0 };
        style.text.enabled = true;
        style.text.font = Font::from("Arial");
        style.text.horizontal_align = HorizontalAlign::Right;
        style.text.vertical_align = VerticalAlign::Top;

        let mut canvas = RecordingCanvas::new();
        style.apply(&mut canvas);
        assert_eq!(
            canvas.cmds(),
            &[
                CanvasCmd::Fill(Color::gray(200)),
                CanvasCmd::Stroke(Color::BLACK),
                CanvasCmd::StrokeWeight(3.0),
                CanvasCmd::TextSize(12.0),
                CanvasCmd::TextFont(Font::from("Arial")),
                CanvasCmd::TextAlign(HorizontalAlign::Right, VerticalAlign::Top),
            ]
        );
    }

    #[test]
    fn disabled_group_hides_stale_values() {
        let mut style = Style::new();
        style.fill = Fill { enabled: true, color: Color::gray(10) };
        style.fill.enabled = false;

        let mut canvas = RecordingCanvas::new();
        style.apply(&mut canvas);
        assert_eq!(canvas.cmds()[0], CanvasCmd::NoFill);
        assert!(!canvas.current().fill.enabled);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut style = Style::new();
        style.stroke.enabled = true;
        style.stroke.weight = 4.0;

        let mut once = RecordingCanvas::new();
        style.apply(&mut once);

        let mut twice = RecordingCanvas::new();
        style.apply(&mut twice);
        style.apply(&mut twice);

        assert_eq!(once.current(), twice.current());
    }
}
