use crate::coords::Vec2;
use crate::paint::{Color, Font, HorizontalAlign, Style, VerticalAlign};

use super::{Canvas, PaintCtx};

/// A single host call captured by [`RecordingCanvas`].
///
/// Extending the canvas contract:
/// - add the method to [`PaintCtx`] or [`Canvas`]
/// - add a matching variant here
/// - record it in the `RecordingCanvas` impl below
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCmd {
    Save,
    Restore,
    Fill(Color),
    NoFill,
    Stroke(Color),
    StrokeWeight(f32),
    NoStroke,
    TextSize(f32),
    TextFont(Font),
    TextAlign(HorizontalAlign, VerticalAlign),
    NoText,
    Point(Vec2),
    Line { from: Vec2, to: Vec2 },
    Rect { center: Vec2, size: Vec2 },
    Ellipse { center: Vec2, size: Vec2 },
    Text { text: String, at: Vec2 },
}

impl CanvasCmd {
    /// Returns true for calls that put pixels on the host surface.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            CanvasCmd::Point(_)
                | CanvasCmd::Line { .. }
                | CanvasCmd::Rect { .. }
                | CanvasCmd::Ellipse { .. }
                | CanvasCmd::Text { .. }
        )
    }
}

/// Host canvas that records every call instead of drawing.
///
/// Besides the raw call stream it tracks the effective paint state the way an
/// immediate-mode host would (a stack of [`Style`] snapshots), so callers can
/// check that a frame leaves no paint state behind.
///
/// Performance characteristics:
/// - every call is an O(1) push
/// - [`clear`](Self::clear) keeps allocated capacity for reuse across frames
#[derive(Debug)]
pub struct RecordingCanvas {
    cmds: Vec<CanvasCmd>,
    /// Paint state stack; the last entry is the current state and is never popped.
    states: Vec<Style>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self { cmds: Vec::new(), states: vec![Style::default()] }
    }
}

impl RecordingCanvas {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded calls and resets the paint state. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.states.truncate(1);
        self.states[0] = Style::default();
    }

    /// Returns recorded calls in call order.
    #[inline]
    pub fn cmds(&self) -> &[CanvasCmd] {
        &self.cmds
    }

    /// Takes the recorded calls, leaving the paint state untouched.
    #[inline]
    pub fn take(&mut self) -> Vec<CanvasCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Iterates the recorded primitive draw calls only.
    pub fn primitives(&self) -> impl Iterator<Item = &CanvasCmd> {
        self.cmds.iter().filter(|c| c.is_primitive())
    }

    /// Number of unmatched `save` calls.
    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len() - 1
    }

    /// Current effective paint state.
    #[inline]
    pub fn current(&self) -> &Style {
        // `states` always holds the base entry.
        &self.states[self.states.len() - 1]
    }

    #[inline]
    fn current_mut(&mut self) -> &mut Style {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }
}

impl PaintCtx for RecordingCanvas {
    fn save(&mut self) {
        let snapshot = self.current().clone();
        self.states.push(snapshot);
        self.cmds.push(CanvasCmd::Save);
    }

    fn restore(&mut self) {
        debug_assert!(self.states.len() > 1, "restore called without matching save");
        if self.states.len() > 1 {
            self.states.pop();
        }
        self.cmds.push(CanvasCmd::Restore);
    }

    fn fill(&mut self, color: Color) {
        let fill = &mut self.current_mut().fill;
        fill.enabled = true;
        fill.color = color;
        self.cmds.push(CanvasCmd::Fill(color));
    }

    fn no_fill(&mut self) {
        self.current_mut().fill.enabled = false;
        self.cmds.push(CanvasCmd::NoFill);
    }

    fn stroke(&mut self, color: Color) {
        let stroke = &mut self.current_mut().stroke;
        stroke.enabled = true;
        stroke.color = color;
        self.cmds.push(CanvasCmd::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.current_mut().stroke.weight = weight;
        self.cmds.push(CanvasCmd::StrokeWeight(weight));
    }

    fn no_stroke(&mut self) {
        self.current_mut().stroke.enabled = false;
        self.cmds.push(CanvasCmd::NoStroke);
    }

    fn text_size(&mut self, size: f32) {
        let text = &mut self.current_mut().text;
        text.enabled = true;
        text.size = size;
        self.cmds.push(CanvasCmd::TextSize(size));
    }

    fn text_font(&mut self, font: &Font) {
        let text = &mut self.current_mut().text;
        text.enabled = true;
        text.font = font.clone();
        self.cmds.push(CanvasCmd::TextFont(font.clone()));
    }

    fn text_align(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) {
        let text = &mut self.current_mut().text;
        text.enabled = true;
        text.horizontal_align = horizontal;
        text.vertical_align = vertical;
        self.cmds.push(CanvasCmd::TextAlign(horizontal, vertical));
    }

    fn no_text(&mut self) {
        self.current_mut().text.enabled = false;
        self.cmds.push(CanvasCmd::NoText);
    }
}

impl Canvas for RecordingCanvas {
    fn point(&mut self, at: Vec2) {
        self.cmds.push(CanvasCmd::Point(at));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.cmds.push(CanvasCmd::Line { from, to });
    }

    fn rect(&mut self, center: Vec2, size: Vec2) {
        self.cmds.push(CanvasCmd::Rect { center, size });
    }

    fn ellipse(&mut self, center: Vec2, size: Vec2) {
        self.cmds.push(CanvasCmd::Ellipse { center, size });
    }

    fn text(&mut self, text: &str, at: Vec2) {
        self.cmds.push(CanvasCmd::Text { text: text.to_owned(), at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_restore_brackets_state_changes() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill(Color::BLACK);

        canvas.save();
        canvas.no_fill();
        canvas.stroke_weight(7.0);
        assert_eq!(canvas.depth(), 1);
        assert!(!canvas.current().fill.enabled);

        canvas.restore();
        assert_eq!(canvas.depth(), 0);
        assert!(canvas.current().fill.enabled);
        assert_eq!(canvas.current().stroke.weight, 1.0);
    }

    #[test]
    fn primitives_skip_state_calls() {
        let mut canvas = RecordingCanvas::new();
        canvas.save();
        canvas.fill(Color::WHITE);
        canvas.point(Vec2::new(1.0, 2.0));
        canvas.text("hi", Vec2::zero());
        canvas.restore();

        let prims: Vec<_> = canvas.primitives().cloned().collect();
        assert_eq!(
            prims,
            vec![
                CanvasCmd::Point(Vec2::new(1.0, 2.0)),
                CanvasCmd::Text { text: "hi".into(), at: Vec2::zero() },
            ]
        );
    }

    #[test]
    fn clear_resets_calls_and_state() {
        let mut canvas = RecordingCanvas::new();
        canvas.save();
        canvas.fill(Color::BLACK);
        canvas.clear();
        assert!(canvas.cmds().is_empty());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.current(), &Style::default());
    }
}
