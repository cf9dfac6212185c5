//! In-memory surface that records draw calls

use super::{RenderSurface, TextAlign};
use crate::sim::Color;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    FillColor(Color),
    StrokeColor(Color),
    Font(String),
    TextAlign(TextAlign),
    Circle { x: f32, y: f32, radius: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Text { text: String, x: f32, y: f32 },
}

/// Headless surface for tests and the native runner
///
/// Holds the commands of the frame since the last `clear_area`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// `(x, y, radius)` of every circle drawn so far
    pub fn circles(&self) -> Vec<(f32, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Circle { x, y, radius } => Some((x, y, radius)),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    /// Starts a fresh recording, so only the current frame is kept
    fn clear_area(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.commands.push(DrawCommand::Circle { x, y, radius });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
