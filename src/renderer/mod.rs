//! Rendering module
//!
//! Draws the world onto any `RenderSurface`. The browser build uses a 2D
//! canvas context; tests and the native runner record commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::consts::{BANNER_FONT, LABEL_FONT, LABEL_GAP};
use crate::sim::{Bot, Color, GamePhase, Player, Shape, ShapeKind, WorldState};

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
            TextAlign::End => "end",
        }
    }
}

/// A 2D drawing surface with canvas-style stateful styling
pub trait RenderSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Wipe a rectangle to transparent
    fn clear_area(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Draw a shape according to its kind
pub fn draw_shape(shape: &Shape, surface: &mut impl RenderSurface) {
    surface.set_fill_color(shape.color);
    match shape.kind {
        ShapeKind::Circle => surface.fill_circle(shape.pos.x, shape.pos.y, shape.radius()),
        ShapeKind::Rectangle => {
            surface.set_stroke_color(shape.color);
            surface.fill_rect(shape.pos.x, shape.pos.y, shape.size, shape.size);
        }
    }
}

/// Centered label just above a shape
fn draw_label(text: &str, shape: &Shape, surface: &mut impl RenderSurface) {
    surface.set_text_align(TextAlign::Center);
    surface.set_fill_color(Color::BLACK);
    surface.set_font(LABEL_FONT);
    surface.fill_text(text, shape.pos.x, shape.pos.y - shape.radius() - LABEL_GAP);
}

pub fn draw_player(player: &Player, surface: &mut impl RenderSurface) {
    draw_shape(&player.shape, surface);
    draw_label(&player.name, &player.shape, surface);
}

/// Body, a black pupil of a quarter of the size, and the "bot" label
pub fn draw_bot(bot: &Bot, surface: &mut impl RenderSurface) {
    draw_shape(&bot.shape, surface);
    surface.set_fill_color(Color::BLACK);
    surface.fill_circle(bot.shape.pos.x, bot.shape.pos.y, bot.shape.size / 4.0);
    draw_label("bot", &bot.shape, surface);
}

/// Large centered end-of-run message, if the run has ended
pub fn draw_banner(phase: GamePhase, surface: &mut impl RenderSurface) {
    let (text, color) = match phase {
        GamePhase::Running => return,
        GamePhase::GameOver => ("GAME OVER", Color::RED),
        GamePhase::Won => ("YOU WIN!", Color::GREEN),
    };
    let (cx, cy) = (surface.width() / 2.0, surface.height() / 2.0);
    surface.set_text_align(TextAlign::Center);
    surface.set_font(BANNER_FONT);
    surface.set_fill_color(color);
    surface.fill_text(text, cx, cy);
}

/// Redraw the whole frame
///
/// Bits first, then bots, then the player on top, then the banner.
pub fn draw_frame(state: &WorldState, background: Option<Color>, surface: &mut impl RenderSurface) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear_area(0.0, 0.0, w, h);
    if let Some(bg) = background {
        surface.set_fill_color(bg);
        surface.fill_rect(0.0, 0.0, w, h);
    }

    for bit in &state.bits {
        draw_shape(bit, surface);
    }
    for bot in &state.bots {
        draw_bot(bot, surface);
    }
    draw_player(&state.player, surface);
    draw_banner(state.phase, surface);
}
