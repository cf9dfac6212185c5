//! Shape geometry shared by every entity on the canvas
//!
//! A shape is a position, a diameter-like `size` and a fill colour. Circles
//! are used for all gameplay entities; rectangles exist for drawing only.

use std::fmt;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rng_floor;

/// An sRGB fill colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// CSS `green`
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random colour, each channel in [0, 255)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut channel = || rng_floor(&mut *rng, 0.0, 255.0) as u8;
        Self {
            r: channel(),
            g: channel(),
            b: channel(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Shape variant, used to pick the drawing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Circle,
    /// Square anchored at its top-left corner; never part of gameplay
    Rectangle,
}

/// A drawable shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Center for circles, top-left corner for rectangles
    pub pos: Vec2,
    /// Diameter for circles, side length for rectangles
    pub size: f32,
    pub color: Color,
}

impl Shape {
    /// Circle at the origin
    pub fn circle(size: f32, color: Color) -> Self {
        debug_assert!(size > 0.0);
        Self {
            kind: ShapeKind::Circle,
            pos: Vec2::ZERO,
            size,
            color,
        }
    }

    pub fn rectangle(size: f32, color: Color, pos: Vec2) -> Self {
        debug_assert!(size > 0.0);
        Self {
            kind: ShapeKind::Rectangle,
            pos,
            size,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Grow by `delta`
    pub fn enlarge(&mut self, delta: f32) {
        self.size += delta;
        debug_assert!(self.size > 0.0);
    }

    /// Move to a uniformly random position that keeps the shape inside `bounds`
    ///
    /// Each coordinate is drawn from `[size, bound - size)`.
    pub fn place_random<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2) -> &mut Self {
        self.place(rng, bounds, None, None)
    }

    /// Like `place_random`, but explicit coordinates override the random draw
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: Vec2,
        x: Option<f32>,
        y: Option<f32>,
    ) -> &mut Self {
        self.pos.x = x.unwrap_or_else(|| rng_floor(&mut *rng, self.size, bounds.x - self.size));
        self.pos.y = y.unwrap_or_else(|| rng_floor(&mut *rng, self.size, bounds.y - self.size));
        self
    }

    /// Builder form of `place_random`
    pub fn with_random_position<R: Rng + ?Sized>(mut self, rng: &mut R, bounds: Vec2) -> Self {
        self.place_random(rng, bounds);
        self
    }
}

/// Half-open size range `[min, max)` for freshly spawned shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

impl SizeRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Integer-valued size drawn uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng_floor(rng, self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, size: f32) -> bool {
        size >= self.min && size < self.max
    }
}

/// True when two shapes overlap as circles
///
/// Touching exactly (distance equal to the sum of radii) is not a collision.
#[inline]
pub fn is_collide(a: &Shape, b: &Shape) -> bool {
    a.pos.distance(b.pos) < a.radius() + b.radius()
}
