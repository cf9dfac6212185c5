//! Bit Eater - a blob-eating arcade game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation (movement, consumption, game state)
//! - `renderer`: Drawing-surface abstraction and frame drawing
//! - `platform`: Browser input adapters
//! - `ui`: HUD view model (stamina and score readouts)
//! - `game`: Frame driver and retry

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{FrameLoop, FrameOutcome, Game};
pub use settings::Settings;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player base movement speed (pixels per frame)
    pub const MOVE_SPEED: f32 = 3.0;
    /// Speed multiplier while boosting
    pub const BOOST_MULTIPLIER: f32 = 2.0;

    /// Player size at spawn and after reset
    pub const PLAYER_START_SIZE: f32 = 10.0;
    pub const PLAYER_DEFAULT_NAME: &str = "John Doe";

    /// Stamina at construction; max stamina before any score
    pub const BASE_STAMINA: u32 = 100;
    /// Score needed for each additional 100 max stamina
    pub const STAMINA_SCORE_STEP: u64 = 10_000;

    /// Population sizes
    pub const MAX_BITS: usize = 50;
    pub const MAX_BOTS: usize = 10;

    /// Size ranges, half-open [min, max)
    pub const MIN_BIT_SIZE: f32 = 1.0;
    pub const MAX_BIT_SIZE: f32 = 50.0;
    pub const MIN_BOT_SIZE: f32 = 20.0;
    pub const MAX_BOT_SIZE: f32 = 100.0;

    /// Bot velocity component range, inclusive
    pub const BOT_MIN_VELOCITY: i32 = -2;
    pub const BOT_MAX_VELOCITY: i32 = 2;

    /// An eater must reach `ceil(size / EAT_RATIO)` >= prey size
    pub const EAT_RATIO: f32 = 1.5;

    /// Score that ends the run as a win
    pub const WIN_SCORE: u64 = 1_000_000;

    /// Label font and gap above an entity
    pub const LABEL_FONT: &str = "20px bold";
    pub const LABEL_GAP: f32 = 3.0;
    pub const BANNER_FONT: &str = "100px bold";
}

/// Random integer-valued float in `[start, end)`: `floor(start + U * (end - start))`
///
/// Unlike `random_range`, an empty or inverted range does not panic.
#[inline]
pub fn rng_floor<R: Rng + ?Sized>(rng: &mut R, start: f32, end: f32) -> f32 {
    (start + rng.random::<f32>() * (end - start)).floor()
}

/// Largest prey size an entity of `size` can consume
#[inline]
pub fn eat_threshold(size: f32) -> f32 {
    (size / consts::EAT_RATIO).ceil()
}

/// True when an entity of size `eater` can consume one of size `prey`
#[inline]
pub fn can_eat(eater: f32, prey: f32) -> bool {
    eat_threshold(eater) >= prey
}
