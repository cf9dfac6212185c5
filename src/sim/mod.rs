//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (by index)

pub mod entity;
pub mod shape;
pub mod state;
pub mod tick;

pub use entity::{Bot, Player, max_stamina_for};
pub use shape::{Color, Shape, ShapeKind, SizeRange, is_collide};
pub use state::{GamePhase, WorldConfig, WorldState, random_bit, respawn_bit};
pub use tick::{InputFlags, move_player, player_speed, tick};
