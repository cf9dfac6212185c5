//! World state and configuration
//!
//! Everything the frame step mutates lives in `WorldState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Bot, Player};
use super::shape::{Color, Shape, SizeRange};
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being stepped
    #[default]
    Running,
    /// The player was eaten
    GameOver,
    /// The player reached the winning score
    Won,
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Running
    }
}

/// World dimensions, populations and spawn ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Canvas width and height
    pub bounds: Vec2,
    /// Player base speed in pixels per frame
    pub move_speed: f32,
    pub bit_count: usize,
    pub bot_count: usize,
    pub bit_sizes: SizeRange,
    pub bot_sizes: SizeRange,
    pub win_score: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            move_speed: MOVE_SPEED,
            bit_count: MAX_BITS,
            bot_count: MAX_BOTS,
            bit_sizes: SizeRange::new(MIN_BIT_SIZE, MAX_BIT_SIZE),
            bot_sizes: SizeRange::new(MIN_BOT_SIZE, MAX_BOT_SIZE),
            win_score: WIN_SCORE,
        }
    }
}

impl WorldConfig {
    /// Default config on a canvas of the given size
    pub fn with_bounds(width: f32, height: f32) -> Self {
        Self {
            bounds: Vec2::new(width, height),
            ..Default::default()
        }
    }
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: WorldConfig,
    pub player: Player,
    /// Fixed-size; eaten bots are regenerated in place
    pub bots: Vec<Bot>,
    /// Fixed-size; eaten bits are respawned in place
    pub bits: Vec<Shape>,
    pub phase: GamePhase,
    /// Frames stepped since the last (re)initialization
    pub frame: u64,
    pub rng: Pcg32,
}

impl WorldState {
    /// Create a populated world from a seed
    pub fn new(config: WorldConfig, player_name: impl Into<String>, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(player_name, Color::random(&mut rng));
        let mut state = Self {
            seed,
            config,
            player,
            bots: Vec::new(),
            bits: Vec::new(),
            phase: GamePhase::Running,
            frame: 0,
            rng,
        };
        state.populate();
        log::info!(
            "World initialized: {} bots, {} bits, seed {}",
            state.bots.len(),
            state.bits.len(),
            seed
        );
        state
    }

    /// An empty world for scripted scenarios: no bots, no bits
    pub fn empty(config: WorldConfig, player_name: impl Into<String>, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(player_name, Color::random(&mut rng));
        Self {
            seed,
            config,
            player,
            bots: Vec::new(),
            bits: Vec::new(),
            phase: GamePhase::Running,
            frame: 0,
            rng,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.config.bounds
    }

    /// Replace the bot and bit collections with freshly randomized ones
    fn populate(&mut self) {
        let bounds = self.config.bounds;
        let bot_sizes = self.config.bot_sizes;
        let bit_sizes = self.config.bit_sizes;

        self.bots = (0..self.config.bot_count)
            .map(|_| Bot::random(&mut self.rng, bot_sizes, bounds))
            .collect();
        self.bits = (0..self.config.bit_count)
            .map(|_| random_bit(&mut self.rng, bit_sizes, bounds))
            .collect();
    }

    /// Start a new run in place: reset the player, rebuild bots and bits
    pub fn reinitialize(&mut self) {
        self.player.reset();
        self.populate();
        self.phase = GamePhase::Running;
        self.frame = 0;
        log::info!("World reinitialized");
    }
}

/// A freshly sized, coloured and placed bit
pub fn random_bit(rng: &mut Pcg32, sizes: SizeRange, bounds: Vec2) -> Shape {
    let size = sizes.sample(rng);
    Shape::circle(size, Color::random(rng)).with_random_position(rng, bounds)
}

/// Respawn an eaten bit in place with a new size and position
///
/// The size is drawn first so the placement fits the new size.
pub fn respawn_bit(bit: &mut Shape, rng: &mut Pcg32, sizes: SizeRange, bounds: Vec2) {
    bit.size = sizes.sample(rng);
    bit.place_random(rng, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_populated() {
        let state = WorldState::new(WorldConfig::default(), "tester", 12345);
        assert_eq!(state.bots.len(), MAX_BOTS);
        assert_eq!(state.bits.len(), MAX_BITS);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.name, "tester");
        assert_eq!(state.player.stamina, 100);

        for bot in &state.bots {
            assert!(state.config.bot_sizes.contains(bot.size()));
        }
        for bit in &state.bits {
            assert!(state.config.bit_sizes.contains(bit.size));
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = WorldState::new(WorldConfig::default(), "a", 99);
        let b = WorldState::new(WorldConfig::default(), "a", 99);
        for (x, y) in a.bots.iter().zip(&b.bots) {
            assert_eq!(x.shape, y.shape);
            assert_eq!(x.vel, y.vel);
        }
        assert_eq!(a.bits, b.bits);
    }

    #[test]
    fn test_reinitialize() {
        let mut state = WorldState::new(WorldConfig::default(), "p", 7);
        state.player.add_score(40_000);
        state.player.enlarge(90.0);
        state.phase = GamePhase::GameOver;
        state.bots.truncate(3);
        state.frame = 500;

        state.reinitialize();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.frame, 0);
        assert_eq!(state.bots.len(), MAX_BOTS);
        assert_eq!(state.bits.len(), MAX_BITS);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.max_stamina, 100);
        assert_eq!(state.player.stamina, 0);
        assert_eq!(state.player.size(), 10.0);
    }

    #[test]
    fn test_respawn_bit_fits_new_size() {
        let mut rng = Pcg32::seed_from_u64(5);
        let sizes = SizeRange::new(MIN_BIT_SIZE, MAX_BIT_SIZE);
        let bounds = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let mut bit = Shape::circle(1.0, Color::BLACK);
        for _ in 0..500 {
            respawn_bit(&mut bit, &mut rng, sizes, bounds);
            assert!(sizes.contains(bit.size));
            assert!(bit.pos.x - bit.radius() > 0.0 && bit.pos.x + bit.radius() < bounds.x);
            assert!(bit.pos.y - bit.radius() > 0.0 && bit.pos.y + bit.radius() < bounds.y);
        }
    }
}
