//! Player and bot entities
//!
//! Each entity exclusively owns one circle `Shape`. Bots are never removed
//! from the world: a bot that gets eaten is regenerated in place.

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shape::{Color, Shape, SizeRange};
use crate::consts::*;

/// Max stamina as a pure function of cumulative score
///
/// `100 + floor(score / 10000 * 100)`, computed in integers.
pub fn max_stamina_for(score: u64) -> u32 {
    let bonus = score / (STAMINA_SCORE_STEP / 100);
    BASE_STAMINA.saturating_add(u32::try_from(bonus).unwrap_or(u32::MAX))
}

/// The player-controlled circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub shape: Shape,
    /// Current stamina, within [0, max_stamina]
    pub stamina: u32,
    pub max_stamina: u32,
    pub score: u64,
}

impl Player {
    /// New player at the origin with full stamina
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            shape: Shape::circle(PLAYER_START_SIZE, color),
            stamina: BASE_STAMINA,
            max_stamina: BASE_STAMINA,
            score: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.shape.size
    }

    /// Add to the score and recompute max stamina
    pub fn add_score(&mut self, amount: u64) {
        self.score += amount;
        self.max_stamina = max_stamina_for(self.score);
    }

    pub fn enlarge(&mut self, delta: f32) {
        self.shape.enlarge(delta);
    }

    /// Shift the player's position
    pub fn move_by(&mut self, delta: Vec2) {
        self.shape.pos += delta;
    }

    /// Back to the origin at starting size with zeroed score
    ///
    /// Stamina drops to 0 rather than the constructor's full stamina; it
    /// regenerates from there.
    pub fn reset(&mut self) {
        self.shape.pos = Vec2::ZERO;
        self.shape.size = PLAYER_START_SIZE;
        self.score = 0;
        self.max_stamina = BASE_STAMINA;
        self.stamina = 0;
    }

    #[inline]
    pub fn has_full_stamina(&self) -> bool {
        self.stamina >= self.max_stamina
    }
}

/// An AI circle drifting at a constant velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub shape: Shape,
    /// Pixels per frame, integer components
    pub vel: IVec2,
}

impl Bot {
    pub fn new(shape: Shape, vel: IVec2) -> Self {
        Self { shape, vel }
    }

    /// A freshly randomized bot placed inside `bounds`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, sizes: SizeRange, bounds: Vec2) -> Self {
        let mut bot = Self::new(Shape::circle(sizes.min.max(1.0), Color::BLACK), IVec2::ZERO);
        bot.regenerate(rng, sizes, bounds);
        bot
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.shape.size
    }

    /// Reincarnate in place: new velocity, size, colour and position
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, sizes: SizeRange, bounds: Vec2) {
        self.vel = IVec2::new(
            rng.random_range(BOT_MIN_VELOCITY..=BOT_MAX_VELOCITY),
            rng.random_range(BOT_MIN_VELOCITY..=BOT_MAX_VELOCITY),
        );
        let size = sizes.sample(rng);
        self.shape = Shape::circle(size, Color::random(rng)).with_random_position(rng, bounds);
    }

    /// Negate any velocity component whose axis has the shape past an edge
    fn bounce(&mut self, bounds: Vec2) {
        let r = self.shape.radius();
        let pos = self.shape.pos;
        if pos.x + r > bounds.x || pos.x < r {
            self.vel.x = -self.vel.x;
        }
        if pos.y + r > bounds.y || pos.y < r {
            self.vel.y = -self.vel.y;
        }
    }

    /// Reflect off the edges, then advance by one frame of velocity
    pub fn move_in(&mut self, bounds: Vec2) {
        self.bounce(bounds);
        self.shape.pos += self.vel.as_vec2();
    }

    pub fn enlarge(&mut self, delta: f32) {
        self.shape.enlarge(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    fn bot_at(x: f32, y: f32, size: f32, vel: IVec2) -> Bot {
        let mut shape = Shape::circle(size, Color::BLACK);
        shape.pos = Vec2::new(x, y);
        Bot::new(shape, vel)
    }

    #[test]
    fn test_max_stamina_law() {
        assert_eq!(max_stamina_for(0), 100);
        assert_eq!(max_stamina_for(99), 100);
        assert_eq!(max_stamina_for(10_000), 200);
        assert_eq!(max_stamina_for(25_000), 350);
        assert_eq!(max_stamina_for(12_300), 223);
        assert_eq!(max_stamina_for(1_000_000), 10_100);
    }

    #[test]
    fn test_add_score_updates_max_stamina() {
        let mut player = Player::new("p", Color::BLACK);
        player.add_score(10_000);
        assert_eq!(player.score, 10_000);
        assert_eq!(player.max_stamina, 200);
        player.add_score(15_000);
        assert_eq!(player.max_stamina, 350);
        // Stamina itself is untouched
        assert_eq!(player.stamina, 100);
    }

    #[test]
    fn test_player_new() {
        let player = Player::new("John Doe", Color::RED);
        assert_eq!(player.name, "John Doe");
        assert_eq!(player.size(), PLAYER_START_SIZE);
        assert_eq!(player.shape.pos, Vec2::ZERO);
        assert_eq!(player.stamina, 100);
        assert_eq!(player.max_stamina, 100);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_player_reset() {
        let mut player = Player::new("p", Color::BLACK);
        player.add_score(30_000);
        player.enlarge(50.0);
        player.move_by(Vec2::new(100.0, 50.0));
        player.stamina = 250;

        player.reset();
        assert_eq!(player.shape.pos, Vec2::ZERO);
        assert_eq!(player.size(), 10.0);
        assert_eq!(player.score, 0);
        assert_eq!(player.max_stamina, 100);
        assert_eq!(player.stamina, 0);
    }

    #[test]
    fn test_bot_reflects_at_right_edge() {
        let mut bot = bot_at(BOUNDS.x, 300.0, 20.0, IVec2::new(2, 0));
        bot.move_in(BOUNDS);
        assert_eq!(bot.vel.x, -2);
        assert_eq!(bot.shape.pos.x, BOUNDS.x - 2.0);
    }

    #[test]
    fn test_bot_reflects_at_top_edge() {
        let mut bot = bot_at(400.0, 5.0, 20.0, IVec2::new(0, -1));
        bot.move_in(BOUNDS);
        assert_eq!(bot.vel.y, 1);
        assert_eq!(bot.shape.pos.y, 6.0);
    }

    #[test]
    fn test_bot_moves_freely_inside() {
        let mut bot = bot_at(400.0, 300.0, 20.0, IVec2::new(1, -2));
        bot.move_in(BOUNDS);
        assert_eq!(bot.vel, IVec2::new(1, -2));
        assert_eq!(bot.shape.pos, Vec2::new(401.0, 298.0));
    }

    #[test]
    fn test_bot_regenerate() {
        let mut rng = Pcg32::seed_from_u64(42);
        let sizes = SizeRange::new(MIN_BOT_SIZE, MAX_BOT_SIZE);
        let mut bot = bot_at(1.0, 1.0, 500.0, IVec2::new(9, 9));
        for _ in 0..200 {
            bot.regenerate(&mut rng, sizes, BOUNDS);
            assert!(sizes.contains(bot.size()));
            assert!((-2..=2).contains(&bot.vel.x));
            assert!((-2..=2).contains(&bot.vel.y));
            assert!(bot.shape.pos.x >= bot.size() && bot.shape.pos.x < BOUNDS.x - bot.size());
            assert!(bot.shape.pos.y >= bot.size() && bot.shape.pos.y < BOUNDS.y - bot.size());
        }
    }

    #[test]
    fn test_bot_velocity_range_is_symmetric() {
        let mut rng = Pcg32::seed_from_u64(7);
        let sizes = SizeRange::new(MIN_BOT_SIZE, MAX_BOT_SIZE);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            let bot = Bot::random(&mut rng, sizes, BOUNDS);
            seen.insert(bot.vel.x);
            seen.insert(bot.vel.y);
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_enlarge_ratio() {
        let mut bot = bot_at(0.0, 0.0, 20.0, IVec2::ZERO);
        bot.enlarge(10.0 / bot.size());
        assert_eq!(bot.size(), 20.5);
    }

    proptest! {
        #[test]
        fn prop_max_stamina_monotonic(a in 0u64..2_000_000, b in 0u64..2_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(max_stamina_for(lo) <= max_stamina_for(hi));
        }
    }
}
