//! Per-frame simulation step
//!
//! Advances the world by one frame: player movement, bot movement,
//! consumption, then the terminal check. Order matters and is fixed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::is_collide;
use super::state::{GamePhase, WorldState, respawn_bit};
use crate::can_eat;
use crate::consts::BOOST_MULTIPLIER;

/// Held keys, read once at the start of each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

impl InputFlags {
    #[inline]
    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Advance the world by one frame
///
/// Returns the phase after the step. A terminal world is left untouched.
pub fn tick(state: &mut WorldState, input: &InputFlags) -> GamePhase {
    if state.phase.is_terminal() {
        return state.phase;
    }
    state.frame += 1;

    move_player(state, input);

    let bounds = state.bounds();
    for bot in &mut state.bots {
        bot.move_in(bounds);
    }

    bots_eat_bits(state);
    player_eats_bits(state);
    let player_lost = resolve_bot_collisions(state);

    if player_lost {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at frame {} (score {})", state.frame, state.player.score);
    } else if state.player.score >= state.config.win_score {
        state.phase = GamePhase::Won;
        log::info!("Won at frame {} (score {})", state.frame, state.player.score);
    }
    state.phase
}

/// Player speed for this frame; shrinks as the player grows
pub fn player_speed(state: &WorldState, boosting: bool) -> f32 {
    let base = state.config.move_speed * (1.0 - state.player.size() / state.bounds().x);
    if boosting { base * BOOST_MULTIPLIER } else { base }
}

/// Move the player along each held direction and update stamina
///
/// Directions are applied one at a time in the order up, down, left, right,
/// each gated by a half-size margin test on the position left by the
/// previous one. Stamina drains while boosting and moving, and regenerates
/// whenever boost is not held.
pub fn move_player(state: &mut WorldState, input: &InputFlags) {
    let bounds = state.bounds();
    let boosting = input.boost && state.player.stamina > 0;
    let speed = player_speed(state, boosting);

    let player = &mut state.player;
    let half = player.size() / 2.0;

    if input.up && half - player.shape.pos.y < 0.0 {
        player.move_by(Vec2::new(0.0, -speed));
    }
    if input.down && half + player.shape.pos.y < bounds.y {
        player.move_by(Vec2::new(0.0, speed));
    }
    if input.left && half - player.shape.pos.x < 0.0 {
        player.move_by(Vec2::new(-speed, 0.0));
    }
    if input.right && half + player.shape.pos.x < bounds.x {
        player.move_by(Vec2::new(speed, 0.0));
    }

    if input.any_direction() && boosting {
        player.stamina -= 1;
    } else if !input.boost && player.stamina < player.max_stamina {
        player.stamina += 1;
    }
}

/// Bots eat any bit they overlap and can swallow
fn bots_eat_bits(state: &mut WorldState) {
    let bounds = state.config.bounds;
    let sizes = state.config.bit_sizes;

    for bit in &mut state.bits {
        for bot in &mut state.bots {
            if is_collide(bit, &bot.shape) && can_eat(bot.size(), bit.size) {
                let eaten = bit.size;
                respawn_bit(bit, &mut state.rng, sizes, bounds);
                bot.enlarge(eaten / bot.size());
            }
        }
    }
}

/// The player eats any bit it overlaps and can swallow, scoring its size
fn player_eats_bits(state: &mut WorldState) {
    let bounds = state.config.bounds;
    let sizes = state.config.bit_sizes;
    let player = &mut state.player;

    for bit in &mut state.bits {
        if is_collide(&player.shape, bit) && can_eat(player.size(), bit.size) {
            let eaten = bit.size;
            respawn_bit(bit, &mut state.rng, sizes, bounds);
            player.enlarge(eaten / player.size());
            player.add_score(eaten as u64);
        }
    }
}

/// Bot-vs-bot and bot-vs-player consumption
///
/// For each bot, first every other bot is checked (by index, so two bots on
/// the same coordinates still interact), then the player. Returns true when
/// a bot ate the player.
fn resolve_bot_collisions(state: &mut WorldState) -> bool {
    let bounds = state.config.bounds;
    let sizes = state.config.bot_sizes;
    let mut player_lost = false;

    for i in 0..state.bots.len() {
        for j in 0..state.bots.len() {
            if i == j || !is_collide(&state.bots[i].shape, &state.bots[j].shape) {
                continue;
            }
            let (a, b) = (state.bots[i].size(), state.bots[j].size());
            if can_eat(b, a) {
                state.bots[i].regenerate(&mut state.rng, sizes, bounds);
                state.bots[j].enlarge(a / b);
            } else if can_eat(a, b) {
                state.bots[j].regenerate(&mut state.rng, sizes, bounds);
                state.bots[i].enlarge(b / a);
            }
        }

        let bot = &mut state.bots[i];
        let player = &mut state.player;
        if is_collide(&bot.shape, &player.shape) {
            if can_eat(player.size(), bot.size()) {
                let eaten = bot.size();
                bot.regenerate(&mut state.rng, sizes, bounds);
                player.enlarge(eaten / player.size());
            } else if can_eat(bot.size(), player.size()) {
                player_lost = true;
            }
        }
    }
    player_lost
}
