//! Frame driver
//!
//! `Game` bundles the world with the held-key flags. The platform calls
//! `frame` once per display refresh and keeps scheduling while it returns
//! `FrameOutcome::Continue`; stopping is simply not scheduling again.

use crate::platform::{InputKey, apply_key};
use crate::renderer::{RenderSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, InputFlags, WorldConfig, WorldState, tick};
use crate::ui::Hud;

/// Whether the frame loop should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The run ended in the given terminal phase
    Stop(GamePhase),
}

/// Tracks whether a frame is pending, so at most one loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    scheduled: bool,
}

impl FrameLoop {
    /// Loop whose first frame is being scheduled
    pub fn started() -> Self {
        Self { scheduled: true }
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Record a frame's outcome; true when the next frame should be scheduled
    pub fn after_frame(&mut self, outcome: FrameOutcome) -> bool {
        self.scheduled = outcome == FrameOutcome::Continue;
        self.scheduled
    }

    /// The platform refused to schedule the next frame
    pub fn schedule_failed(&mut self) {
        self.scheduled = false;
    }

    /// Ask for a running loop; true when a new one must be scheduled
    pub fn restart(&mut self) -> bool {
        let resume = !self.scheduled;
        self.scheduled = true;
        resume
    }
}

/// Game instance holding all mutable state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: WorldState,
    pub input: InputFlags,
    pub settings: Settings,
}

impl Game {
    pub fn new(config: WorldConfig, settings: Settings, seed: u64) -> Self {
        Self {
            state: WorldState::new(config, settings.player_name.clone(), seed),
            input: InputFlags::default(),
            settings,
        }
    }

    /// Key pressed; unknown keys are ignored
    pub fn key_down(&mut self, key: &str) -> Option<InputKey> {
        apply_key(&mut self.input, key, true)
    }

    /// Key released; unknown keys are ignored
    pub fn key_up(&mut self, key: &str) -> Option<InputKey> {
        apply_key(&mut self.input, key, false)
    }

    /// Step the simulation and redraw
    pub fn frame(&mut self, surface: &mut impl RenderSurface) -> FrameOutcome {
        let phase = tick(&mut self.state, &self.input);
        draw_frame(&self.state, self.settings.background, surface);
        if phase.is_terminal() {
            FrameOutcome::Stop(phase)
        } else {
            FrameOutcome::Continue
        }
    }

    /// Run frames back to back until the run ends or `max_frames` elapse
    pub fn run(&mut self, surface: &mut impl RenderSurface, max_frames: u64) -> FrameOutcome {
        let mut outcome = FrameOutcome::Continue;
        for _ in 0..max_frames {
            outcome = self.frame(surface);
            if outcome != FrameOutcome::Continue {
                break;
            }
        }
        outcome
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    /// Start over from any phase: fresh world, released keys
    pub fn retry(&mut self) {
        let previous = self.state.phase;
        self.state.reinitialize();
        self.input = InputFlags::default();
        log::info!("Retry from {:?}", previous);
    }
}
