//! Frame driver: one simulation tick plus one render per frame

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{Surface, render_frame};
use crate::sim::{FrameOutcome, SimState, tick};

/// Stream offset separating the render jitter RNG from the physics RNG
const JITTER_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Owns the simulation and the render-only jitter source
pub struct FrameDriver {
    pub state: SimState,
    jitter: Pcg32,
}

impl FrameDriver {
    pub fn new(seed: u64) -> Self {
        Self::from_state(SimState::new(seed))
    }

    pub fn from_state(state: SimState) -> Self {
        let jitter = Pcg32::seed_from_u64(state.seed ^ JITTER_SEED_SALT);
        Self { state, jitter }
    }

    /// Advance and draw one frame. `fps` is the achieved rate shown in the HUD.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, fps: f32) -> FrameOutcome {
        let outcome = tick(&mut self.state);
        render_frame(surface, &self.state, outcome.flashing, &mut self.jitter, fps);
        outcome
    }
}
