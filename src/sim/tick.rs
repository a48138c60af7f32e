//! Per-frame simulation tick
//!
//! Advances the simulation by exactly one frame, deterministically.

use glam::Vec2;

use super::collision::Wall;
use super::state::SimState;
use crate::consts::GRAVITY;

/// What happened during one frame, for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Draw this frame with the flash background
    pub flashing: bool,
    /// Wall the rock hit this frame, if any
    pub contact: Option<Wall>,
}

/// Advance the simulation by one frame.
///
/// Order: flash bookkeeping, camera follow, gravity, integrate, walls.
/// The camera tracks the rock's position from before this frame's move.
pub fn tick(state: &mut SimState) -> FrameOutcome {
    let flashing = state.flash.advance();

    state.camera.update(state.rock.pos.y, &state.hole);

    let gravity = Vec2::new(0.0, GRAVITY * state.rock.mass);
    state.rock.apply_force(gravity);
    state.rock.update(&state.hole);

    let contact = state.rock.check_collision(&state.hole, &mut state.rng);
    if let Some(wall) = contact {
        if state.flash.trigger() {
            log::debug!(
                "Frame {}: hit {:?} wall at depth {}",
                state.frame,
                wall,
                state.depth()
            );
        }
    }

    state.frame += 1;

    FrameOutcome { flashing, contact }
}
