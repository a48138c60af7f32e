//! Simulation state
//!
//! Everything the frame driver mutates lives in one owned `SimState`;
//! there are no globals, so independent simulations can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::flash::Flash;
use super::hole::Hole;
use super::rock::Rock;
use crate::consts::CANVAS_WIDTH;

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    pub rock: Rock,
    pub hole: Hole,
    pub camera: Camera,
    pub flash: Flash,
    /// Physics RNG (spawn offsets, wall nudges). Never used for rendering.
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Default hole and camera, rock spawned from `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rock = Rock::spawn(&mut rng, CANVAS_WIDTH / 2.0);
        Self {
            seed,
            frame: 0,
            rock,
            hole: Hole::default(),
            camera: Camera::default(),
            flash: Flash::default(),
            rng,
        }
    }

    /// Start from an explicit rock and hole
    pub fn with_bodies(seed: u64, rock: Rock, hole: Hole) -> Self {
        Self {
            seed,
            frame: 0,
            rock,
            hole,
            camera: Camera::default(),
            flash: Flash::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Depth below the hole mouth, floored (negative while above the hole)
    pub fn depth(&self) -> i32 {
        (self.rock.pos.y - self.hole.y).floor() as i32
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            frame: self.frame,
            rock_pos: self.rock.pos,
            rock_vel: self.rock.vel,
            rock_rotation: self.rock.rotation,
            camera_y: self.camera.y,
            flashing: self.flash.is_active(),
            depth: self.depth(),
        }
    }
}

/// Read-only view of a simulation at a frame boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub frame: u64,
    pub rock_pos: Vec2,
    pub rock_vel: Vec2,
    pub rock_rotation: f32,
    pub camera_y: f32,
    pub flashing: bool,
    pub depth: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state() {
        let state = SimState::new(12345);
        assert_eq!(state.frame, 0);
        assert_eq!(state.hole, Hole::default());
        assert_eq!(state.camera.y, 0.0);
        assert!(!state.flash.is_active());
        assert!((state.rock.pos.x - CANVAS_WIDTH / 2.0).abs() <= ROCK_START_SPREAD);
        assert_eq!(state.rock.pos.y, ROCK_START_Y);
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = SimState::new(99);
        let b = SimState::new(99);
        assert_eq!(a.rock, b.rock);
    }

    #[test]
    fn test_depth_is_floored() {
        let rock = Rock::new(Vec2::new(200.0, 450.7), Vec2::ZERO, ROCK_RADIUS, 0.0);
        let state = SimState::with_bodies(1, rock, Hole::default());
        assert_eq!(state.depth(), 50);

        let rock = Rock::new(Vec2::new(200.0, 50.0), Vec2::ZERO, ROCK_RADIUS, 0.0);
        let state = SimState::with_bodies(1, rock, Hole::default());
        assert_eq!(state.depth(), -350);
    }

    #[test]
    fn test_snapshot_json() {
        let state = SimState::new(7);
        let snap = state.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
        assert!(json.contains("\"depth\":-350"));
    }
}
