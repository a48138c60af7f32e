//! The falling rock: a point mass with drag, spin and wall bounces

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Wall, bounce_velocity, is_sticking, resting_x, wall_contact};
use super::hole::Hole;
use crate::consts::*;
use crate::constrain;

/// The rock body. Units are canvas units per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rock {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated force / mass for the current frame, cleared by `update`
    pub acc: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Current rotation (radians, display only)
    pub rotation: f32,
    /// Fixed spin per frame
    pub angular_vel: f32,
}

impl Rock {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, angular_vel: f32) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            radius,
            mass: ROCK_MASS,
            rotation: 0.0,
            angular_vel,
        }
    }

    /// Spawn at the top of the canvas with a slight random offset, drift and spin
    pub fn spawn<R: Rng>(rng: &mut R, center_x: f32) -> Self {
        let x = center_x + rng.random_range(-ROCK_START_SPREAD..ROCK_START_SPREAD);
        let vx = rng.random_range(-ROCK_START_MAX_VX..ROCK_START_MAX_VX);
        let spin = rng.random_range(-ROCK_MAX_SPIN..ROCK_MAX_SPIN);
        Self::new(Vec2::new(x, ROCK_START_Y), Vec2::new(vx, 0.0), ROCK_RADIUS, spin)
    }

    /// Accumulate a force for this frame (acc += force / mass)
    pub fn apply_force(&mut self, force: Vec2) {
        if !force.is_finite() {
            log::warn!("Ignoring non-finite force {:?}", force);
            return;
        }
        self.acc += force / self.mass;
    }

    /// Lowest y the rock may reach inside `hole`
    #[inline]
    pub fn floor(&self, hole: &Hole) -> f32 {
        hole.bottom() - self.radius
    }

    /// Integrate one frame. The step order is fixed:
    /// accelerate, quadratic drag, terminal clamp, move, floor clamp,
    /// clear acceleration, spin.
    pub fn update(&mut self, hole: &Hole) {
        self.vel += self.acc;

        let drag = self.vel * (-DRAG_COEFFICIENT * self.vel.length_squared());
        self.vel += drag;
        self.sanitize_velocity();

        self.vel.y = constrain(self.vel.y, -TERMINAL_VELOCITY, TERMINAL_VELOCITY);

        self.pos += self.vel;
        self.pos.y = constrain(self.pos.y, 0.0, self.floor(hole));

        self.acc = Vec2::ZERO;

        self.rotation += self.angular_vel;
    }

    /// Zero any velocity component the drag term blew up to inf/NaN
    fn sanitize_velocity(&mut self) {
        if self.vel.is_finite() {
            return;
        }
        log::warn!("Rock velocity became non-finite ({:?}), zeroing", self.vel);
        if !self.vel.x.is_finite() {
            self.vel.x = 0.0;
        }
        if !self.vel.y.is_finite() {
            self.vel.y = 0.0;
        }
    }

    /// Resolve contact with the hole walls.
    ///
    /// On contact the rock is pushed back to the wall boundary and bounced.
    /// A bounce too weak to leave the wall is replaced by a random outward
    /// nudge so the rock never comes to rest against a wall.
    pub fn check_collision<R: Rng>(&mut self, hole: &Hole, rng: &mut R) -> Option<Wall> {
        let wall = wall_contact(self.pos.x, self.radius, hole)?;

        self.pos.x = resting_x(wall, self.radius, hole);
        self.vel.x = bounce_velocity(self.vel.x);

        if is_sticking(self.vel.x) {
            self.vel.x = wall.outward_sign() * rng.random_range(NUDGE_MIN..NUDGE_MAX);
        }

        Some(wall)
    }
}
