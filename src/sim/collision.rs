//! Wall contact detection and bounce response
//!
//! The hole has two vertical walls. A contact counts once the rock's edge,
//! padded by `COLLISION_BUFFER`, crosses a wall.

use serde::{Deserialize, Serialize};

use super::hole::Hole;
use crate::consts::*;

/// Which wall the rock touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
}

impl Wall {
    /// Unit direction pointing away from this wall, into the hole
    pub fn outward_sign(self) -> f32 {
        match self {
            Wall::Left => 1.0,
            Wall::Right => -1.0,
        }
    }
}

/// Check a rock at `x` with `radius` against both walls.
///
/// The left wall is checked first; a rock wider than the hole only ever
/// reports the left wall.
pub fn wall_contact(x: f32, radius: f32, hole: &Hole) -> Option<Wall> {
    if x - radius - COLLISION_BUFFER < hole.x {
        Some(Wall::Left)
    } else if x + radius + COLLISION_BUFFER > hole.right() {
        Some(Wall::Right)
    } else {
        None
    }
}

/// X position of a rock resting against `wall`
pub fn resting_x(wall: Wall, radius: f32, hole: &Hole) -> f32 {
    match wall {
        Wall::Left => hole.x + radius + COLLISION_BUFFER,
        Wall::Right => hole.right() - radius - COLLISION_BUFFER,
    }
}

/// Horizontal velocity after bouncing off a wall (elastic flip, then friction)
#[inline]
pub fn bounce_velocity(vx: f32) -> f32 {
    let mut vx = vx * -ELASTICITY;
    vx *= FRICTION;
    vx
}

/// Whether a bounced rock is moving too slowly to leave the wall on its own
#[inline]
pub fn is_sticking(vx: f32) -> bool {
    vx.abs() < STICK_THRESHOLD
}
