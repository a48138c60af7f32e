//! Rock Fall - a rock tumbling down a deep hole
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rock physics, wall collisions, camera, flash)
//! - `renderer`: Drawing-surface abstraction and scene rendering
//! - `driver`: Per-frame orchestration (tick + render)
//! - `platform`: Frame pacing and browser setup errors

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use driver::FrameDriver;

/// Demo configuration constants
pub mod consts {
    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Target frame rate (one simulation step per frame)
    pub const TARGET_FPS: f32 = 60.0;

    /// Downward acceleration applied every frame (m/s², one frame = one step)
    pub const GRAVITY: f32 = 9.8;
    /// Multiplicative air resistance. Declared but not part of the update sequence;
    /// the quadratic drag term is the only speed-limiting effect.
    pub const AIR_RESISTANCE: f32 = 0.999;
    /// Quadratic drag coefficient: vel += vel * (-k * |vel|²)
    pub const DRAG_COEFFICIENT: f32 = 0.02;
    /// Cap on vertical speed after each step
    pub const TERMINAL_VELOCITY: f32 = 20.0;

    /// Velocity retained (sign flipped) after a wall bounce
    pub const ELASTICITY: f32 = 0.7;
    /// Horizontal retention applied after the elastic bounce
    pub const FRICTION: f32 = 0.9;
    /// Tolerance added to the rock radius before a wall contact counts
    pub const COLLISION_BUFFER: f32 = 2.0;
    /// Below this horizontal speed a bounced rock gets a fresh outward nudge
    pub const STICK_THRESHOLD: f32 = 0.1;
    /// Outward nudge speed range after a sticky bounce
    pub const NUDGE_MIN: f32 = 1.0;
    pub const NUDGE_MAX: f32 = 2.0;

    /// Frames the background stays red after a wall hit
    pub const FLASH_DURATION: u32 = 10;

    /// Rock defaults
    pub const ROCK_RADIUS: f32 = 10.0;
    pub const ROCK_MASS: f32 = 1.0;
    pub const ROCK_START_Y: f32 = 50.0;
    /// Max horizontal offset from canvas center at spawn
    pub const ROCK_START_SPREAD: f32 = 5.0;
    pub const ROCK_START_MAX_VX: f32 = 0.5;
    pub const ROCK_MAX_SPIN: f32 = 0.02;
    /// Cosmetic per-frame size jitter of the drawn rock
    pub const ROCK_JITTER: f32 = 2.0;

    /// Hole defaults - hole is wider than the rock by a generous margin
    pub const HOLE_WIDTH_FACTOR: f32 = 5.0;
    pub const HOLE_TOP: f32 = 400.0;
    pub const HOLE_DEPTH: f32 = 10_000.0;
    /// Vertical spacing of the rock-layer lines drawn inside the hole
    pub const DEPTH_MARKER_SPACING: f32 = 50.0;
}

/// Saturating clamp that never panics.
///
/// Unlike `f32::clamp` this tolerates `low > high` (the result is `low`)
/// and maps NaN to `high` clamped by `low`.
#[inline]
pub fn constrain(value: f32, low: f32, high: f32) -> f32 {
    value.min(high).max(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(5.0, 0.0, 10.0), 5.0);
        assert_eq!(constrain(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(constrain(11.0, 0.0, 10.0), 10.0);
        // Inverted range saturates to the lower bound
        assert_eq!(constrain(3.0, 0.0, -5.0), 0.0);
        assert_eq!(constrain(f32::NAN, 0.0, 10.0), 10.0);
    }
}
