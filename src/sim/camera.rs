//! Vertical follow camera

use serde::{Deserialize, Serialize};

use super::hole::Hole;
use crate::constrain;
use crate::consts::CANVAS_HEIGHT;

/// Tracks the rock vertically, keeping it centered until the view
/// reaches the top of the canvas or the bottom of the hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current vertical offset (world y at the top of the viewport)
    pub y: f32,
    pub viewport_height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CANVAS_HEIGHT)
    }
}

impl Camera {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            y: 0.0,
            viewport_height,
        }
    }

    /// Largest offset that still keeps the viewport inside the hole
    #[inline]
    pub fn max_offset(&self, hole: &Hole) -> f32 {
        hole.bottom() - self.viewport_height
    }

    /// Recenter on `rock_y`, clamped to `[0, max_offset]`
    pub fn update(&mut self, rock_y: f32, hole: &Hole) {
        self.y = constrain(rock_y - self.viewport_height / 2.0, 0.0, self.max_offset(hole));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_camera_centers_rock() {
        let hole = Hole::default();
        let mut camera = Camera::default();

        camera.update(1000.0, &hole);
        assert_eq!(camera.y, 700.0);
    }

    #[test]
    fn test_camera_clamps_at_top_and_bottom() {
        let hole = Hole::default();
        let mut camera = Camera::default();

        camera.update(50.0, &hole);
        assert_eq!(camera.y, 0.0);

        camera.update(hole.bottom(), &hole);
        assert_eq!(camera.y, hole.bottom() - CANVAS_HEIGHT);
    }

    #[test]
    fn test_camera_shallow_hole_never_negative() {
        // Hole shorter than the viewport: upper bound is below zero
        let hole = Hole::new(0.0, 0.0, 50.0, 100.0);
        let mut camera = Camera::default();
        camera.update(90.0, &hole);
        assert_eq!(camera.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_camera_offset_in_range(rock_y in -1.0e6f32..1.0e6) {
            let hole = Hole::default();
            let mut camera = Camera::default();
            camera.update(rock_y, &hole);
            prop_assert!(camera.y >= 0.0);
            prop_assert!(camera.y <= camera.max_offset(&hole));
        }
    }
}
