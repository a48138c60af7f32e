//! Static hole geometry

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The shaft the rock falls down. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Left wall x
    pub x: f32,
    /// Top (mouth) y
    pub y: f32,
    pub width: f32,
    pub depth: f32,
}

impl Default for Hole {
    fn default() -> Self {
        Self::centered(CANVAS_WIDTH, ROCK_RADIUS * HOLE_WIDTH_FACTOR, HOLE_TOP, HOLE_DEPTH)
    }
}

impl Hole {
    pub fn new(x: f32, y: f32, width: f32, depth: f32) -> Self {
        Self { x, y, width, depth }
    }

    /// Hole horizontally centered in a canvas of the given width
    pub fn centered(canvas_width: f32, width: f32, y: f32, depth: f32) -> Self {
        Self::new(canvas_width / 2.0 - width / 2.0, y, width, depth)
    }

    /// Right wall x
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom of the hole
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.depth
    }

    /// Y positions of the rock-layer lines, every `DEPTH_MARKER_SPACING`
    /// from the mouth down to (not including) the bottom.
    pub fn marker_depths(&self) -> impl Iterator<Item = f32> + '_ {
        (0u32..)
            .map(|i| self.y + i as f32 * DEPTH_MARKER_SPACING)
            .take_while(|y| *y < self.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hole_geometry() {
        let hole = Hole::default();
        assert_eq!(hole.x, 175.0);
        assert_eq!(hole.y, 400.0);
        assert_eq!(hole.width, 50.0);
        assert_eq!(hole.depth, 10_000.0);
        assert_eq!(hole.right(), 225.0);
        assert_eq!(hole.bottom(), 10_400.0);
    }

    #[test]
    fn test_marker_depths() {
        let hole = Hole::default();
        let markers: Vec<f32> = hole.marker_depths().collect();
        assert_eq!(markers.len(), 200);
        assert_eq!(markers[0], 400.0);
        assert_eq!(markers[1], 450.0);
        assert_eq!(*markers.last().unwrap(), 10_350.0);

        // Partial last interval still gets a line at its top
        let shallow = Hole::new(0.0, 0.0, 10.0, 120.0);
        assert_eq!(shallow.marker_depths().collect::<Vec<_>>(), vec![0.0f32, 50.0, 100.0]);
    }
}
