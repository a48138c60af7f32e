//! Rendering module
//!
//! Scenes are drawn through the `Surface` trait, a small immediate-mode
//! 2D drawing API. The browser build draws onto a canvas 2D context;
//! tests and the native runner record draw commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};
pub use scene::{draw_hole, draw_hud, draw_rock, render_frame};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// CSS color string for the canvas API
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// How `rect` interprets its x/y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectMode {
    /// x/y is the top-left corner
    #[default]
    Corner,
    /// x/y is the center
    Center,
}

/// Drawing surface consumed by the scene renderer.
///
/// Fill/stroke state is sticky until changed, and `push`/`pop` save and
/// restore both the transform and that style state.
pub trait Surface {
    /// Clear the whole surface to `color`, ignoring the transform
    fn background(&mut self, color: Color);
    fn fill(&mut self, color: Color);
    fn stroke(&mut self, color: Color);
    fn no_stroke(&mut self);
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, mode: RectMode);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn text_size(&mut self, size: f32);
    fn text(&mut self, text: &str, x: f32, y: f32);
    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
}
