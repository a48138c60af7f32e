//! In-memory surface that records draw calls

use super::{Color, RectMode, Surface};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Fill(Color),
    Stroke(Color),
    NoStroke,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        mode: RectMode,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    TextSize(f32),
    Text {
        text: String,
        x: f32,
        y: f32,
    },
    Push,
    Pop,
    Translate(f32, f32),
    Rotate(f32),
}

/// Headless `Surface` used by tests and the native runner
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Current push nesting
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current push/pop nesting depth (0 when balanced)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Drop recorded commands, e.g. between frames
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self, color: Color) {
        self.commands.push(DrawCommand::Stroke(color));
    }

    fn no_stroke(&mut self) {
        self.commands.push(DrawCommand::NoStroke);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, mode: RectMode) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, mode });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn text_size(&mut self, size: f32) {
        self.commands.push(DrawCommand::TextSize(size));
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn push(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Push);
    }

    fn pop(&mut self) {
        if self.depth == 0 {
            log::warn!("pop() without matching push()");
        } else {
            self.depth -= 1;
        }
        self.commands.push(DrawCommand::Pop);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
