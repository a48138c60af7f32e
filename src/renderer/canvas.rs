//! Canvas 2D surface (browser only)

use web_sys::CanvasRenderingContext2d;

use super::{Color, RectMode, Surface};

/// Sticky style state saved and restored with push/pop
#[derive(Debug, Clone, Copy)]
struct Style {
    fill: Option<Color>,
    stroke: Option<Color>,
    text_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Color::rgb(255, 255, 255)),
            stroke: Some(Color::BLACK),
            text_size: 12.0,
        }
    }
}

/// `Surface` backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    style: Style,
    saved: Vec<Style>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
            style: Style::default(),
            saved: Vec::new(),
        }
    }

    fn apply_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for CanvasSurface {
    fn background(&mut self, color: Color) {
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.apply_fill(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        self.ctx.restore();
    }

    fn fill(&mut self, color: Color) {
        self.style.fill = Some(color);
    }

    fn stroke(&mut self, color: Color) {
        self.style.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.style.stroke = None;
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, mode: RectMode) {
        let (x, y) = match mode {
            RectMode::Corner => (x, y),
            RectMode::Center => (x - w / 2.0, y - h / 2.0),
        };
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);

        if let Some(fill) = self.style.fill {
            self.apply_fill(fill);
            self.ctx.fill_rect(x, y, w, h);
        }
        if let Some(stroke) = self.style.stroke {
            self.ctx.set_stroke_style_str(&stroke.to_css());
            self.ctx.stroke_rect(x, y, w, h);
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let Some(stroke) = self.style.stroke else {
            return;
        };
        self.ctx.set_stroke_style_str(&stroke.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }

    fn text_size(&mut self, size: f32) {
        self.style.text_size = size;
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let Some(fill) = self.style.fill else {
            return;
        };
        self.apply_fill(fill);
        self.ctx.set_font(&format!("{}px sans-serif", self.style.text_size));
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn push(&mut self) {
        self.saved.push(self.style);
        self.ctx.save();
    }

    fn pop(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }
}
