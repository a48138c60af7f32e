//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame pacing (throttling requestAnimationFrame to the target rate)
//! - Achieved frame rate measurement
//! - Browser setup failures

use std::fmt;

/// Number of step timestamps kept for the frame rate average
const FPS_WINDOW: usize = 60;
/// Slack allowed when deciding a frame interval has passed (ms)
const STEP_TOLERANCE_MS: f64 = 1.0;

/// Throttles a display-rate callback to a target frame rate and measures
/// the rate actually achieved.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    last_step: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    recorded: usize,
}

impl FrameClock {
    pub fn new(target_fps: f32) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps.max(1.0) as f64,
            last_step: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            recorded: 0,
        }
    }

    /// Called on every display refresh with a millisecond timestamp.
    /// Returns true when a frame should run.
    pub fn should_step(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_step {
            if now_ms - last < self.interval_ms - STEP_TOLERANCE_MS {
                return false;
            }
        }
        self.last_step = Some(now_ms);

        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.recorded = (self.recorded + 1).min(FPS_WINDOW);
        true
    }

    /// Average steps per second over the recent window (0 until two steps)
    pub fn fps(&self) -> f32 {
        if self.recorded < 2 {
            return 0.0;
        }
        let newest = self.frame_times[(self.frame_index + FPS_WINDOW - 1) % FPS_WINDOW];
        let oldest = if self.recorded < FPS_WINDOW {
            self.frame_times[0]
        } else {
            self.frame_times[self.frame_index]
        };
        let elapsed = newest - oldest;
        if elapsed <= 0.0 {
            return 0.0;
        }
        ((self.recorded - 1) as f64 * 1000.0 / elapsed) as f32
    }
}

/// Failure acquiring the browser pieces the demo draws into
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    NoWindow,
    NoDocument,
    NoBody,
    NotACanvas(String),
    NoContext2d,
    Js(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "no global window"),
            SetupError::NoDocument => write!(f, "window has no document"),
            SetupError::NoBody => write!(f, "document has no body"),
            SetupError::NotACanvas(id) => write!(f, "element #{} is not a canvas", id),
            SetupError::NoContext2d => write!(f, "canvas has no 2d context"),
            SetupError::Js(msg) => write!(f, "javascript error: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SetupError::Js(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SetupError> for wasm_bindgen::JsValue {
    fn from(err: SetupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
