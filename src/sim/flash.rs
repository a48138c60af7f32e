//! Wall-hit flash state machine
//!
//! Two states: OFF and FLASHING. A wall contact while OFF starts a flash;
//! contacts while FLASHING are ignored. The frame driver counts flashing
//! frames and turns the flash off after `duration` of them.

use serde::{Deserialize, Serialize};

use crate::consts::FLASH_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    active: bool,
    /// Flashing frames counted since the flash started
    counter: u32,
    duration: u32,
}

impl Default for Flash {
    fn default() -> Self {
        Self::new(FLASH_DURATION)
    }
}

impl Flash {
    pub fn new(duration: u32) -> Self {
        Self {
            active: false,
            counter: 0,
            duration,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Start a flash. Returns false (and changes nothing) if one is already running.
    pub fn trigger(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.counter = 0;
        true
    }

    /// Count one frame. Returns whether this frame is drawn flashing.
    pub fn advance(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.counter += 1;
        if self.counter >= self.duration {
            self.active = false;
            self.counter = 0;
        }
        true
    }
}
