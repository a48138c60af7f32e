//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod flash;
pub mod hole;
pub mod rock;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{Wall, wall_contact};
pub use flash::Flash;
pub use hole::Hole;
pub use rock::Rock;
pub use state::{SimState, Snapshot};
pub use tick::{FrameOutcome, tick};
