//! Foundational types shared by every skyring crate.
//!
//! - [`errors`]: the workspace error type and `Result` alias
//! - [`time`]: [`FrameClock`], the per-frame delta source
//! - [`fps_counter`]: [`FpsCounter`] for periodic frame-rate reports
//! - [`color`]: hex parsing and sRGB → linear conversion

pub mod color;
pub mod errors;
pub mod fps_counter;
pub mod time;

pub use errors::{Result, SkyringError};
pub use fps_counter::FpsCounter;
pub use time::FrameClock;
