//! Per-frame animation for the orbiting fleet and the parallax rings.
//!
//! - [`OrbitingBody`]: randomized orbit parameters plus the container
//!   transform they produce
//! - [`RingState`]: exponentially smoothed ring rotation
//! - [`PointerOffset`]: pointer input passed explicitly into each step
//! - [`AnimationState`]: owns all of the above; [`AnimationState::advance`]
//!   is the per-frame step function

pub mod orbit;
pub mod parallax;
pub mod pointer;
pub mod state;

pub use orbit::OrbitingBody;
pub use parallax::RingState;
pub use pointer::PointerOffset;
pub use state::{AnimationState, sanitize_delta};
