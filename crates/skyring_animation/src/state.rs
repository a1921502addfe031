use rand::RngExt;

use crate::orbit::{DEFAULT_ANGULAR_SPEED, OrbitingBody};
use crate::parallax::RingState;
use crate::pointer::PointerOffset;

/// All mutable animation state of the scene.
///
/// Stepping it needs no rendering context: the frame driver hands in the
/// delta and the latest pointer offset, then copies the resulting
/// transforms onto scene nodes.
#[derive(Debug, Clone)]
pub struct AnimationState {
    pub bodies: Vec<OrbitingBody>,
    pub rings: Vec<RingState>,
    /// Revolution speed shared by all bodies, rad/s.
    pub angular_speed: f32,
    frame: u64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_ANGULAR_SPEED)
    }
}

impl AnimationState {
    #[must_use]
    pub fn new(angular_speed: f32) -> Self {
        Self {
            bodies: Vec::new(),
            rings: Vec::new(),
            angular_speed,
            frame: 0,
        }
    }

    /// Appends `count` bodies with freshly drawn parameters.
    pub fn spawn_fleet<R: RngExt>(&mut self, count: usize, rng: &mut R) {
        self.bodies.reserve(count);
        for _ in 0..count {
            self.bodies.push(OrbitingBody::random(rng));
        }
    }

    pub fn push_ring(&mut self, ring: RingState) {
        self.rings.push(ring);
    }

    /// Consumes the state and returns it advanced by one frame.
    #[must_use]
    pub fn advance(mut self, delta: f32, pointer: PointerOffset) -> Self {
        self.step(delta, pointer);
        self
    }

    /// Advances every body by `delta` seconds and every ring by one
    /// smoothing step toward `pointer`.
    pub fn step(&mut self, delta: f32, pointer: PointerOffset) {
        let delta = sanitize_delta(delta);

        for body in &mut self.bodies {
            body.update(delta, self.angular_speed);
        }
        for ring in &mut self.rings {
            ring.step(pointer);
        }

        self.frame += 1;
        log::trace!("animation frame {} (dt = {delta:.4})", self.frame);
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

/// Frame delta usable for stepping: negative, NaN and infinite values become
/// zero with a warning.
#[must_use]
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta >= 0.0 {
        delta
    } else {
        log::warn!("Invalid frame delta {delta} treated as zero");
        0.0
    }
}
