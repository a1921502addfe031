//! Orbiting bodies.
//!
//! Every body owns a container [`Transform`] that is rebuilt from scratch
//! each frame as a chain of intrinsic operations:
//!
//! ```text
//! identity
//!   · rotate(random_axis, random_axis_angle)   fixed random re-tilt of the whole orbit
//!   · rotate(+Y, current_angle)                revolution, the only accumulating term
//!   · rotate(+Z, orbit_tilt)                   inclination of the orbital plane
//!   · translate(+Y, vertical_offset)           orbital radius
//!   · rotate(+X, 90°)                          turns the model's up away from the centre
//! ```
//!
//! Read right to left, the model is first turned, pushed out along +Y,
//! swung down by the tilt, spun around +Y and finally re-oriented by the
//! random axis. Because the stack is rebuilt every frame nothing drifts.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;
use rand::RngExt;

use skyring_scene::{NodeHandle, Transform};

/// Revolution speed shared by all bodies, in rad/s.
pub const DEFAULT_ANGULAR_SPEED: f32 = 0.25;

/// Starting phase of every body.
pub const INITIAL_ANGLE: f32 = TAU;

/// Orbit inclination range, radians.
pub const MIN_ORBIT_TILT: f32 = 0.05 * PI;
pub const MAX_ORBIT_TILT: f32 = 0.50 * PI;

/// Orbit radius range.
pub const MIN_VERTICAL_OFFSET: f32 = 10.5;
pub const MAX_VERTICAL_OFFSET: f32 = 11.5;

/// Animation parameters and container transform of one orbiting body.
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    /// Container transform, owned by this body and rewritten every frame.
    pub container: Transform,
    /// Revolution angle in radians; grows by `delta * angular_speed` per frame.
    pub current_angle: f32,
    /// Inclination of the orbital plane about +Z.
    pub orbit_tilt: f32,
    /// Distance from the orbit centre along the tilted up axis.
    pub vertical_offset: f32,
    random_axis: Vec3,
    random_axis_angle: f32,
    /// Scene node mirroring `container`, if bound.
    pub node: Option<NodeHandle>,
}

impl OrbitingBody {
    /// Creates a body from explicit parameters. `random_axis` is normalized;
    /// a degenerate axis falls back to +Y.
    #[must_use]
    pub fn new(orbit_tilt: f32, vertical_offset: f32, random_axis: Vec3, random_axis_angle: f32) -> Self {
        let mut body = Self {
            container: Transform::new(),
            current_angle: INITIAL_ANGLE,
            orbit_tilt,
            vertical_offset,
            random_axis: random_axis.try_normalize().unwrap_or(Vec3::Y),
            random_axis_angle,
            node: None,
        };
        body.apply_transform();
        body
    }

    /// Draws a body with uniformly distributed parameters.
    pub fn random<R: RngExt>(rng: &mut R) -> Self {
        let vertical_offset = MIN_VERTICAL_OFFSET + rng.random::<f32>() * (MAX_VERTICAL_OFFSET - MIN_VERTICAL_OFFSET);
        let orbit_tilt = rng.random::<f32>() * (MAX_ORBIT_TILT - MIN_ORBIT_TILT) + MIN_ORBIT_TILT;
        let random_axis = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let random_axis_angle = rng.random::<f32>() * TAU;

        Self::new(orbit_tilt, vertical_offset, random_axis, random_axis_angle)
    }

    /// Binds the body to the scene node its container drives.
    #[must_use]
    pub fn with_node(mut self, node: NodeHandle) -> Self {
        self.node = Some(node);
        self
    }

    /// Unit axis of the fixed random re-tilt.
    #[inline]
    #[must_use]
    pub fn random_axis(&self) -> Vec3 {
        self.random_axis
    }

    #[inline]
    #[must_use]
    pub fn random_axis_angle(&self) -> f32 {
        self.random_axis_angle
    }

    /// Advances the revolution by `delta` seconds and rebuilds the container.
    pub fn update(&mut self, delta: f32, angular_speed: f32) {
        self.current_angle += delta * angular_speed;
        self.apply_transform();
    }

    /// Rebuilds the container transform from the current parameters.
    pub fn apply_transform(&mut self) {
        let c = &mut self.container;
        c.reset();
        c.rotate_on_axis(self.random_axis, self.random_axis_angle);
        c.rotate_y(self.current_angle);
        c.rotate_z(self.orbit_tilt);
        c.translate_y(self.vertical_offset);
        c.rotate_x(FRAC_PI_2);
    }

    /// Container position relative to the orbit centre.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.container.position
    }
}
