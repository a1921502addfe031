use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, Vec3};

use skyring_scene::Transform;

use crate::input::Input;

/// Keeps `phi` off the poles where `look_at` degenerates.
const PHI_EPS: f32 = 0.0001;

/// Damped orbit camera controller.
///
/// Keeps the camera on a sphere around `center` in spherical coordinates
/// (`theta` around +Y, `phi` down from +Y). Dragging with the primary
/// button rotates, scrolling zooms, dragging with the secondary button pans.
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 1000.0,

            center,
            radius,
            theta: 0.0,
            phi: FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Controller whose initial pose reproduces a camera at `position`
    /// looking at `center`.
    #[must_use]
    pub fn from_position(center: Vec3, position: Vec3) -> Self {
        let offset = position - center;
        let radius = offset.length().max(f32::EPSILON);
        let mut controls = Self::new(center, radius);
        controls.theta = offset.x.atan2(offset.z);
        controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        controls
    }

    /// Camera position implied by the current spherical coordinates.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.center + Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta) * self.radius
    }

    /// Applies this frame's input and writes the resulting pose to `transform`.
    pub fn update(&mut self, transform: &mut Transform, input: &Input, fov: f32, dt: f32) {
        let screen_height = input.screen_size.y.max(1.0);

        // A drag across the full window height is one full turn.
        if input.primary_pressed {
            self.rotate_delta -= input.cursor_delta * (TAU / screen_height) * self.rotate_speed;
        }
        let turn = self.take_rotation(dt);
        self.theta += turn.x;
        self.phi = (self.phi + turn.y).clamp(PHI_EPS, PI - PHI_EPS);

        // Scrolling up moves in; a negative exponent moves out by the same factor.
        if input.scroll_delta.y != 0.0 {
            let factor = (1.0 - self.zoom_speed).powf(input.scroll_delta.y);
            self.radius = (self.radius * factor).clamp(self.min_distance, self.max_distance);
        }

        if input.secondary_pressed {
            self.pan(input.cursor_delta, fov, screen_height);
        }

        transform.position = self.eye();
        transform.look_at(self.center, Vec3::Y);
    }

    /// Share of the pending rotation applied this frame. With damping the
    /// remainder decays at `damping_factor` per 60 Hz frame.
    fn take_rotation(&mut self, dt: f32) -> Vec2 {
        if !self.enable_damping {
            return std::mem::take(&mut self.rotate_delta);
        }
        let keep = (1.0 - self.damping_factor).powf(dt * 60.0);
        let turn = self.rotate_delta * (1.0 - keep);
        self.rotate_delta -= turn;
        turn
    }

    /// Slides `center` in the view plane so the point under the cursor follows it.
    fn pan(&mut self, cursor_delta: Vec2, fov: f32, screen_height: f32) {
        let world_per_pixel = 2.0 * self.radius * (fov * 0.5).tan() / screen_height;
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let right = Vec3::new(cos_theta, 0.0, -sin_theta);
        let up = right.cross(self.center - self.eye()).normalize();
        self.center += (up * cursor_delta.y - right * cursor_delta.x) * world_per_pixel * self.pan_speed;
    }
}
