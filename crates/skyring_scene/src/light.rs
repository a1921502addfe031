use glam::Vec3;

/// Orthographic shadow frustum of a directional light.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub bias: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 512,
            near: 0.5,
            far: 100.0,
            left: -10.0,
            right: 10.0,
            top: 10.0,
            bottom: -10.0,
            bias: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Parallel rays from `-Z` of the owning node
    Directional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Linear colour
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional,
            cast_shadows: false,
            shadow: None,
        }
    }

    /// Enables shadow casting with the given frustum.
    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowConfig) -> Self {
        self.cast_shadows = true;
        self.shadow = Some(shadow);
        self
    }
}
