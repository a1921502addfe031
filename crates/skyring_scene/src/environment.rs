//! Scene-wide image based lighting settings.

use crate::mesh::TextureRef;

#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    /// Pre-filtered environment map (from an HDR panorama)
    pub env_map: Option<TextureRef>,
    pub intensity: f32,
    pub ambient_color: glam::Vec3,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self {
            env_map: None,
            intensity: 1.0,
            ambient_color: glam::Vec3::ZERO,
        }
    }

    pub fn set_env_map(&mut self, texture: Option<TextureRef>) {
        self.env_map = texture;
    }

    #[must_use]
    pub fn has_env_map(&self) -> bool {
        self.env_map.is_some()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
