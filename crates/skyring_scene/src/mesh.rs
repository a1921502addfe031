//! Mesh, geometry and material descriptors.
//!
//! These are plain data handed to the renderer collaborator. Nothing here
//! owns GPU state; geometry is described parametrically and textures are
//! referenced by the identifier the asset loader assigned them.

use std::sync::Arc;

use glam::Vec3;

/// Identifier of a texture owned by the asset loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureRef(pub Arc<str>);

impl TextureRef {
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Parametric geometry description.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Flat annulus in the local XY plane.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
    /// Geometry decoded by the loader, referenced by its asset id.
    External(Arc<str>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Physically based material parameters (metal/rough + sheen + clearcoat).
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalMaterial {
    /// Linear base colour
    pub color: Vec3,
    pub map: Option<TextureRef>,
    pub roughness_map: Option<TextureRef>,
    pub bump_map: Option<TextureRef>,
    pub bump_scale: f32,
    pub env_map: Option<TextureRef>,
    pub env_map_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub sheen: f32,
    pub sheen_roughness: f32,
    /// Linear sheen colour
    pub sheen_color: Vec3,
    pub clearcoat: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub side: Side,
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            map: None,
            roughness_map: None,
            bump_map: None,
            bump_scale: 1.0,
            env_map: None,
            env_map_intensity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            sheen: 0.0,
            sheen_roughness: 1.0,
            sheen_color: Vec3::ZERO,
            clearcoat: 0.0,
            opacity: 1.0,
            transparent: false,
            side: Side::Front,
        }
    }
}

/// A drawable: geometry plus material.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub geometry: Geometry,
    pub material: PhysicalMaterial,
}

impl Mesh {
    #[must_use]
    pub fn new(name: impl Into<String>, geometry: Geometry, material: PhysicalMaterial) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
        }
    }
}
