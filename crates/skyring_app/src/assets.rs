//! Asset bundle handed over by the loader collaborator.

use std::sync::Arc;

use glam::Vec3;

use skyring_core::errors::{Result, SkyringError};
use skyring_scene::{Geometry, Mesh, PhysicalMaterial, Prefab, PrefabNode, SharedPrefab, TextureRef};

/// Everything the composer needs that comes from disk.
///
/// Decoding happens elsewhere. By the time a bundle exists every entry is
/// assumed loaded; [`validate`](Self::validate) only catches an unusable
/// aircraft template (no root, no mesh, or broken node links).
#[derive(Debug, Clone)]
pub struct SceneAssets {
    /// Pre-filtered environment map (from the HDR panorama)
    pub env_map: TextureRef,
    pub planet_map: TextureRef,
    /// Specular texture, used as the roughness map
    pub planet_roughness: TextureRef,
    pub planet_bump: TextureRef,
    /// Aircraft template; cloned per body, never mutated.
    pub aircraft: SharedPrefab,
}

impl SceneAssets {
    pub fn validate(&self) -> Result<()> {
        if self.aircraft.is_empty() {
            return Err(SkyringError::AssetMissing("aircraft template has no root node".into()));
        }
        self.aircraft.validate()?;
        if self.aircraft.mesh_count() == 0 {
            return Err(SkyringError::AssetMissing("aircraft template has no mesh".into()));
        }
        Ok(())
    }

    /// Bundle with conventional asset ids and a two-part stand-in aircraft,
    /// for headless runs where no loader is present.
    #[must_use]
    pub fn builtin() -> Self {
        let mut aircraft = Prefab::new();
        let root = aircraft.push(PrefabNode {
            name: Some("Aircraft".into()),
            ..PrefabNode::default()
        });

        let body_material = PhysicalMaterial {
            color: Vec3::new(0.8, 0.1, 0.1),
            roughness: 0.5,
            ..PhysicalMaterial::default()
        };
        let fuselage = aircraft.push(PrefabNode::with_mesh(Mesh::new(
            "Fuselage",
            Geometry::External(Arc::from("aircraft/fuselage")),
            body_material.clone(),
        )));
        let wings = aircraft.push(PrefabNode::with_mesh(Mesh::new(
            "Wings",
            Geometry::External(Arc::from("aircraft/wings")),
            body_material,
        )));
        aircraft.nodes[root].children_indices = vec![fuselage, wings];
        aircraft.root_indices.push(root);

        Self {
            env_map: TextureRef::new("env/old_room_2k.hdr"),
            planet_map: TextureRef::new("planet/earthmap.jpg"),
            planet_roughness: TextureRef::new("planet/earthspec.jpg"),
            planet_bump: TextureRef::new("planet/earthbump.jpg"),
            aircraft: Arc::new(aircraft),
        }
    }
}
