//! Scene graph module
//!
//! Manages the hierarchy and the data the renderer collaborator reads:
//! - [`Node`]: hierarchy links, [`Transform`] and a [`NodeKind`] tag
//! - [`Scene`]: node arena plus mesh/light/camera component maps
//! - [`Prefab`]: loader-produced templates, cloned on instancing
//! - [`transform_system`]: world-matrix propagation

pub mod camera;
pub mod environment;
pub mod light;
pub mod mesh;
pub mod node;
pub mod prefab;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use camera::Camera;
pub use environment::Environment;
pub use light::{Light, LightKind, ShadowConfig};
pub use mesh::{Geometry, Mesh, PhysicalMaterial, Side, TextureRef};
pub use node::{Node, NodeKind, Renderable};
pub use prefab::{Prefab, PrefabNode, SharedPrefab};
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MeshKey;
    pub struct LightKey;
    pub struct CameraKey;
}
