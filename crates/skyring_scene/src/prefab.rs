use std::sync::Arc;

use skyring_core::errors::{Result, SkyringError};

use crate::mesh::Mesh;
use crate::transform::Transform;

/// Template node: pure data, children referenced by index.
#[derive(Debug, Clone, Default)]
pub struct PrefabNode {
    pub name: Option<String>,
    pub transform: Transform,
    /// Indices into `Prefab::nodes`
    pub children_indices: Vec<usize>,
    pub mesh: Option<Mesh>,
}

impl PrefabNode {
    #[must_use]
    pub fn with_mesh(mesh: Mesh) -> Self {
        Self {
            name: Some(mesh.name.clone()),
            mesh: Some(mesh),
            ..Self::default()
        }
    }
}

/// Template hierarchy produced by the asset loader (e.g. a decoded aircraft model).
///
/// A prefab never holds scene handles. [`Scene::instantiate`](crate::Scene::instantiate)
/// deep-copies it into the scene, so every instance owns its own nodes,
/// meshes and materials while the template itself stays untouched.
#[derive(Debug, Clone, Default)]
pub struct Prefab {
    pub nodes: Vec<PrefabNode>,
    pub root_indices: Vec<usize>,
}

impl Prefab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-node prefab wrapping one mesh.
    #[must_use]
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self {
            nodes: vec![PrefabNode::with_mesh(mesh)],
            root_indices: vec![0],
        }
    }

    /// Appends a node and returns its index.
    pub fn push(&mut self, node: PrefabNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root_indices.is_empty()
    }

    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.mesh.is_some()).count()
    }

    /// Checks that the roots and child links form a forest: every index is
    /// in range and every node is reached at most once.
    pub fn validate(&self) -> Result<()> {
        let mut reached = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = self.root_indices.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            let Some(node) = self.nodes.get(idx) else {
                return Err(SkyringError::InvalidPrefab(format!(
                    "index {idx} out of range ({} nodes)",
                    self.nodes.len()
                )));
            };
            if std::mem::replace(&mut reached[idx], true) {
                return Err(SkyringError::InvalidPrefab(format!("node {idx} is linked more than once")));
            }
            stack.extend(node.children_indices.iter().rev());
        }
        Ok(())
    }
}

/// Shareable prefab reference.
pub type SharedPrefab = Arc<Prefab>;
