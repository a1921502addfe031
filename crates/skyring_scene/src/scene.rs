use slotmap::SlotMap;

use skyring_core::errors::{Result, SkyringError};

use crate::camera::Camera;
use crate::environment::Environment;
use crate::light::Light;
use crate::mesh::Mesh;
use crate::node::{Node, NodeKind, Renderable};
use crate::prefab::Prefab;
use crate::transform::Transform;
use crate::transform_system;
use crate::{CameraKey, LightKey, MeshKey, NodeHandle};

/// Scene graph
///
/// Owns every node and the component data nodes point at (meshes, lights,
/// cameras). Handles stay valid for the lifetime of the scene; the demo
/// never removes nodes at runtime.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub meshes: SlotMap<MeshKey, Mesh>,
    pub lights: SlotMap<LightKey, Light>,
    pub cameras: SlotMap<CameraKey, Camera>,

    pub environment: Environment,
    pub active_camera: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            environment: Environment::new(),
            active_camera: None,
        }
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Adds a node at the root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node under `parent`, or at the root when `parent` is stale.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::warn!("Parent node not found, adding '{}' at the root", child.name);
            return self.add_node(child);
        }

        let handle = self.nodes.insert(child);
        self.nodes[parent].children.push(handle);
        self.nodes[handle].parent = Some(parent);
        handle
    }

    /// Adds `node` under `parent` if given, otherwise at the root.
    pub fn insert(&mut self, node: Node, parent: Option<NodeHandle>) -> NodeHandle {
        match parent {
            Some(p) => self.add_to_parent(node, p),
            None => self.add_node(node),
        }
    }

    /// Creates an empty group node.
    pub fn add_group(&mut self, name: &str, parent: Option<NodeHandle>) -> NodeHandle {
        self.insert(Node::new(name), parent)
    }

    /// Re-parents `child` under `parent`.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) -> bool {
        if child == parent {
            log::warn!("Cannot attach node to itself");
            return false;
        }
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::warn!("attach: stale node handle");
            return false;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("attach: would create a cycle");
            return false;
        }

        let old_parent = self.nodes[child].parent;
        match old_parent {
            Some(old) => {
                if let Some(old_parent) = self.nodes.get_mut(old) {
                    old_parent.children.retain(|c| *c != child);
                }
            }
            None => self.root_nodes.retain(|r| *r != child),
        }

        self.nodes[parent].children.push(child);
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.transform.mark_dirty();
        true
    }

    /// Whether `ancestor` appears on the parent chain of `node` (or is `node`).
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = Some(node);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Like [`get_node_mut`](Self::get_node_mut) but reports a stale handle as an error.
    pub fn try_node_mut(&mut self, handle: NodeHandle) -> Result<&mut Node> {
        self.nodes.get_mut(handle).ok_or(SkyringError::NodeNotFound)
    }

    /// Finds the first node with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.name == name).then_some(handle))
    }

    /// `root` followed by all of its descendants in depth-first order.
    #[must_use]
    pub fn descendants(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            out.push(handle);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    // ========================================================================
    // Components
    // ========================================================================

    /// Stores `mesh` and adds a renderable node for it.
    pub fn add_mesh(&mut self, mesh: Mesh, parent: Option<NodeHandle>) -> NodeHandle {
        let name = mesh.name.clone();
        let key = self.meshes.insert(mesh);
        self.insert(Node::with_kind(name, NodeKind::Renderable(Renderable::new(key))), parent)
    }

    pub fn add_light(&mut self, light: Light, parent: Option<NodeHandle>) -> NodeHandle {
        let key = self.lights.insert(light);
        self.insert(Node::with_kind("Light", NodeKind::Light(key)), parent)
    }

    pub fn add_camera(&mut self, camera: Camera, parent: Option<NodeHandle>) -> NodeHandle {
        let key = self.cameras.insert(camera);
        self.insert(Node::with_kind("Camera", NodeKind::Camera(key)), parent)
    }

    #[must_use]
    pub fn mesh_of(&self, handle: NodeHandle) -> Option<&Mesh> {
        let renderable = self.nodes.get(handle)?.renderable()?;
        self.meshes.get(renderable.mesh)
    }

    #[must_use]
    pub fn light_of(&self, handle: NodeHandle) -> Option<&Light> {
        match self.nodes.get(handle)?.kind {
            NodeKind::Light(key) => self.lights.get(key),
            _ => None,
        }
    }

    /// The (transform, camera) pair of a camera node.
    pub fn query_camera_bundle(&mut self, handle: NodeHandle) -> Option<(&mut Transform, &mut Camera)> {
        let NodeKind::Camera(key) = self.nodes.get(handle)?.kind else {
            return None;
        };
        let camera = self.cameras.get_mut(key)?;
        let transform = &mut self.nodes.get_mut(handle)?.transform;
        Some((transform, camera))
    }

    pub fn query_main_camera_bundle(&mut self) -> Option<(&mut Transform, &mut Camera)> {
        let handle = self.active_camera?;
        self.query_camera_bundle(handle)
    }

    /// Visits every renderable node under `root` (inclusive) with its mesh.
    ///
    /// Returns the number of nodes visited.
    pub fn for_each_renderable_in<F>(&mut self, root: NodeHandle, mut f: F) -> usize
    where
        F: FnMut(&mut Renderable, &mut Mesh),
    {
        let mut visited = 0;
        for handle in self.descendants(root) {
            let Some(renderable) = self.nodes.get_mut(handle).and_then(Node::renderable_mut) else {
                continue;
            };
            if let Some(mesh) = self.meshes.get_mut(renderable.mesh) {
                f(renderable, mesh);
                visited += 1;
            }
        }
        visited
    }

    /// Visible renderable nodes with their world matrices, for the host to draw.
    pub fn iter_renderables(&self) -> impl Iterator<Item = (NodeHandle, &Node, &Mesh)> {
        self.nodes.iter().filter_map(|(handle, node)| {
            if !node.visible {
                return None;
            }
            let renderable = node.renderable()?;
            let mesh = self.meshes.get(renderable.mesh)?;
            Some((handle, node, mesh))
        })
    }

    // ========================================================================
    // Prefab instancing
    // ========================================================================

    /// Deep-copies `prefab` under `parent` and returns the instance root.
    ///
    /// Meshes are cloned into this scene's mesh map, so materials of
    /// different instances never alias each other or the template. A prefab
    /// with several roots is wrapped in a group. Returns `None` for an empty
    /// prefab.
    pub fn instantiate(&mut self, prefab: &Prefab, parent: Option<NodeHandle>) -> Option<NodeHandle> {
        // Each template node is copied at most once, so a cyclic prefab still terminates.
        let mut copied = vec![false; prefab.nodes.len()];
        match prefab.root_indices.as_slice() {
            [] => None,
            [single] => self.instantiate_node(prefab, *single, parent, &mut copied),
            roots => {
                let group = self.add_group("PrefabRoot", parent);
                for &root in roots {
                    self.instantiate_node(prefab, root, Some(group), &mut copied);
                }
                Some(group)
            }
        }
    }

    fn instantiate_node(
        &mut self,
        prefab: &Prefab,
        index: usize,
        parent: Option<NodeHandle>,
        copied: &mut [bool],
    ) -> Option<NodeHandle> {
        let mut first = None;
        // (prefab index, parent in scene)
        let mut stack = vec![(index, parent)];
        while let Some((idx, scene_parent)) = stack.pop() {
            let Some(src) = prefab.nodes.get(idx) else {
                log::warn!("Prefab references missing node {idx}");
                continue;
            };
            if std::mem::replace(&mut copied[idx], true) {
                log::warn!("Prefab node {idx} is linked more than once, skipping");
                continue;
            }

            let name = src.name.clone().unwrap_or_else(|| format!("PrefabNode{idx}"));
            let kind = match &src.mesh {
                Some(mesh) => NodeKind::Renderable(Renderable::new(self.meshes.insert(mesh.clone()))),
                None => NodeKind::Group,
            };
            let mut node = Node::with_kind(name, kind);
            node.transform = src.transform.clone();
            node.transform.mark_dirty();

            let handle = self.insert(node, scene_parent);
            first.get_or_insert(handle);

            for &child in src.children_indices.iter().rev() {
                stack.push((child, Some(handle)));
            }
        }
        first
    }

    // ========================================================================
    // Matrix update
    // ========================================================================

    /// Propagates transforms into world matrices. Call once per frame after
    /// all local transforms are written.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy_iterative(&mut self.nodes, &mut self.cameras, &self.root_nodes);
    }

    /// Refreshes one subtree only.
    pub fn update_subtree(&mut self, root: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, &mut self.cameras, root);
    }
}
