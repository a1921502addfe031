use glam::Affine3A;
use smallvec::SmallVec;

use crate::transform::Transform;
use crate::{CameraKey, LightKey, MeshKey, NodeHandle};

/// Draw flags attached to a node that references a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    pub mesh: MeshKey,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Renderable {
    #[must_use]
    pub fn new(mesh: MeshKey) -> Self {
        Self {
            mesh,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// What a node carries, fixed when the node is built.
///
/// Traversals match on this tag instead of probing node contents, so the
/// host only draws [`NodeKind::Renderable`] nodes and the composer only
/// configures those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Pure transform container
    #[default]
    Group,
    Renderable(Renderable),
    Light(LightKey),
    Camera(CameraKey),
}

/// A scene node: hierarchy links, transform and its kind tag.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: SmallVec<[NodeHandle; 4]>,

    pub transform: Transform,
    pub kind: NodeKind,

    /// Visibility flag for the host
    pub visible: bool,
}

impl Node {
    /// Creates a group node with identity transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group)
    }

    #[must_use]
    pub fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: SmallVec::new(),
            transform: Transform::new(),
            kind,
            visible: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn renderable(&self) -> Option<&Renderable> {
        match &self.kind {
            NodeKind::Renderable(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn renderable_mut(&mut self) -> Option<&mut Renderable> {
        match &mut self.kind {
            NodeKind::Renderable(r) => Some(r),
            _ => None,
        }
    }

    /// World matrix as of the last [`Scene::update_matrix_world`](crate::Scene::update_matrix_world).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("Node")
    }
}
