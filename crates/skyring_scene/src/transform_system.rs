//! Transform System
//!
//! Propagates local matrices down the hierarchy into world matrices. It only
//! borrows the node and camera maps, not the whole [`Scene`](crate::Scene),
//! so callers can hold other scene parts at the same time.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::camera::Camera;
use crate::node::{Node, NodeKind};
use crate::{CameraKey, NodeHandle};

/// Updates world matrices for every tree under `roots`.
///
/// Uses an explicit stack instead of recursion. A node's world matrix is
/// only rebuilt when its local matrix or any ancestor changed.
pub fn update_hierarchy_iterative(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    roots: &[NodeHandle],
) {
    // (node, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root_handle in roots.iter().rev() {
        stack.push((root_handle, Affine3A::IDENTITY, false));
    }

    propagate(nodes, cameras, stack);
}

/// Updates the subtree rooted at `root_handle`, starting from its parent's
/// cached world matrix.
pub fn update_subtree(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    root_handle: NodeHandle,
) {
    let Some(node) = nodes.get(root_handle) else {
        return;
    };
    let parent_world = node
        .parent
        .and_then(|p| nodes.get(p))
        .map_or(Affine3A::IDENTITY, |p| p.transform.world_matrix);

    propagate(nodes, cameras, vec![(root_handle, parent_world, true)]);
}

fn propagate(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    mut stack: Vec<(NodeHandle, Affine3A, bool)>,
) {
    while let Some((node_handle, parent_world_matrix, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world_matrix * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);

            if let NodeKind::Camera(camera_key) = node.kind
                && let Some(camera) = cameras.get_mut(camera_key)
            {
                camera.update_view(&new_world);
            }
        }

        // Reverse push keeps children in declaration order.
        let current_world = node.transform.world_matrix;
        for &child_handle in node.children.iter().rev() {
            stack.push((child_handle, current_world, world_needs_update));
        }
    }
}
