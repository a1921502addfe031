//! Ring parallax.
//!
//! Each ring chases `pointer * sensitivity` through a first-order low-pass
//! filter. Rings use different sensitivities (and signs) so they lag and
//! lean by different amounts, which reads as depth.

use glam::Vec2;

use skyring_scene::NodeHandle;

use crate::pointer::PointerOffset;

/// Weight kept from the previous rotation each frame.
pub const RETAIN: f32 = 0.95;
/// Weight given to the new target each frame.
pub const BLEND: f32 = 0.05;

/// Default sensitivities of the three concentric rings, inner to outer.
pub const DEFAULT_SENSITIVITIES: [f32; 3] = [1.2, 0.375, -0.275];

#[derive(Debug, Clone, PartialEq)]
pub struct RingState {
    /// Euler (x, y) rotation applied to the ring node.
    pub rotation: Vec2,
    pub sensitivity: f32,
    /// Scene node receiving `rotation`, if bound.
    pub node: Option<NodeHandle>,
}

impl RingState {
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        Self {
            rotation: Vec2::ZERO,
            sensitivity,
            node: None,
        }
    }

    #[must_use]
    pub fn with_node(mut self, node: NodeHandle) -> Self {
        self.node = Some(node);
        self
    }

    /// One smoothing step. The vertical pointer axis drives rotation about
    /// x, the horizontal one rotation about y.
    pub fn step(&mut self, pointer: PointerOffset) {
        self.rotation.x = self.rotation.x * RETAIN + pointer.y * BLEND * self.sensitivity;
        self.rotation.y = self.rotation.y * RETAIN + pointer.x * BLEND * self.sensitivity;
    }

    /// Fixed point of [`step`](Self::step) for a constant pointer.
    #[must_use]
    pub fn target(&self, pointer: PointerOffset) -> Vec2 {
        Vec2::new(pointer.y, pointer.x) * self.sensitivity
    }
}
