use glam::Vec2;

/// Pointer displacement from the viewport centre, pre-scaled to a small
/// range (a few 1e-4 per pixel).
///
/// Written by the input side on every move, read once per frame by
/// [`AnimationState::step`](crate::AnimationState::step). Last value wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset of `cursor` from the centre of `viewport`, times `scale`.
    #[must_use]
    pub fn from_screen(cursor: Vec2, viewport: Vec2, scale: f32) -> Self {
        let d = (cursor - viewport * 0.5) * scale;
        Self { x: d.x, y: d.y }
    }
}

impl From<Vec2> for PointerOffset {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}
