use glam::Vec2;

use skyring_animation::PointerOffset;

/// Per-frame input snapshot.
///
/// The windowing collaborator forwards raw events into the `handle_*`
/// methods; the frame driver reads the accumulated state once per frame and
/// calls [`end_frame`](Self::end_frame) to clear the per-frame deltas.
#[derive(Debug, Clone)]
pub struct Input {
    /// Cursor position in window pixels
    pub cursor_position: Vec2,
    /// Cursor movement since the last frame
    pub cursor_delta: Vec2,
    /// Scroll amount this frame (x, y)
    pub scroll_delta: Vec2,
    pub screen_size: Vec2,
    pub primary_pressed: bool,
    pub secondary_pressed: bool,

    pointer_scale: f32,
    pointer: PointerOffset,
    has_cursor: bool,
}

impl Input {
    #[must_use]
    pub fn new(pointer_scale: f32) -> Self {
        Self {
            cursor_position: Vec2::ZERO,
            cursor_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            screen_size: Vec2::ZERO,
            primary_pressed: false,
            secondary_pressed: false,
            pointer_scale,
            pointer: PointerOffset::ZERO,
            has_cursor: false,
        }
    }

    /// Latest pointer offset from the viewport centre, already scaled.
    #[inline]
    #[must_use]
    pub fn pointer_offset(&self) -> PointerOffset {
        self.pointer
    }

    /// Clears per-frame deltas. The pointer offset persists.
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
        if self.has_cursor {
            self.refresh_pointer();
        }
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        // The first event only establishes the position.
        if self.has_cursor {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
        self.has_cursor = true;
        self.refresh_pointer();
    }

    pub fn handle_buttons(&mut self, primary: bool, secondary: bool) {
        self.primary_pressed = primary;
        self.secondary_pressed = secondary;
    }

    /// Scroll in lines; pixel deltas should be divided by ~10 first.
    pub fn handle_scroll(&mut self, x: f32, y: f32) {
        self.scroll_delta += Vec2::new(x, y);
    }

    fn refresh_pointer(&mut self) {
        self.pointer = PointerOffset::from_screen(self.cursor_position, self.screen_size, self.pointer_scale);
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new(0.0003)
    }
}
