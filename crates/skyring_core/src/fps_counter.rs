use std::time::Duration;

/// Frame-rate meter fed with per-frame deltas.
///
/// Reports a new value once at least one second of frame time has
/// accumulated. It consumes deltas rather than sampling the wall clock so
/// that fixed-step runs report their nominal rate.
pub struct FpsCounter {
    frame_count: u32,
    accumulated_time: Duration,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            accumulated_time: Duration::ZERO,
            current_fps: 0.0,
        }
    }

    pub fn update(&mut self, delta_seconds: f32) -> Option<f32> {
        self.frame_count += 1;
        // Deltas that do not fit a Duration (infinite, NaN) count as zero.
        let delta = Duration::try_from_secs_f32(delta_seconds.max(0.0)).unwrap_or(Duration::ZERO);
        self.accumulated_time = self.accumulated_time.saturating_add(delta);

        if self.accumulated_time.as_secs_f32() >= 1.0 {
            self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();

            self.accumulated_time = Duration::ZERO;
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }
}
