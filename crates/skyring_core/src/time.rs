use std::time::{Duration, Instant};

/// Frame clock supplying the elapsed-time delta between frames.
///
/// The animation core never reads wall-clock time itself; it only sees the
/// `delta` produced here (or a fixed step when driven deterministically).
pub struct FrameClock {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
    /// Upper bound applied to a single delta (e.g. after the host was suspended)
    pub max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a new clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            max_delta: Duration::from_millis(250),
        }
    }

    /// Advances the clock and returns the delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.saturating_duration_since(self.last_update);
        if raw > self.max_delta {
            log::debug!("Frame delta {raw:?} clamped to {:?}", self.max_delta);
        }
        self.delta = raw.min(self.max_delta);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_update = now;
        self.frame_count += 1;
        self.dt_seconds()
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}
