use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock started, excluding time spent paused.
    pub elapsed: f32,

    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// make animated shaders jump. The clamped delta is what accumulates into
/// `elapsed`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: Duration,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without touching `elapsed`.
    ///
    /// Use after the window was hidden so the next frame does not count the gap.
    pub fn resume(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        self.advance(now.saturating_duration_since(self.last), now)
    }

    fn advance(&mut self, raw_dt: Duration, now: Instant) -> FrameTime {
        let dt = raw_dt.clamp(self.dt_min, self.dt_max);
        self.last = now;
        self.elapsed += dt;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::from_secs(10), Instant::now());
        assert_eq!(ft.dt, 0.25);
        assert_eq!(ft.elapsed, 0.25);
    }

    #[test]
    fn elapsed_accumulates_and_index_increments() {
        let mut clock = FrameClock::new();
        let now = Instant::now();
        let a = clock.advance(Duration::from_millis(100), now);
        let b = clock.advance(Duration::from_millis(100), now);
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert!((b.elapsed - 0.2).abs() < 1e-6);
    }
}
