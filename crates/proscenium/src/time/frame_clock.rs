use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Time elapsed since the clock epoch, in seconds (never clamped).
    ///
    /// Orbit angles are computed from this value, so angular velocities are
    /// expressed in radians per second.
    pub elapsed: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Snapshot at a fixed elapsed time. Useful for deterministic scenes and tests.
    #[inline]
    pub const fn at(elapsed: f64) -> Self {
        Self { dt: 0.0, elapsed, frame_index: 0 }
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The epoch is the moment the clock was created. Delta time is clamped to
/// avoid pathological values when the host is paused by the debugger,
/// minimized, or stalls; elapsed time is not, so time-driven positions stay
/// consistent with the wall clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    epoch: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum keeps per-frame updates stable after long stalls
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            epoch: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without moving the epoch.
    ///
    /// Useful when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds since the clock epoch.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.epoch).as_secs_f64(),
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
