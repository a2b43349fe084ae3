use crate::constants::FRAME_STATS_WINDOW;
use instant::Instant;
use std::time::Duration;

/// Rolling frame-interval summary, reported once per window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSummary {
    pub frames: u32,
    pub mean_interval: Duration,
    pub max_interval: Duration,
}

impl FrameSummary {
    pub fn fps(&self) -> f32 {
        let secs = self.mean_interval.as_secs_f32();
        if secs > 0.0 {
            1.0 / secs
        } else {
            0.0
        }
    }
}

#[derive(Debug)]
pub struct FrameStats {
    last: Option<Instant>,
    total: Duration,
    max: Duration,
    frames: u32,
    window: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::with_window(FRAME_STATS_WINDOW)
    }
}

impl FrameStats {
    pub fn with_window(window: u32) -> Self {
        Self {
            last: None,
            total: Duration::ZERO,
            max: Duration::ZERO,
            frames: 0,
            window: window.max(1),
        }
    }

    /// Record a frame at `now`; yields a summary every `window` intervals.
    pub fn record(&mut self, now: Instant) -> Option<FrameSummary> {
        let prev = self.last.replace(now)?;
        let dt = now.duration_since(prev);
        self.total += dt;
        self.max = self.max.max(dt);
        self.frames += 1;
        if self.frames < self.window {
            return None;
        }
        let summary = FrameSummary {
            frames: self.frames,
            mean_interval: self.total / self.frames,
            max_interval: self.max,
        };
        self.total = Duration::ZERO;
        self.max = Duration::ZERO;
        self.frames = 0;
        Some(summary)
    }

    /// Record a frame and log a summary once per window.
    ///
    /// Skipped entirely unless debug logging is enabled.
    pub fn tick(&mut self, now: Instant, particles: usize) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        if let Some(s) = self.record(now) {
            log::debug!(
                "[frame] {} frames, {:.1} fps, worst {:.1} ms, {} particles",
                s.frames,
                s.fps(),
                s.max_interval.as_secs_f64() * 1000.0,
                particles
            );
        }
    }
}
