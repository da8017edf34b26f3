use std::time::Duration;

/// Opacity ramp for the audience view.
///
/// On navigation the newly current slide starts fully transparent above the
/// still-opaque previous slide, then a fixed per-tick delta drives its
/// opacity to 255. Stacking order substitutes for a true cross-dissolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    Fading,
}

#[derive(Debug, Clone)]
pub struct Crossfade {
    phase: FadePhase,
    opacity: u8,
    delta: u16,
}

impl Crossfade {
    pub fn new(fade_duration_ms: u32, frame_rate: u32) -> Self {
        // A zero duration degenerates to an instant cut.
        let delta = if fade_duration_ms == 0 {
            255
        } else {
            (frame_rate * 255).div_ceil(fade_duration_ms).min(255)
        };
        Self {
            phase: FadePhase::Idle,
            opacity: 255,
            delta: delta as u16,
        }
    }

    /// Reset to fully transparent and start fading. A fade already in
    /// progress is simply superseded.
    pub fn restart(&mut self) {
        self.opacity = 0;
        self.phase = FadePhase::Fading;
    }

    /// Advance one frame. No-op while idle; never overshoots 255.
    pub fn tick(&mut self) {
        if self.phase != FadePhase::Fading {
            return;
        }
        self.opacity = (self.opacity as u16 + self.delta).min(255) as u8;
        if self.opacity == 255 {
            self.phase = FadePhase::Idle;
        }
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.phase == FadePhase::Fading
    }
}

/// Converts wall-clock time into fixed-rate animation ticks. Repaints arrive
/// at the display's refresh rate and on every input event; draining elapsed
/// time through this keeps the fade speed independent of frame pacing.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    accumulated: Duration,
}

impl TickTimer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Account for elapsed wall-clock time and return how many ticks are
    /// due. A stalled window replays at most one second of animation.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated = (self.accumulated + elapsed).min(Duration::from_secs(1));
        let mut ticks = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            ticks += 1;
        }
        ticks
    }
}
