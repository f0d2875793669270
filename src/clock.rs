use std::thread;
use std::time::{Duration, Instant};

/// Caps the main loop at a fixed rate.  One tick, one frame.
#[derive(Debug)]
pub struct FrameLimiter {
    period: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        FrameLimiter {
            period: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep out whatever is left of the current period, then start the next.
    /// Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        let slept = self.period.saturating_sub(elapsed);
        if !slept.is_zero() {
            thread::sleep(slept);
        }
        self.frame_start = Instant::now();
        slept
    }
}
