use std::thread;
use std::time::{Duration, Instant};

/// Millisecond clock plus a frame limiter.
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last_frame: now }
    }

    /// Milliseconds since the clock was created.
    pub fn ticks_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Sleeps until 1/fps seconds have passed since the previous call.
    pub fn tick(&mut self, fps: u32) {
        let frame = Duration::from_secs(1) / fps.max(1);
        let elapsed = self.last_frame.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
        self.last_frame = Instant::now();
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
    fn tick_holds_frame_rate() {
        let mut clock = FrameClock::new();
        let before = Instant::now();
        for _ in 0..3 {
            clock.tick(100);
        }
        // the first tick may return right away, the other two wait ~10 ms each
        assert!(before.elapsed() >= Duration::from_millis(18));
    }

    #[test]
    fn ticks_are_monotonic() {
        let clock = FrameClock::new();
        let a = clock.ticks_ms();
        thread::sleep(Duration::from_millis(5));
        assert!(clock.ticks_ms() >= a + 5);
    }
}
