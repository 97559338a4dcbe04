//! Time management utilities

use std::time::Instant;

/// Frame clock producing the time value threaded into update traversals
///
/// Times are reported in milliseconds since the clock was created, which is
/// the unit widgets such as the caret blink of a text box work in.
pub struct FrameClock {
    start: Instant,
    last_frame_ms: f64,
    delta_ms: f64,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock starting at zero
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_frame_ms: 0.0,
            delta_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Milliseconds elapsed since creation
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Advance to the next frame and return its timestamp
    pub fn tick(&mut self) -> f64 {
        let now = self.elapsed_ms();
        self.advance_to(now)
    }

    /// Advance to an explicit timestamp (used by hosts with their own clock)
    ///
    /// Timestamps never move backwards; an earlier value is treated as a
    /// zero-length frame.
    pub fn advance_to(&mut self, time_ms: f64) -> f64 {
        let now = time_ms.max(self.last_frame_ms);
        self.delta_ms = now - self.last_frame_ms;
        self.last_frame_ms = now;
        self.frame_count += 1;
        now
    }

    /// Timestamp of the last frame
    pub fn current_ms(&self) -> f64 {
        self.last_frame_ms
    }

    /// Length of the last frame in milliseconds
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_to_is_monotonic() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance_to(100.0), 100.0);
        assert_eq!(clock.advance_to(50.0), 100.0);
        assert_eq!(clock.delta_ms(), 0.0);
        assert_eq!(clock.advance_to(160.0), 160.0);
        assert_eq!(clock.delta_ms(), 60.0);
        assert_eq!(clock.frame_count(), 3);
    }

    #[test]
    fn test_tick_moves_forward() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(second >= first);
    }
}
