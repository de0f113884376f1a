//! Frame timing

/// Tracks the previous frame timestamp and clamps elapsed time
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: f64,
    max_delta_ms: f64,
}

impl FrameClock {
    /// Start the clock at `now_ms` (the mount time)
    pub fn new(now_ms: f64, max_delta_ms: f64) -> Self {
        Self {
            last_time: now_ms,
            max_delta_ms,
        }
    }

    /// Elapsed ms since the previous tick, clamped to [0, max_delta_ms]
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        // Bogus timestamps count as no elapsed time and don't move the clock
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = (now_ms - self.last_time).clamp(0.0, self.max_delta_ms);
        self.last_time = now_ms;
        dt
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_clamps_stalls() {
        let mut clock = FrameClock::new(1000.0, 40.0);
        assert_eq!(clock.tick(1500.0), 40.0);
        assert_eq!(clock.last_time(), 1500.0);
        assert!((clock.tick(1516.5) - 16.5).abs() < 1e-9);
    }

    #[test]
    fn test_tick_never_negative() {
        let mut clock = FrameClock::new(1000.0, 40.0);
        assert_eq!(clock.tick(990.0), 0.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert_eq!(clock.last_time(), 990.0);
        assert_eq!(clock.tick(1000.0), 10.0);
    }
}
