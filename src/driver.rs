use std::time::Duration;

/// Fixed-interval tick scheduler.
///
/// Callers feed it elapsed wall-clock time; it answers how many whole ticks
/// are due.  Leftover time carries into the next call so the average rate
/// matches `interval` regardless of how irregularly `advance` is called.
#[derive(Clone, Debug)]
pub struct TickDriver {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl TickDriver {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)start from a clean slate.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    /// Stop and discard any pending time.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Account for `elapsed` and return the number of ticks now due, at most
    /// `max_ticks`.  Time beyond the cap is dropped.
    pub fn advance(&mut self, elapsed: Duration, max_ticks: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval && due < max_ticks {
            self.accumulated -= self.interval;
            due += 1;
        }
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
        }
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_30: Duration = Duration::from_millis(30);

    #[test]
    fn stopped_driver_never_ticks() {
        let mut d = TickDriver::new(MS_30);
        assert_eq!(d.advance(Duration::from_secs(1), 100), 0);
        assert!(!d.is_running());
    }

    #[test]
    fn whole_intervals_are_due() {
        let mut d = TickDriver::new(MS_30);
        d.start();
        assert_eq!(d.advance(Duration::from_millis(29), 10), 0);
        assert_eq!(d.advance(Duration::from_millis(1), 10), 1);
        assert_eq!(d.advance(Duration::from_millis(95), 10), 3);
        assert_eq!(d.until_next(), Duration::from_millis(25));
    }

    #[test]
    fn cap_drops_backlog() {
        let mut d = TickDriver::new(MS_30);
        d.start();
        assert_eq!(d.advance(Duration::from_secs(10), 5), 5);
        assert!(d.until_next() > Duration::ZERO);
        assert_eq!(d.advance(Duration::ZERO, 5), 0);
    }

    #[test]
    fn stop_discards_pending_time() {
        let mut d = TickDriver::new(MS_30);
        d.start();
        d.advance(Duration::from_millis(20), 10);
        d.stop();
        d.start();
        assert_eq!(d.advance(Duration::from_millis(20), 10), 0);
    }
}
