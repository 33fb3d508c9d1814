use std::time::{Duration, Instant};

/// Delay used by [`Throttle::default`] and [`Debouncer::default`]
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Lets a call through at most once per `delay`; calls in between are dropped
#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    pub fn call<R>(&mut self, f: impl FnOnce() -> R) -> Option<R> {
        self.call_at(Instant::now(), f)
    }

    pub fn call_at<R>(&mut self, now: Instant, f: impl FnOnce() -> R) -> Option<R> {
        let ready = self.last.is_none_or(|last| now.saturating_duration_since(last) >= self.delay);
        if !ready {
            return None;
        }
        self.last = Some(now);
        Some(f())
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

/// Fires once after triggers stop arriving for `delay`
///
/// Each [`trigger`](Self::trigger) restarts the wait. [`poll`](Self::poll) reports `true`
/// exactly once per quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop a pending fire without running it
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_throttle_first_call_runs() {
        let mut throttle = Throttle::default();
        assert_eq!(throttle.call(|| 7), Some(7));
    }

    #[test]
    fn test_throttle_drops_calls_within_delay() {
        let start = Instant::now();
        let mut throttle = Throttle::new(300 * MS);

        assert!(throttle.call_at(start, || ()).is_some());
        assert!(throttle.call_at(start + 100 * MS, || ()).is_none());
        assert!(throttle.call_at(start + 299 * MS, || ()).is_none());
        assert!(throttle.call_at(start + 300 * MS, || ()).is_some());
        assert!(throttle.call_at(start + 400 * MS, || ()).is_none());
    }

    #[test]
    fn test_throttle_dropped_call_not_evaluated() {
        let start = Instant::now();
        let mut throttle = Throttle::new(300 * MS);
        let mut runs = 0;

        throttle.call_at(start, || runs += 1);
        throttle.call_at(start + 10 * MS, || runs += 1);
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);

        debouncer.trigger(start);
        assert!(!debouncer.poll(start + 200 * MS));
        assert!(debouncer.poll(start + 300 * MS));
        assert!(!debouncer.poll(start + 600 * MS), "fires only once");
    }

    #[test]
    fn test_debounce_retrigger_restarts_wait() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);

        debouncer.trigger(start);
        debouncer.trigger(start + 200 * MS);
        assert!(!debouncer.poll(start + 400 * MS));
        assert!(debouncer.poll(start + 500 * MS));
    }

    #[test]
    fn test_debounce_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.trigger(start);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.poll(start + DEFAULT_DELAY));
    }

    #[test]
    fn test_debounce_idle_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.poll(Instant::now()));
    }
}
