// --- File: scheduler.rs ---
use std::time::{Duration, Instant};

/// A periodic deadline. Dropping the ticker cancels every pending tick.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    /// Schedules ticks `generations_per_second` times a second, the first one
    /// a full interval after `now`.
    pub fn new(generations_per_second: u32, now: Instant) -> Self {
        let interval = Self::interval_for(generations_per_second);
        Self {
            interval,
            deadline: now + interval,
        }
    }

    pub fn interval_for(generations_per_second: u32) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(generations_per_second.max(1)))
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns `true` when the deadline has passed and moves it forward.
    ///
    /// At most one tick fires per call; if the caller fell more than an
    /// interval behind, the missed ticks are dropped instead of replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn interval_matches_rate() {
        assert_eq!(Ticker::interval_for(10), 100 * MS);
        assert_eq!(Ticker::interval_for(1), 1000 * MS);
        assert_eq!(Ticker::interval_for(0), 1000 * MS);
    }

    #[test]
    fn first_tick_waits_one_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10, start);

        assert_eq!(ticker.deadline(), start + 100 * MS);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + 99 * MS));
        assert!(ticker.poll(start + 100 * MS));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10, start);

        let fired = (1..=10u32)
            .filter(|&i| ticker.poll(start + MS * 100 * i))
            .count();
        assert_eq!(fired, 10);
        assert_eq!(ticker.deadline(), start + 1100 * MS);
    }

    #[test]
    fn late_poll_keeps_cadence() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10, start);

        assert!(ticker.poll(start + 130 * MS));
        assert_eq!(ticker.deadline(), start + 200 * MS);
    }

    #[test]
    fn backlog_is_dropped() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10, start);

        assert!(ticker.poll(start + 1000 * MS));
        assert!(!ticker.poll(start + 1000 * MS));
        assert_eq!(ticker.deadline(), start + 1100 * MS);
    }
}
