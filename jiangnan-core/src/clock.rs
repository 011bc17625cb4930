use std::cell::Cell;
use std::ops::Add;
use std::time::{Duration, Instant};

/// Milliseconds since the clock's origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let ms = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(ms))
    }
}

pub trait Clock {
    fn now(&self) -> Timestamp;
    fn tick_interval(&self) -> Duration;
}

fn interval_for(frame_rate: u32) -> Duration {
    Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64)
}

pub struct SystemClock {
    origin: Instant,
    interval: Duration,
}

impl SystemClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            origin: Instant::now(),
            interval: interval_for(frame_rate),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let ms = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        Timestamp(ms)
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }
}

/// Clock that only moves when told to. Used by tests and benches.
pub struct ManualClock {
    now: Cell<u64>,
    interval: Duration,
}

impl ManualClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            now: Cell::new(0),
            interval: interval_for(frame_rate),
        }
    }

    pub fn set(&self, ms: u64) {
        // monotonic
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }

    pub fn advance(&self, by: Duration) {
        let next = Timestamp(self.now.get()) + by;
        self.now.set(next.0);
    }

    /// Advances by one frame interval.
    pub fn step(&self) {
        self.advance(self.interval);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_never_goes_back() {
        let clock = ManualClock::new(60);
        clock.set(500);
        clock.set(100);
        assert_eq!(clock.now(), Timestamp::from_millis(500));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now().as_millis(), 750);
    }

    #[test]
    fn sixty_hertz_interval() {
        let clock = SystemClock::new(60);
        assert_eq!(clock.tick_interval().as_micros(), 16_666);
        assert!(clock.now() >= Timestamp::ZERO);
    }

    #[test]
    fn saturating_since() {
        let a = Timestamp::from_millis(100);
        let b = Timestamp::from_millis(350);
        assert_eq!(b.saturating_since(a), Duration::from_millis(250));
        assert_eq!(a.saturating_since(b), Duration::ZERO);
    }
}
