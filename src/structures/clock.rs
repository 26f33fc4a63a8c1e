use chrono::{DateTime, Utc};

/// Time source for the suggested-time fill. Swappable so tests can pin
/// the instant instead of reading the wall clock.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
