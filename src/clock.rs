use std::thread::sleep;
use std::time::{Duration, Instant};

/// Spaces ticks out in time.
pub trait Pacer {
    /// Blocks until the next tick is due.
    fn wait(&mut self);
}

/// Sleeps away whatever is left of the tick period since the previous call.
pub struct FrameLimiter {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(period: Duration) -> Self {
        FrameLimiter { period, last_tick: None }
    }
}

impl Pacer for FrameLimiter {
    fn wait(&mut self) {
        if let Some(last) = self.last_tick {
            if let Some(remaining) = self.period.checked_sub(last.elapsed()) {
                sleep(remaining);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}
