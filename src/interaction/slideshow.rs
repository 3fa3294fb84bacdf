use std::time::Duration;

pub const SLIDE_INTERVAL: Duration = Duration::from_millis(6000);

/// Auto-advancing background carousel.
///
/// Driven by elapsed time rather than a wall clock; advances unconditionally
/// every [`SLIDE_INTERVAL`] until torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
    carry: Duration,
    running: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, carry: Duration::ZERO, running: true }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Let `elapsed` pass on the timer; returns the index afterwards
    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        if !self.running || self.len == 0 {
            return self.index;
        }
        self.carry = self.carry.saturating_add(elapsed);
        let interval = SLIDE_INTERVAL.as_millis();
        let carried_ms = self.carry.as_millis();
        let ticks = carried_ms / interval;
        if ticks > 0 {
            self.index = ((self.index as u128 + ticks) % self.len as u128) as usize;
            let sub_millis = Duration::from_nanos(u64::from(self.carry.subsec_nanos() % 1_000_000));
            self.carry = Duration::from_millis((carried_ms % interval) as u64) + sub_millis;
        }
        self.index
    }

    /// Stop the timer; later elapsed time is ignored
    pub fn teardown(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }
}
