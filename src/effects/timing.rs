use std::time::{Duration, Instant};

/// Cycles through a fixed list on a fixed interval, advanced by the host tick.
pub struct Rotator<T: 'static> {
    items: &'static [T],
    index: usize,
    interval: Duration,
    last_change: Instant,
}

impl<T: 'static> Rotator<T> {
    pub fn new(items: &'static [T], interval: Duration, now: Instant) -> Self {
        Self {
            items,
            index: 0,
            interval,
            last_change: now,
        }
    }

    pub fn current(&self) -> Option<&'static T> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true when the current item changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.items.len() < 2 || now.duration_since(self.last_change) < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.items.len();
        self.last_change = now;
        true
    }
}

/// Holds the latest value until `delay` passes without a newer one.
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending value once it has settled.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.duration_since(*at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }
}
