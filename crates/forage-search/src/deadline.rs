use std::time::{Duration, Instant};

/// A wall-clock budget measured from a fixed starting instant.
///
/// Every bounded loop receives one of these and polls [`expired`](Self::expired)
/// at its iteration boundary. Nothing is interrupted mid-iteration.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    /// A deadline `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Time allotted.
    #[inline]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left, zero once expired.
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }

    /// Whether more than `fraction` of the budget has been used.
    #[inline]
    pub fn consumed_beyond(&self, fraction: f64) -> bool {
        self.elapsed() > self.limit.mul_f64(fraction)
    }

    /// A nested deadline starting now, never outliving `self`.
    pub fn sub(&self, limit: Duration) -> Deadline {
        Deadline::after(limit.min(self.remaining()))
    }
}
