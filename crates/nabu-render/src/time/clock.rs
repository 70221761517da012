use std::time::Instant;

/// Millisecond clock capability.
///
/// Implementations should be monotonically non-decreasing in practice; the
/// epoch is arbitrary and per-clock. The session tolerates occasional
/// backward readings by clamping elapsed time to zero, so a wall clock is an
/// acceptable implementation on hosts without a monotonic source.
pub trait Clock {
    /// Current time in milliseconds since the clock's epoch.
    fn now_ms(&self) -> u64;
}

/// Default clock over [`Instant`].
///
/// The epoch is the moment the clock was created. Each session owns its own
/// clock instance; there is no process-wide epoch state.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    #[inline]
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_never_regresses() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn fresh_clock_starts_near_zero() {
        // Epoch is creation time, so the first reading is small.
        let clock = MonotonicClock::new();
        assert!(clock.now_ms() < 1_000);
    }
}
