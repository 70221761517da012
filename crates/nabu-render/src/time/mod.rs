//! Time subsystem.
//!
//! Provides the single clock capability the session needs: a monotonic-ish
//! millisecond reading. The clock is injected into the session so frame
//! timing stays platform-independent and testable.

mod clock;

pub use clock::{Clock, MonotonicClock};
