//! Nabu render crate.
//!
//! Frame bookkeeping for an externally rasterized surface: per-surface
//! configuration, frame delimiting, draw-command tallies, and end-of-frame
//! statistics. Rasterization itself lives behind the surface handle and is
//! not this crate's concern.

pub mod coords;
pub mod paint;
pub mod time;

pub mod logging;
pub mod session;

pub use session::{ColorSpace, FrameStats, RenderSession, SessionDesc};
