//! Render session (frame bookkeeping).
//!
//! Responsibilities:
//! - hold per-surface configuration (pixel size, logical size, dpi, color space)
//! - delimit frames and tally draw commands issued within them
//! - report elapsed time and command counts when a frame ends
//!
//! The contract is deliberately permissive: out-of-range numeric inputs are
//! corrected rather than rejected, draw calls outside an open frame still
//! count, and overlapping begins silently discard the unclosed frame.

mod color_space;
mod desc;
mod render_session;
mod stats;
mod tally;

pub use color_space::ColorSpace;
pub use desc::SessionDesc;
pub use render_session::{RenderSession, MAX_PIXEL_DIM, MIN_PIXEL_DIM};
pub use stats::FrameStats;
pub use tally::FrameTally;
