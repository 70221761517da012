//! Geometry value types.
//!
//! Coordinates are logical pixels with a top-left origin. The session records
//! draw commands without validating or storing geometry; these types exist so
//! the recording API is typed rather than a run of bare floats.

mod rect;

pub use rect::Rect;
