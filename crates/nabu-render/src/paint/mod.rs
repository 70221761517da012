//! Paint value types.

mod color;

pub use color::Color;
