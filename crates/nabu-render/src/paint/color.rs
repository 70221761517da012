/// Straight-alpha RGBA color.
///
/// The session never blends or interprets color; it is forwarded to the
/// external rasterizer as supplied. Components are not clamped here for the
/// same reason geometry is not validated: this layer only does bookkeeping.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from `u8` components (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Creates a color from a packed `0xRRGGBBAA` word.
    ///
    /// This is the layout used by callers that carry colors as a single
    /// integer through their own command stream.
    #[inline]
    pub fn from_packed(rgba: u32) -> Self {
        Self::from_rgba8(
            (rgba >> 24) as u8,
            (rgba >> 16) as u8,
            (rgba >> 8) as u8,
            rgba as u8,
        )
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_full_range() {
        let c = Color::from_rgba8(255, 0, 255, 255);
        assert_eq!(c, Color::new(1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn from_packed_channel_order() {
        let c = Color::from_packed(0xFF00_0080);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }
}
