/// Initialization parameters for a render session.
///
/// Keep this structure stable and minimal. Every field is corrected rather
/// than validated: out-of-range values are clamped or defaulted at session
/// creation, never rejected.
#[derive(Debug, Clone)]
pub struct SessionDesc {
    /// Backing-store width in device pixels. Clamped to `[1, 8192]`.
    pub pixel_width: u32,

    /// Backing-store height in device pixels. Clamped to `[1, 8192]`.
    pub pixel_height: u32,

    /// Pixel-to-logical ratio. Non-positive values normalize to `1.0`.
    pub dpi_scale: f32,

    /// Color-space name. Empty defaults to `"sRGB"`; longer names are
    /// truncated to 63 bytes.
    pub color_space: String,
}

impl Default for SessionDesc {
    fn default() -> Self {
        Self {
            pixel_width: 1,
            pixel_height: 1,
            dpi_scale: 1.0,
            color_space: String::new(),
        }
    }
}

impl SessionDesc {
    /// Convenience constructor for the common case.
    pub fn new(pixel_width: u32, pixel_height: u32, dpi_scale: f32, color_space: &str) -> Self {
        Self {
            pixel_width,
            pixel_height,
            dpi_scale,
            color_space: color_space.to_owned(),
        }
    }
}
