use raw_window_handle::{HandleError, HasWindowHandle, RawWindowHandle};

use crate::coords::Rect;
use crate::paint::Color;
use crate::time::{Clock, MonotonicClock};

use super::{ColorSpace, FrameStats, FrameTally, SessionDesc};

/// Smallest accepted backing-store dimension in device pixels.
pub const MIN_PIXEL_DIM: u32 = 1;

/// Largest accepted backing-store dimension in device pixels.
pub const MAX_PIXEL_DIM: u32 = 8192;

#[inline]
fn clamp_pixel_dim(value: u32) -> u32 {
    value.clamp(MIN_PIXEL_DIM, MAX_PIXEL_DIM)
}

#[inline]
fn normalize_dpi(scale: f32) -> f32 {
    if scale > 0.0 { scale } else { 1.0 }
}

/// Frame bookkeeping for one drawing surface.
///
/// The session owns its own record and nothing else. `S` is the caller's
/// surface handle type — a `RawWindowHandle`, an index into an external
/// surface registry, whatever the rasterizing backend expects. The session
/// stores it for forwarding and never inspects or releases it; non-ownership
/// is expressed by the type parameter rather than a raw pointer.
///
/// Invariants:
/// - `pixel_width`/`pixel_height` always lie in `[1, 8192]`
/// - `dpi_scale` is always positive
/// - the color-space name is non-empty and at most 63 bytes
///
/// Lifecycle is `new` → (`resize`)* → [`begin` → draw* → `end`]* → drop.
/// The state machine is deliberately forgiving: `begin` and `end` succeed
/// from either state, and draw calls outside an open frame still count.
/// Callers relying on stricter sequencing must enforce it themselves.
///
/// One logical thread of control per session; `&mut self` on every mutating
/// operation makes that the compiler's problem rather than a convention.
/// Distinct sessions share no state.
#[derive(Debug)]
pub struct RenderSession<S, C: Clock = MonotonicClock> {
    surface: S,
    pixel_width: u32,
    pixel_height: u32,
    logical_width: f32,
    logical_height: f32,
    dpi_scale: f32,
    color_space: ColorSpace,
    /// `None` while no frame is open.
    frame_start_ms: Option<u64>,
    /// Completed-frame counter. Wraps at `u64::MAX`; not handled specially.
    frame_serial: u64,
    tally: FrameTally,
    clock: C,
}

impl<S> RenderSession<S> {
    /// Creates a session for `surface` with the default monotonic clock.
    ///
    /// Logical dimensions start equal to the clamped pixel dimensions (1:1
    /// until the first `begin` overrides them).
    pub fn new(surface: S, desc: SessionDesc) -> Self {
        Self::with_clock(surface, desc, MonotonicClock::new())
    }
}

impl RenderSession<RawWindowHandle> {
    /// Creates a session bound to a window's raw handle.
    ///
    /// The handle is stored for forwarding only; the window remains owned by
    /// the caller. The only failure mode is the window declining to provide
    /// a handle.
    pub fn for_window(
        window: &impl HasWindowHandle,
        desc: SessionDesc,
    ) -> Result<Self, HandleError> {
        Ok(Self::new(window.window_handle()?.as_raw(), desc))
    }
}

impl<S, C: Clock> RenderSession<S, C> {
    /// Creates a session with an injected clock.
    pub fn with_clock(surface: S, desc: SessionDesc, clock: C) -> Self {
        let pixel_width = clamp_pixel_dim(desc.pixel_width);
        let pixel_height = clamp_pixel_dim(desc.pixel_height);
        let session = Self {
            surface,
            pixel_width,
            pixel_height,
            logical_width: pixel_width as f32,
            logical_height: pixel_height as f32,
            dpi_scale: normalize_dpi(desc.dpi_scale),
            color_space: ColorSpace::new(&desc.color_space),
            frame_start_ms: None,
            frame_serial: 0,
            tally: FrameTally::default(),
            clock,
        };
        log::debug!(
            "render session created: {}x{} px, dpi {}, color space {}",
            session.pixel_width,
            session.pixel_height,
            session.dpi_scale,
            session.color_space,
        );
        session
    }

    /// Updates the backing-store size, clamping to `[1, 8192]`.
    ///
    /// Logical dimensions, dpi, and color space are frame-scoped and stay
    /// untouched; so does the tally if a frame is currently open.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixel_width = clamp_pixel_dim(width);
        self.pixel_height = clamp_pixel_dim(height);
        log::debug!("render session resized: {}x{} px", self.pixel_width, self.pixel_height);
    }

    /// Opens a frame.
    ///
    /// Logical dimensions pass through unclamped — degenerate zero/negative
    /// values included — while dpi and color space are re-normalized with the
    /// creation rules. The tally is cleared and timing restarts.
    ///
    /// Calling `begin` with a frame already open discards that frame's tally
    /// and timing without diagnostics.
    pub fn begin(
        &mut self,
        logical_width: f32,
        logical_height: f32,
        dpi_scale: f32,
        color_space: &str,
    ) {
        self.logical_width = logical_width;
        self.logical_height = logical_height;
        self.dpi_scale = normalize_dpi(dpi_scale);
        self.color_space = ColorSpace::new(color_space);
        self.tally.clear();
        self.frame_start_ms = Some(self.clock.now_ms());
    }

    /// Records one rectangle command.
    ///
    /// Geometry, color, and opacity are inputs to the external rasterizer;
    /// they are neither validated nor stored here. Legal with no frame open —
    /// the count carries into the next `end`.
    pub fn draw_rect(&mut self, rect: Rect, color: Color, opacity: f32) {
        self.tally.record_rect();
        log::trace!(
            "cmd #{}: rect {:?} color {:?} opacity {}",
            self.tally.command_count,
            rect,
            color,
            opacity,
        );
    }

    /// Records one text command. Same contract as [`draw_rect`]; empty text
    /// is accepted.
    ///
    /// [`draw_rect`]: Self::draw_rect
    pub fn draw_text(
        &mut self,
        bounds: Rect,
        color: Color,
        font_size: f32,
        opacity: f32,
        text: &str,
    ) {
        self.tally.record_text();
        log::trace!(
            "cmd #{}: text {:?} ({} bytes) in {:?} size {} color {:?} opacity {}",
            self.tally.command_count,
            text,
            text.len(),
            bounds,
            font_size,
            color,
            opacity,
        );
    }

    /// Closes the frame and reports its statistics.
    ///
    /// Elapsed time is `now − frame_start`, clamped to zero if the clock read
    /// backward, and zero outright when no frame was open. The frame serial
    /// advances exactly once per call — `end` without a matching `begin` is
    /// permitted and still counts as a completed frame, reporting whatever
    /// the tally currently holds.
    pub fn end(&mut self) -> FrameStats {
        let gpu_time_ms = match self.frame_start_ms.take() {
            Some(start) => self.clock.now_ms().saturating_sub(start) as f64,
            None => 0.0,
        };
        self.frame_serial = self.frame_serial.wrapping_add(1);

        let stats = FrameStats {
            gpu_time_ms,
            command_count: self.tally.command_count,
            rect_count: self.tally.rect_count,
            text_count: self.tally.text_count,
        };
        self.tally.clear();

        log::trace!(
            "frame #{} ended: {} cmds ({} rect, {} text) in {:.1} ms",
            self.frame_serial,
            stats.command_count,
            stats.rect_count,
            stats.text_count,
            stats.gpu_time_ms,
        );
        stats
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[inline]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Logical dimensions as last set by `begin` (or creation, before the
    /// first frame).
    #[inline]
    pub fn logical_size(&self) -> (f32, f32) {
        (self.logical_width, self.logical_height)
    }

    #[inline]
    pub fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }

    #[inline]
    pub fn color_space(&self) -> &ColorSpace {
        &self.color_space
    }

    /// Count of completed frames.
    #[inline]
    pub fn frame_serial(&self) -> u64 {
        self.frame_serial
    }

    #[inline]
    pub fn is_frame_open(&self) -> bool {
        self.frame_start_ms.is_some()
    }
}
