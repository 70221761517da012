/// Statistics for one completed frame, produced by `RenderSession::end`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameStats {
    /// Wall-clock time between `begin` and `end`, in milliseconds.
    ///
    /// Zero when the frame was never opened or the clock read backward.
    pub gpu_time_ms: f64,

    /// Total draw commands recorded in the frame.
    pub command_count: u32,

    /// Rectangle commands recorded in the frame.
    pub rect_count: u32,

    /// Text commands recorded in the frame.
    pub text_count: u32,
}
