/// Per-frame draw-command counters.
///
/// Valid only between `begin` and `end`; cleared at both. Counters saturate
/// rather than wrap so a runaway caller cannot produce a nonsense report.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameTally {
    pub command_count: u32,
    pub rect_count: u32,
    pub text_count: u32,
}

impl FrameTally {
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn record_rect(&mut self) {
        self.command_count = self.command_count.saturating_add(1);
        self.rect_count = self.rect_count.saturating_add(1);
    }

    #[inline]
    pub fn record_text(&mut self) {
        self.command_count = self.command_count.saturating_add(1);
        self.text_count = self.text_count.saturating_add(1);
    }
}
