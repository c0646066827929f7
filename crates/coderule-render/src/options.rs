//! Options controlling preview rendering.

/// Options for [`Renderer::render`](crate::Renderer::render) and the sequence
/// previews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Render user-input segments as their current value padded with `_`
    /// instead of a row of `X`.
    pub editable_text: bool,

    /// Added to the effective counter value of auto-increment segments, to
    /// preview the Nth upcoming code without touching any real counter.
    pub auto_increment_offset: i64,
}

impl PreviewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_editable_text(mut self, enable: bool) -> Self {
        self.editable_text = enable;
        self
    }

    #[must_use]
    pub fn with_auto_increment_offset(mut self, offset: i64) -> Self {
        self.auto_increment_offset = offset;
        self
    }
}
