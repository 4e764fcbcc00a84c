use recycle_list::ViewportHost;

/// An in-memory scroll container.
///
/// The scroll offset is clamped to `[0, content_extent - height]` on every write, the way a
/// clamped UI scroll view behaves. Shrinking the content re-clamps the offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryViewport {
    height: f32,
    content_extent: f32,
    scroll_offset_y: f32,
}

impl MemoryViewport {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Applies a layout pass result. The scroll offset is re-clamped.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.scroll_offset_y = self.clamp_scroll_offset(self.scroll_offset_y);
    }

    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_extent - self.height).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Scroll position in `[0, 1]`, where `0` is the top.
    pub fn normalized_position(&self) -> f32 {
        let max = self.max_scroll_offset();
        if max > 0.0 {
            self.scroll_offset_y / max
        } else {
            0.0
        }
    }
}

impl ViewportHost for MemoryViewport {
    fn viewport_height(&self) -> f32 {
        self.height
    }

    fn content_extent(&self) -> f32 {
        self.content_extent
    }

    fn set_content_extent(&mut self, height: f32) {
        self.content_extent = height.max(0.0);
        self.scroll_offset_y = self.clamp_scroll_offset(self.scroll_offset_y);
    }

    fn scroll_offset_y(&self) -> f32 {
        self.scroll_offset_y
    }

    fn set_scroll_offset_y(&mut self, offset: f32) {
        self.scroll_offset_y = self.clamp_scroll_offset(offset);
    }
}
