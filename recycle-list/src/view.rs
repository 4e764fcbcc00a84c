use alloc::boxed::Box;

use crate::{Point, Size};

/// A click callback installed on a pooled row. It already knows which record it reports.
pub type ClickHandler = Box<dyn Fn() + Send + Sync>;

/// A single reusable visual row.
///
/// Rows own no data. The controller binds and rebinds them; nothing else should mutate a
/// pooled row while the controller owns it.
pub trait PooledItemView {
    fn set_ordinal(&mut self, text: &str);
    fn set_name(&mut self, text: &str);
    fn set_description(&mut self, text: &str);

    fn position(&self) -> Point;
    /// Moves the row, in the host's anchored coordinates (`y` grows upward).
    fn set_position(&mut self, x: f32, y: f32);

    fn size(&self) -> Size;
    fn set_size(&mut self, width: f32, height: f32);

    /// Shows or hides the row. Slots past the end of the dataset are hidden.
    fn set_visible(&mut self, visible: bool);

    /// Replaces the active click callback. Previously installed callbacks must never fire again.
    fn register_click_handler(&mut self, handler: ClickHandler);

    fn clear_click_handler(&mut self);
}

/// Produces pooled rows bound into the host's content surface.
///
/// Any `FnMut(usize) -> V` closure works as a factory; the argument is the slot index.
pub trait ItemViewFactory {
    type View: PooledItemView;

    fn create(&mut self, slot: usize) -> Self::View;
}

impl<V: PooledItemView, F: FnMut(usize) -> V> ItemViewFactory for F {
    type View = V;

    fn create(&mut self, slot: usize) -> V {
        self(slot)
    }
}

/// The scroll container the list lives in.
///
/// The host keeps the scroll offset; the controller reads it on every
/// [`crate::RecyclingListController::on_scroll`] and only writes it to reset to the top.
pub trait ViewportHost {
    /// Visible height of the viewport. Unknown until the host finished its first layout pass.
    fn viewport_height(&self) -> f32;

    /// Height of the scrollable content surface.
    fn content_extent(&self) -> f32;
    fn set_content_extent(&mut self, height: f32);

    /// Distance the content is scrolled down from the top (`0` = top).
    fn scroll_offset_y(&self) -> f32;
    fn set_scroll_offset_y(&mut self, offset: f32);
}
