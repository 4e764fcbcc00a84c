/// A lightweight, serializable snapshot of the derived list geometry.
///
/// `item_height` and `content_height` are recomputed on every bind; `window_start` is the index
/// of the record bound to pool slot 0 and persists between calls so that the next
/// [`crate::RecyclingListController::set_data`] can tell whether the view sat near the old end.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub item_height: f32,
    pub content_height: f32,
    pub window_start: usize,
}
