use alloc::sync::Arc;

use crate::ConfigError;

/// A callback receiving the logical data index of a clicked row.
pub type OnItemClickedCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::RecyclingListController`].
///
/// Cheap to clone: the click callback is stored in an `Arc`, so adapters can tweak a field and
/// call `set_options` without reallocating closures.
pub struct ListOptions {
    /// Number of fully visible rows. The pool holds one extra slot for the partially visible
    /// row at the viewport edge.
    pub display_count: usize,
    /// Gap between consecutive rows.
    pub padding: f32,
    /// Click notification. When `None`, clicks are only logged.
    pub on_item_clicked: Option<OnItemClickedCallback>,
}

impl ListOptions {
    pub fn new(display_count: usize, padding: f32) -> Self {
        Self {
            display_count,
            padding,
            on_item_clicked: None,
        }
    }

    pub fn with_display_count(mut self, display_count: usize) -> Self {
        self.display_count = display_count;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_on_item_clicked(
        mut self,
        on_item_clicked: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_item_clicked = on_item_clicked.map(|f| Arc::new(f) as _);
        self
    }

    /// Pool capacity for this configuration.
    pub fn pool_len(&self) -> usize {
        self.display_count.saturating_add(1)
    }

    /// Checks everything that does not depend on the viewport height.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_count == 0 {
            return Err(ConfigError::ZeroDisplayCount);
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::InvalidPadding(self.padding));
        }
        Ok(())
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new(8, 10.0)
    }
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            display_count: self.display_count,
            padding: self.padding,
            on_item_clicked: self.on_item_clicked.clone(),
        }
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("display_count", &self.display_count)
            .field("padding", &self.padding)
            .field("on_item_clicked", &self.on_item_clicked.is_some())
            .finish()
    }
}
