use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::geometry;
use crate::{
    ItemRecord, ItemViewFactory, ListError, ListOptions, OnItemClickedCallback, Point,
    PooledItemView, Size, ViewportHost, ViewportState,
};

/// A recycled vertical list.
///
/// The controller owns the dataset and a fixed pool of `display_count + 1` rows. Rows are
/// created lazily on the first successful bind and then only ever rebound:
/// - [`Self::set_data`] replaces the dataset and lays the pool out again
/// - [`Self::on_scroll`] maps the host's scroll offset to a window start and relabels rows
///
/// The controller never subscribes to anything. Hosts call `on_scroll` once per scroll-offset
/// change; `set_data` finishes binding the new window before it returns, so a scroll callback
/// can never observe half-replaced data.
pub struct RecyclingListController<V, F: ItemViewFactory> {
    viewport: V,
    factory: F,
    options: ListOptions,
    records: Vec<ItemRecord>,

    pool: Vec<F::View>,
    bindings: Vec<Option<usize>>, // slot -> record index
    state: ViewportState,
    layout_valid: bool,

    on_item_clicked: OnItemClickedCallback,
}

impl<V: ViewportHost, F: ItemViewFactory> RecyclingListController<V, F> {
    /// Creates a controller bound to `viewport` and immediately binds `records`.
    ///
    /// Fails when `options` are invalid or the viewport is too small for them. See
    /// [`crate::ListBuilder`] for a builder that also reports missing collaborators.
    pub fn build(
        viewport: V,
        factory: F,
        records: impl Into<Vec<ItemRecord>>,
        options: ListOptions,
    ) -> Result<Self, ListError> {
        options.validate()?;
        ldebug!(
            display_count = options.display_count,
            padding = options.padding,
            "RecyclingListController::build"
        );
        let on_item_clicked = click_callback(&options);
        let mut c = Self {
            viewport,
            factory,
            options,
            records: Vec::new(),
            pool: Vec::new(),
            bindings: Vec::new(),
            state: ViewportState::default(),
            layout_valid: false,
            on_item_clicked,
        };
        c.set_data(records)?;
        Ok(c)
    }

    /// Replaces the dataset wholesale and rebinds the pool.
    ///
    /// When the new content is shorter than the current extent and the view sat near the old
    /// end, the scroll offset is reset to the top so the viewport never shows blank space.
    /// Growing datasets keep the current offset.
    ///
    /// On a configuration error the list renders empty (zero extent, every slot blanked) and the
    /// error is returned.
    pub fn set_data(&mut self, records: impl Into<Vec<ItemRecord>>) -> Result<(), ListError> {
        self.records = records.into();
        ltrace!(count = self.records.len(), "set_data");
        self.rebind()
    }

    /// Recomputes geometry for the current dataset, e.g. after the host viewport was resized.
    pub fn relayout(&mut self) -> Result<(), ListError> {
        self.rebind()
    }

    /// Applies new options and rebinds the current dataset.
    ///
    /// A larger `display_count` grows the pool. A smaller one blanks the surplus slots, which
    /// stay allocated for reuse.
    pub fn set_options(&mut self, options: ListOptions) -> Result<(), ListError> {
        options.validate()?;
        self.on_item_clicked = click_callback(&options);
        self.options = options;
        self.rebind()
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) -> Result<(), ListError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Rebinds the pool against the host's current scroll offset.
    ///
    /// Call this on every scroll-offset change. The window start is recomputed from the
    /// absolute offset, so calling it twice with the same offset yields identical bindings.
    pub fn on_scroll(&mut self) {
        if !self.layout_valid {
            return;
        }
        let offset = self.viewport.scroll_offset_y();
        let item_height = self.state.item_height;
        let padding = self.options.padding;
        let window_start = geometry::window_start(
            offset,
            item_height,
            padding,
            self.records.len(),
            self.options.display_count,
        );
        self.state.window_start = window_start;
        ltrace!(offset, window_start, "on_scroll");

        for slot in 0..self.options.pool_len() {
            let top = geometry::slot_top(window_start, slot, item_height, padding);
            self.bind_slot(slot, window_start + slot, top);
        }
    }

    /// Reports a click on the row bound to record `index`.
    ///
    /// Invokes the configured click callback; without one, the click is logged.
    pub fn on_item_clicked(&self, index: usize) {
        (self.on_item_clicked)(index);
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    /// Returns a snapshot of the derived geometry.
    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn window_start(&self) -> usize {
        self.state.window_start
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the host viewport.
    ///
    /// After changing the scroll offset through this handle, call [`Self::on_scroll`]; after
    /// resizing it, call [`Self::relayout`].
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// All allocated rows, including surplus slots left over from a larger `display_count`.
    pub fn pool(&self) -> &[F::View] {
        &self.pool
    }

    /// The record index bound to `slot`, or `None` when the slot is blank or does not exist.
    pub fn slot_binding(&self, slot: usize) -> Option<usize> {
        self.bindings.get(slot).copied().flatten()
    }

    /// Iterates over `(slot, record index)` pairs for every slot showing data.
    pub fn bound_slots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bindings
            .iter()
            .enumerate()
            .filter_map(|(slot, index)| index.map(|index| (slot, index)))
    }

    fn rebind(&mut self) -> Result<(), ListError> {
        let count = self.records.len();
        let display_count = self.options.display_count;
        let padding = self.options.padding;

        let item_height =
            match geometry::item_height(self.viewport.viewport_height(), display_count, padding) {
                Ok(height) => height,
                Err(err) => {
                    lwarn!(error = %err, "invalid list configuration, rendering an empty list");
                    self.clear();
                    return Err(err.into());
                }
            };
        let content_height = geometry::content_height(count, item_height, padding);

        let reset_to_top = content_height < self.viewport.content_extent()
            && self.state.window_start.saturating_add(display_count) >= count;

        self.state.item_height = item_height;
        self.state.content_height = content_height;
        self.viewport.set_content_extent(content_height);
        if reset_to_top {
            ldebug!(
                previous_window_start = self.state.window_start,
                count,
                "dataset shrank below the bound window, resetting scroll to top"
            );
            self.viewport.set_scroll_offset_y(0.0);
        }

        self.ensure_pool();
        self.layout_valid = true;
        for slot in 0..self.options.pool_len() {
            let top = geometry::slot_top(0, slot, item_height, padding);
            self.bind_slot(slot, slot, top);
        }
        self.on_scroll();
        Ok(())
    }

    fn ensure_pool(&mut self) {
        let pool_len = self.options.pool_len();
        if self.pool.len() < pool_len {
            ldebug!(from = self.pool.len(), to = pool_len, "growing row pool");
        }
        while self.pool.len() < pool_len {
            let slot = self.pool.len();
            self.pool.push(self.factory.create(slot));
            self.bindings.push(None);
        }
        for slot in pool_len..self.pool.len() {
            blank(&mut self.pool[slot]);
            self.bindings[slot] = None;
        }
    }

    fn bind_slot(&mut self, slot: usize, index: usize, top: f32) {
        let view = &mut self.pool[slot];
        let Point { x, .. } = view.position();
        let Size { width, .. } = view.size();
        view.set_size(width, self.state.item_height);
        view.set_position(x, -top);

        let Some(record) = self.records.get(index) else {
            blank(view);
            self.bindings[slot] = None;
            return;
        };
        view.set_ordinal(&record.number.to_string());
        view.set_name(&record.name);
        view.set_description(&record.description);
        view.set_visible(true);

        let notify = Arc::clone(&self.on_item_clicked);
        view.register_click_handler(Box::new(move || notify(index)));
        self.bindings[slot] = Some(index);
    }

    fn clear(&mut self) {
        self.layout_valid = false;
        self.state = ViewportState::default();
        self.viewport.set_content_extent(0.0);
        self.viewport.set_scroll_offset_y(0.0);
        for (view, binding) in self.pool.iter_mut().zip(self.bindings.iter_mut()) {
            blank(view);
            *binding = None;
        }
    }
}

impl<V, F: ItemViewFactory> core::fmt::Debug for RecyclingListController<V, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclingListController")
            .field("options", &self.options)
            .field("records", &self.records.len())
            .field("pool", &self.pool.len())
            .field("bindings", &self.bindings)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn click_callback(options: &ListOptions) -> OnItemClickedCallback {
    match &options.on_item_clicked {
        Some(cb) => Arc::clone(cb),
        None => Arc::new(|index: usize| {
            let _ = index;
            ldebug!(index, "item clicked");
        }),
    }
}

fn blank<T: PooledItemView>(view: &mut T) {
    view.set_ordinal("");
    view.set_name("");
    view.set_description("");
    view.set_visible(false);
    view.clear_click_handler();
}
