use std::sync::Arc;

use recycle_list::{
    ItemRecord, ListError, ListOptions, OnItemClickedCallback, PooledItemView,
    RecyclingListController, ViewportHost,
};

use crate::{FrameScheduler, ListenerId, MemoryViewport, ScrollSignal, TextRowFactory};

/// The controller type driven by [`ListHost`].
pub type ListController = RecyclingListController<MemoryViewport, TextRowFactory>;

const ROW_WIDTH: f32 = 300.0;

/// Application-level configuration of the demo host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemoOptions {
    /// Size of the sample dataset.
    pub data_count: usize,
    pub display_count: usize,
    pub padding: f32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            data_count: 100,
            display_count: 8,
            padding: 10.0,
        }
    }
}

/// `count` records numbered from 1: `Button[n]` / `Description[n]`.
pub fn sample_records(count: usize) -> Vec<ItemRecord> {
    (1..=count)
        .map(|n| {
            ItemRecord::new(
                i32::try_from(n).unwrap_or(i32::MAX),
                format!("Button[{n}]"),
                format!("Description[{n}]"),
            )
        })
        .collect()
}

enum HostState {
    /// Waiting for the first layout pass.
    Pending(MemoryViewport),
    Ready(ListController),
}

/// Owns a recycled list, its viewport and its data source.
///
/// The list is built one frame late (see [`ListHost::start`]) because the viewport height is
/// only known after layout. The host subscribes a single scroll listener at construction and
/// dispatches every offset change through it; replacing data never touches the subscription.
pub struct ListHost {
    options: DemoOptions,
    state: HostState,
    scroll: ScrollSignal<ListController>,
    subscription: Option<ListenerId>,
    on_item_clicked: Option<OnItemClickedCallback>,
}

impl ListHost {
    pub fn new(viewport: MemoryViewport, options: DemoOptions) -> Self {
        let mut scroll = ScrollSignal::new();
        let subscription = scroll.subscribe(|c: &mut ListController, _offset| c.on_scroll());
        Self {
            options,
            state: HostState::Pending(viewport),
            scroll,
            subscription: Some(subscription),
            on_item_clicked: None,
        }
    }

    pub fn with_on_item_clicked(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_item_clicked = Some(Arc::new(f));
        self
    }

    /// Defers building the list to the end of the current frame.
    ///
    /// A failed build (e.g. a viewport too small for the configured rows) is logged and leaves
    /// the host rendering nothing.
    pub fn start(frames: &mut FrameScheduler<Self>) {
        frames.defer(|host: &mut Self| {
            if let Err(err) = host.init() {
                let _ = err;
                awarn!(error = %err, "failed to build the list");
            }
        });
    }

    /// Builds the list with `data_count` sample records. Does nothing once built.
    pub fn init(&mut self) -> Result<(), ListError> {
        let HostState::Pending(viewport) = &self.state else {
            return Ok(());
        };
        let mut options = ListOptions::new(self.options.display_count, self.options.padding);
        options.on_item_clicked = self.on_item_clicked.clone();
        let controller = RecyclingListController::build(
            *viewport,
            TextRowFactory::new(ROW_WIDTH),
            sample_records(self.options.data_count),
            options,
        )?;
        adebug!(data_count = self.options.data_count, "ListHost::init");
        self.state = HostState::Ready(controller);
        Ok(())
    }

    pub fn options(&self) -> &DemoOptions {
        &self.options
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, HostState::Ready(_))
    }

    pub fn controller(&self) -> Option<&ListController> {
        match &self.state {
            HostState::Pending(_) => None,
            HostState::Ready(c) => Some(c),
        }
    }

    pub fn viewport(&self) -> &MemoryViewport {
        match &self.state {
            HostState::Pending(viewport) => viewport,
            HostState::Ready(c) => c.viewport(),
        }
    }

    /// Number of scroll listeners currently subscribed.
    pub fn scroll_listeners(&self) -> usize {
        self.scroll.len()
    }

    /// Applies a layout pass: the viewport now has `height`.
    pub fn layout(&mut self, height: f32) -> Result<(), ListError> {
        match &mut self.state {
            HostState::Pending(viewport) => {
                viewport.set_height(height);
                Ok(())
            }
            HostState::Ready(c) => {
                c.viewport_mut().set_height(height);
                c.relayout()
            }
        }
    }

    /// Moves the viewport (clamped) and notifies scroll listeners if the offset changed.
    pub fn scroll_to(&mut self, offset: f32) {
        match &mut self.state {
            HostState::Pending(viewport) => viewport.set_scroll_offset_y(offset),
            HostState::Ready(c) => {
                let before = c.viewport().scroll_offset_y();
                c.viewport_mut().set_scroll_offset_y(offset);
                let after = c.viewport().scroll_offset_y();
                if after != before {
                    self.scroll.emit(c, after);
                }
            }
        }
    }

    pub fn scroll_by(&mut self, delta: f32) {
        let offset = self.viewport().scroll_offset_y() + delta;
        self.scroll_to(offset);
    }

    /// Replaces the dataset. Does nothing before the list is built.
    pub fn set_data(&mut self, records: Vec<ItemRecord>) -> Result<(), ListError> {
        match &mut self.state {
            HostState::Pending(_) => Ok(()),
            HostState::Ready(c) => c.set_data(records),
        }
    }

    /// Shows the first half of the sample dataset.
    pub fn show_half(&mut self) -> Result<(), ListError> {
        self.set_data(sample_records(self.options.data_count / 2))
    }

    /// Shows the full sample dataset.
    pub fn show_full(&mut self) -> Result<(), ListError> {
        self.set_data(sample_records(self.options.data_count))
    }

    /// Clicks the row in pool slot `slot`. Returns `false` for blank or missing rows.
    pub fn click_slot(&self, slot: usize) -> bool {
        self.controller()
            .and_then(|c| c.pool().get(slot))
            .is_some_and(|row| row.click())
    }

    /// Renders the rows intersecting the viewport, top to bottom.
    pub fn render(&self) -> Vec<String> {
        let Some(c) = self.controller() else {
            return Vec::new();
        };
        let viewport = c.viewport();
        let top = viewport.scroll_offset_y();
        let bottom = top + viewport.height();

        let mut rows: Vec<_> = c
            .pool()
            .iter()
            .filter(|row| row.is_visible())
            .filter(|row| row.top() < bottom && row.top() + row.size().height > top)
            .collect();
        rows.sort_by(|a, b| a.top().total_cmp(&b.top()));
        rows.into_iter().map(|row| row.render()).collect()
    }

    /// Removes the scroll subscription. Later offset changes move the viewport only.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.scroll.unsubscribe(id);
            adebug!("ListHost::shutdown");
        }
    }
}

impl core::fmt::Debug for ListHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListHost")
            .field("options", &self.options)
            .field("ready", &self.is_ready())
            .field("viewport", self.viewport())
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
