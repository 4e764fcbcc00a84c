use alloc::vec::Vec;

use crate::{ItemRecord, ItemViewFactory, ListError, ListOptions, RecyclingListController};

/// Assembles a [`RecyclingListController`] from collaborators that may arrive separately
/// (e.g. a viewport that only exists after the host's first layout pass).
///
/// `build` fails with [`ListError::MissingDependency`] when the viewport or the row factory
/// was never supplied.
pub struct ListBuilder<V, F> {
    viewport: Option<V>,
    factory: Option<F>,
    records: Vec<ItemRecord>,
    options: ListOptions,
}

impl<V, F> ListBuilder<V, F> {
    pub fn new(options: ListOptions) -> Self {
        Self {
            viewport: None,
            factory: None,
            records: Vec::new(),
            options,
        }
    }

    pub fn viewport(mut self, viewport: V) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn records(mut self, records: impl Into<Vec<ItemRecord>>) -> Self {
        self.records = records.into();
        self
    }

    pub fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }
}

impl<V: crate::ViewportHost, F: ItemViewFactory> ListBuilder<V, F> {
    pub fn build(self) -> Result<RecyclingListController<V, F>, ListError> {
        let viewport = self.viewport.ok_or(ListError::MissingDependency("viewport"))?;
        let factory = self.factory.ok_or(ListError::MissingDependency("item view factory"))?;
        RecyclingListController::build(viewport, factory, self.records, self.options)
    }
}

impl<V, F> Default for ListBuilder<V, F> {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl<V, F> core::fmt::Debug for ListBuilder<V, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListBuilder")
            .field("viewport", &self.viewport.is_some())
            .field("factory", &self.factory.is_some())
            .field("records", &self.records.len())
            .field("options", &self.options)
            .finish()
    }
}
