/// Identifies a subscription on a [`ScrollSignal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<C> = Box<dyn FnMut(&mut C, f32)>;

/// A scroll-offset-changed event with explicit subscriptions.
///
/// Listeners receive a context (typically the list controller) and the new offset. Each
/// `subscribe` adds exactly one listener; nothing is registered implicitly, so replacing data
/// can never stack duplicate listeners.
pub struct ScrollSignal<C> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<C>)>,
}

impl<C> ScrollSignal<C> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&mut C, f32) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, ctx: &mut C, offset: f32) {
        for (_, listener) in &mut self.listeners {
            listener(&mut *ctx, offset);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<C> Default for ScrollSignal<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> core::fmt::Debug for ScrollSignal<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
