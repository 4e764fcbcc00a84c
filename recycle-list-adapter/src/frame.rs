type Deferred<C> = Box<dyn FnOnce(&mut C)>;

/// One-shot callbacks that run when the current frame ends.
///
/// Hosts use this to wait for the first layout pass before querying viewport geometry: defer
/// the build, let layout run, then call [`FrameScheduler::end_frame`]. Every callback runs at
/// most once.
pub struct FrameScheduler<C> {
    frame: u64,
    pending: Vec<Deferred<C>>,
}

impl<C> FrameScheduler<C> {
    pub fn new() -> Self {
        Self {
            frame: 0,
            pending: Vec::new(),
        }
    }

    /// Number of frames ended so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn defer(&mut self, f: impl FnOnce(&mut C) + 'static) {
        self.pending.push(Box::new(f));
    }

    /// Ends the frame and runs every deferred callback against `ctx`.
    ///
    /// Returns how many callbacks ran.
    pub fn end_frame(&mut self, ctx: &mut C) -> usize {
        self.frame += 1;
        let pending = core::mem::take(&mut self.pending);
        let n = pending.len();
        if n > 0 {
            adebug!(frame = self.frame, callbacks = n, "end_frame");
        }
        for f in pending {
            f(&mut *ctx);
        }
        n
    }
}

impl<C> Default for FrameScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> core::fmt::Debug for FrameScheduler<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("frame", &self.frame)
            .field("pending", &self.pending.len())
            .finish()
    }
}
