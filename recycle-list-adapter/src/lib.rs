//! Host utilities for the `recycle-list` crate.
//!
//! The `recycle-list` crate is UI-agnostic and focuses on the recycling math and pool state.
//! This crate provides small, framework-neutral pieces a host typically needs around it:
//!
//! - An in-memory scroll container ([`MemoryViewport`]) and text rows ([`TextRow`])
//! - One-shot end-of-frame deferral, for building once the first layout pass is done
//! - A scroll-change signal with explicit subscriptions
//! - A demo host that owns the data source and swaps datasets
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
//!
//! Unlike the core crate, the adapter is std-only: it always enables `recycle-list/std` and has
//! no `std` feature of its own. Use `recycle-list` directly for `no_std` + `alloc` targets.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod frame;
mod host;
mod row;
mod signal;
mod viewport;

#[cfg(test)]
mod tests;

pub use frame::FrameScheduler;
pub use host::{DemoOptions, ListController, ListHost, sample_records};
pub use row::{TextRow, TextRowFactory};
pub use signal::{ListenerId, ScrollSignal};
pub use viewport::MemoryViewport;
