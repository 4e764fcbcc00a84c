//! A headless recycled ("pooled") list view.
//!
//! For host-side utilities (an in-memory viewport, text rows, frame deferral, a demo host), see
//! the `recycle-list-adapter` crate.
//!
//! Instead of creating one visual row per data record, the controller owns a fixed pool of
//! `display_count + 1` rows and rebinds them as the viewport scrolls:
//! - uniform row height derived from the viewport height, slot count and padding
//! - total content extent for the host's scrollbar
//! - scroll offset → first bound record ("window start")
//! - repositioning and relabeling of pooled rows, with out-of-range slots blanked
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`ViewportHost`] (viewport height, content extent, vertical scroll offset)
//! - an [`ItemViewFactory`] producing [`PooledItemView`] rows
//! - a call to [`RecyclingListController::on_scroll`] whenever the scroll offset changes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod builder;
mod controller;
mod error;
mod geometry;
mod options;
mod state;
mod types;
mod view;

#[cfg(feature = "json")]
pub mod interchange;


pub use builder::ListBuilder;
pub use controller::RecyclingListController;
pub use error::{ConfigError, ListError};
pub use geometry::{content_height, item_height, slot_top, window_start};
pub use options::{ListOptions, OnItemClickedCallback};
pub use state::ViewportState;
pub use types::{ItemRecord, Point, Size};
pub use view::{ClickHandler, ItemViewFactory, PooledItemView, ViewportHost};
