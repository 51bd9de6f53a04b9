//! List model and selection tracking for Checkmark.
//!
//! This module separates the list that owns the items from the bookkeeping
//! that remembers which of them are checked:
//!
//! - `ItemSource`: The owning list capability (item at position, position of
//!   item, item count, full-refresh notification)
//! - `SelectableAdapter`: Key extraction and the per-adapter selection hooks
//! - `ItemList`: A ready-made owning list with change signals
//! - `SelectionTracker`: The selection map, select mode, listener and
//!   interceptor, with re-entrancy guards around notification
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  item_at / position_of  ┌──────────────────┐
//! │  ItemList   │<────────────────────────│ SelectionTracker │
//! │ (ItemSource)│                         │   key -> item    │
//! └─────────────┘                         └──────────────────┘
//!       │ data_set_changed                   │ hooks  │ listener
//!       v                                    v        v
//!   ┌────────┐                       ┌──────────────┐ ┌──────────┐
//!   │  View  │                       │   Adapter    │ │ Observer │
//!   └────────┘                       └──────────────┘ └──────────┘
//! ```

mod item_list;
pub mod selection;
mod traits;

pub use item_list::ItemList;
pub use selection::{
    CheckOutcome, SelectChangedListener, SelectInterceptor, SelectionTracker,
    SelectionTrackerBuilder,
};
pub use traits::{ItemSource, SelectableAdapter};
