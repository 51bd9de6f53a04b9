//! Prelude module for Checkmark.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use checkmark::prelude::*;
//! ```

// ============================================================================
// Signals and Errors
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};
pub use crate::{Result, SelectionError};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    CheckOutcome, ItemList, ItemSource, SelectChangedListener, SelectInterceptor,
    SelectableAdapter, SelectionTracker, SelectionTrackerBuilder,
};
