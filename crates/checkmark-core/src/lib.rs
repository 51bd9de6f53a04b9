//! Core primitives for Checkmark.
//!
//! This crate provides the pieces the selection layer is built on:
//!
//! - **Signals**: Type-safe observer lists with direct, re-entrant emission
//! - **Errors**: [`SelectionError`] and the crate [`Result`] alias
//! - **Logging**: `tracing` target names for filtering selection events
//!
//! # Signal Example
//!
//! ```
//! use checkmark_core::Signal;
//!
//! let refreshed = Signal::<()>::new();
//!
//! let conn_id = refreshed.connect(|_| {
//!     println!("list refreshed");
//! });
//!
//! refreshed.emit(());
//! refreshed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SelectionError};
pub use signal::{ConnectionId, Signal};
