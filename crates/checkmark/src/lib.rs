//! Checkmark - multi-item selection tracking for list-backed views.
//!
//! This is the umbrella crate. It re-exports the core primitives and adds the
//! [`model`] module, which holds the owning list and the selection tracker.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use checkmark::model::{ItemList, ItemSource, SelectableAdapter, SelectionTracker};
//!
//! struct Names {
//!     list: ItemList<String>,
//! }
//!
//! impl ItemSource for Names {
//!     type Item = String;
//!
//!     fn item_at(&self, position: usize) -> Option<String> {
//!         self.list.item_at(position)
//!     }
//!
//!     fn position_of(&self, item: &String) -> Option<usize> {
//!         self.list.position_of(item)
//!     }
//!
//!     fn item_count(&self) -> usize {
//!         self.list.item_count()
//!     }
//!
//!     fn notify_data_set_changed(&self) {
//!         self.list.notify_data_set_changed();
//!     }
//! }
//!
//! impl SelectableAdapter for Names {
//!     type Key = String;
//!
//!     fn key_of(&self, item: &String) -> String {
//!         item.clone()
//!     }
//!
//!     fn on_select_model_changed(&self, _tracker: &SelectionTracker<Self>, enabled: bool) {
//!         println!("select mode: {enabled}");
//!     }
//! }
//!
//! let names = Names {
//!     list: ItemList::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
//! };
//! let tracker = SelectionTracker::new(Arc::new(names));
//!
//! tracker.set_select_model(true);
//! assert!(tracker.set_checked(1, true));
//! assert!(tracker.set_checked(0, true));
//! assert_eq!(tracker.checked(), Some(vec!["a".to_string(), "b".to_string()]));
//! ```

pub use checkmark_core::*;

pub mod model;
pub mod prelude;
