//! Capability traits the selection tracker is written against.
//!
//! A concrete adapter implements [`ItemSource`] for access to the list it
//! displays and [`SelectableAdapter`] for the selection-specific parts. The
//! tracker holds an `Arc` to the adapter and calls back through these traits.

use std::hash::Hash;

use super::selection::SelectionTracker;

/// Read access to the ordered list that owns the items.
///
/// The tracker never mutates the list. It only reads items, searches for
/// them, and asks the list to refresh its views after bulk operations.
pub trait ItemSource {
    /// The item type stored in the list.
    type Item: Clone + PartialEq;

    /// Returns the item at `position`.
    ///
    /// Return `None` when the position is out of range or the slot holds no
    /// value. The tracker treats both the same way.
    fn item_at(&self, position: usize) -> Option<Self::Item>;

    /// Returns the first position whose item equals `item`.
    fn position_of(&self, item: &Self::Item) -> Option<usize>;

    /// Returns the number of positions in the list, including empty ones.
    fn item_count(&self) -> usize;

    /// Tells the views that every row may have changed.
    fn notify_data_set_changed(&self);
}

/// The selection half of a list adapter.
///
/// # Implementation Requirements
///
/// - [`key_of`](SelectableAdapter::key_of) must be deterministic: the same
///   item yields the same key for as long as it stays in the list.
/// - [`on_select_model_changed`](SelectableAdapter::on_select_model_changed)
///   has no default and must be provided.
///
/// Both hooks receive the tracker so they can query it or change it again.
/// Such nested changes are applied, but their own notifications are
/// suppressed while the outer notification is still running.
///
/// # Example
///
/// ```ignore
/// impl SelectableAdapter for ContactAdapter {
///     type Key = u64;
///
///     fn key_of(&self, contact: &Contact) -> u64 {
///         contact.id
///     }
///
///     fn on_select_changed(&self, _tracker: &SelectionTracker<Self>, position: usize, checked: bool) {
///         self.rows.lock()[position].set_check_mark(checked);
///     }
///
///     fn on_select_model_changed(&self, _tracker: &SelectionTracker<Self>, enabled: bool) {
///         self.toolbar.set_visible(enabled);
///     }
/// }
/// ```
pub trait SelectableAdapter: ItemSource + Sized {
    /// Identity used to index the selection map.
    type Key: Eq + Hash + Clone;

    /// Derives the selection key for an item.
    fn key_of(&self, item: &Self::Item) -> Self::Key;

    /// Called when the item at `position` becomes checked or unchecked.
    ///
    /// Also runs once per item during `check_all` and, on request, during
    /// `uncheck_all`. The default does nothing.
    fn on_select_changed(
        &self,
        _tracker: &SelectionTracker<Self>,
        _position: usize,
        _checked: bool,
    ) {
    }

    /// Called when select mode is switched on or off.
    fn on_select_model_changed(&self, tracker: &SelectionTracker<Self>, enabled: bool);
}
