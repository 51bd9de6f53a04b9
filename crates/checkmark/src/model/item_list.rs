//! Generic owning list.
//!
//! `ItemList<T>` stores the items a selectable view displays and announces
//! structural changes through signals. It implements [`ItemSource`], so an
//! adapter can delegate its list access to it.

use parking_lot::RwLock;

use checkmark_core::Signal;
use checkmark_core::logging::targets;

use super::traits::ItemSource;

/// An ordered list of items with change notification.
///
/// # Signals
///
/// - `rows_inserted`: Emitted after rows are inserted. Args: (first, last)
/// - `rows_removed`: Emitted after rows are removed. Args: (first, last)
/// - `data_set_changed`: Emitted when every row may have changed
///
/// # Example
///
/// ```
/// use checkmark::model::ItemList;
///
/// let list = ItemList::new(vec!["Apple".to_string(), "Banana".to_string()]);
/// list.data_set_changed.connect(|_| println!("refresh"));
///
/// list.push("Cherry".to_string());
/// assert_eq!(list.len(), 3);
/// ```
pub struct ItemList<T> {
    items: RwLock<Vec<T>>,

    /// Emitted after rows are inserted. Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after rows are removed. Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted when the whole list should be redrawn.
    pub data_set_changed: Signal<()>,
}

impl<T: Send + Sync + 'static> Default for ItemList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Send + Sync + 'static> ItemList<T> {
    /// Creates a list holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            data_set_changed: Signal::new(),
        }
    }

    /// Creates an empty list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        let row = {
            let mut items = self.items.write();
            items.push(item);
            items.len() - 1
        };
        tracing::trace!(target: targets::ITEM_LIST, row, "row appended");
        self.rows_inserted.emit((row, row));
    }

    /// Inserts an item at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: T) {
        self.items.write().insert(index, item);
        tracing::trace!(target: targets::ITEM_LIST, row = index, "row inserted");
        self.rows_inserted.emit((index, index));
    }

    /// Removes and returns the item at the specified index.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut items = self.items.write();
            (index < items.len()).then(|| items.remove(index))
        };
        if removed.is_some() {
            tracing::trace!(target: targets::ITEM_LIST, row = index, "row removed");
            self.rows_removed.emit((index, index));
        }
        removed
    }

    /// Replaces all items and requests a full refresh.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.notify_refresh();
    }

    /// Removes all items and requests a full refresh.
    pub fn clear(&self) {
        self.items.write().clear();
        self.notify_refresh();
    }

    /// Returns a read guard over the items.
    ///
    /// Do not hold the guard across calls that mutate the list.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    fn notify_refresh(&self) {
        tracing::trace!(target: targets::ITEM_LIST, "data set changed");
        self.data_set_changed.emit(());
    }
}

impl<T> ItemSource for ItemList<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    type Item = T;

    fn item_at(&self, position: usize) -> Option<T> {
        self.items.read().get(position).cloned()
    }

    fn position_of(&self, item: &T) -> Option<usize> {
        self.items.read().iter().position(|candidate| candidate == item)
    }

    fn item_count(&self) -> usize {
        self.len()
    }

    fn notify_data_set_changed(&self) {
        self.notify_refresh();
    }
}

static_assertions::assert_impl_all!(ItemList<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn fruits() -> ItemList<String> {
        ItemList::new(vec![
            "Apple".to_string(),
            "Banana".to_string(),
            "Cherry".to_string(),
        ])
    }

    #[test]
    fn test_item_source_access() {
        let list = fruits();
        assert_eq!(list.item_count(), 3);
        assert_eq!(list.item_at(1).as_deref(), Some("Banana"));
        assert_eq!(list.item_at(3), None);
        assert_eq!(list.position_of(&"Cherry".to_string()), Some(2));
        assert_eq!(list.position_of(&"Durian".to_string()), None);
    }

    #[test]
    fn test_push_and_signals() {
        let list = fruits();
        let inserted = Arc::new(Mutex::new(Vec::new()));

        let recv = inserted.clone();
        list.rows_inserted.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        list.push("Durian".to_string());
        list.insert(0, "Apricot".to_string());

        assert_eq!(*inserted.lock(), vec![(3, 3), (0, 0)]);
        assert_eq!(list.item_at(0).as_deref(), Some("Apricot"));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_remove_and_signals() {
        let list = fruits();
        let removed = Arc::new(Mutex::new(Vec::new()));

        let recv = removed.clone();
        list.rows_removed.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        assert_eq!(list.remove(1).as_deref(), Some("Banana"));
        assert_eq!(list.remove(10), None);

        assert_eq!(*removed.lock(), vec![(1, 1)]);
        assert_eq!(list.items().as_slice(), ["Apple", "Cherry"]);
    }

    #[test]
    fn test_refresh_signal() {
        let list = fruits();
        let refreshes = Arc::new(Mutex::new(0));

        let counter = refreshes.clone();
        list.data_set_changed.connect(move |_| {
            *counter.lock() += 1;
        });

        list.notify_data_set_changed();
        list.set_items(vec!["Kiwi".to_string()]);
        list.clear();

        assert_eq!(*refreshes.lock(), 3);
        assert!(list.is_empty());
    }
}
