//! Checked-state tracking for list adapters.
//!
//! This module provides [`SelectionTracker`], which remembers which rows of a
//! list are checked, whether the list is in select mode, and who must hear
//! about changes.
//!
//! # Notification Order
//!
//! A successful single-item change runs, in order:
//!
//! 1. the adapter hook [`SelectableAdapter::on_select_changed`]
//! 2. the registered listener, if any
//!
//! Bulk operations ([`check_all`](SelectionTracker::check_all) and
//! [`uncheck_all`](SelectionTracker::uncheck_all)) only run the adapter hook
//! and then request a full refresh. They never call the listener.
//!
//! # Re-entrancy
//!
//! A hook or listener may change the tracker again. The nested change is
//! applied, but it does not notify anyone while the outer notification is
//! still running. Select-mode changes are guarded by a second, independent
//! flag. Both flags guard logical re-entry only; they are not locks.
//!
//! # Example
//!
//! ```ignore
//! let tracker = SelectionTracker::builder(adapter)
//!     .interceptor(|contact: &Contact| contact.is_locked)
//!     .listener(|tracker, position, contact, checked| {
//!         println!("{} -> {checked} ({} checked)", contact.name, tracker.checked_count());
//!     })
//!     .build();
//!
//! tracker.set_select_model(true);
//! tracker.set_checked(2, true);
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};

use checkmark_core::logging::targets;
use checkmark_core::{Result, SelectionError};

use super::traits::{ItemSource, SelectableAdapter};

/// Veto predicate consulted before every single-item change.
///
/// Returning `true` blocks the change.
pub type SelectInterceptor<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Observer of single-item changes. Args: (tracker, position, item, checked)
pub type SelectChangedListener<A> = Arc<
    dyn Fn(&SelectionTracker<A>, usize, &<A as ItemSource>::Item, bool) + Send + Sync,
>;

/// Result of a checked-state change that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The item was inserted into or removed from the selection map.
    ///
    /// Re-checking an item that is already checked also reports `Applied`.
    Applied,
    /// The position held no item; nothing was changed.
    Absent,
}

/// Sets a re-entrancy flag for as long as it lives.
struct BroadcastGuard<'a>(&'a AtomicBool);

impl<'a> BroadcastGuard<'a> {
    /// Returns `None` if the flag is already set.
    fn enter(flag: &'a AtomicBool) -> Option<Self> {
        (!flag.swap(true, Ordering::SeqCst)).then(|| Self(flag))
    }
}

impl Drop for BroadcastGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Tracks checked items and select mode for a list adapter.
///
/// Checked items are stored in a map from [`SelectableAdapter::Key`] to the
/// item itself. Every query except [`checked`](Self::checked) looks items up
/// by key; `checked` walks the list and tests membership by item equality.
///
/// All operations take `&self`, so hooks and listeners can call back into the
/// tracker they were handed.
pub struct SelectionTracker<A: SelectableAdapter> {
    /// The adapter that owns the list and receives the hooks.
    adapter: Arc<A>,

    /// Checked items by key.
    selected: Mutex<HashMap<A::Key, A::Item>>,

    /// Whether the list is in select mode.
    select_mode: AtomicBool,

    /// Set while a checked-state notification is running.
    broadcasting: AtomicBool,

    /// Set while the select-mode hook is running.
    mode_broadcasting: AtomicBool,

    interceptor: RwLock<Option<SelectInterceptor<A::Item>>>,
    listener: RwLock<Option<SelectChangedListener<A>>>,
}

impl<A: SelectableAdapter> SelectionTracker<A> {
    /// Creates a tracker with an empty selection, select mode off, and no
    /// interceptor or listener.
    pub fn new(adapter: Arc<A>) -> Self {
        Self {
            adapter,
            selected: Mutex::new(HashMap::new()),
            select_mode: AtomicBool::new(false),
            broadcasting: AtomicBool::new(false),
            mode_broadcasting: AtomicBool::new(false),
            interceptor: RwLock::new(None),
            listener: RwLock::new(None),
        }
    }

    /// Starts building a tracker for `adapter`.
    pub fn builder(adapter: Arc<A>) -> SelectionTrackerBuilder<A> {
        SelectionTrackerBuilder::new(adapter)
    }

    /// Returns the adapter this tracker reports to.
    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    // =========================================================================
    // Interceptor and Listener
    // =========================================================================

    /// Installs the interceptor, replacing any previous one.
    pub fn set_select_interceptor<F>(&self, interceptor: F)
    where
        F: Fn(&A::Item) -> bool + Send + Sync + 'static,
    {
        *self.interceptor.write() = Some(Arc::new(interceptor));
    }

    /// Removes the interceptor.
    pub fn clear_select_interceptor(&self) {
        *self.interceptor.write() = None;
    }

    /// Installs the listener, replacing any previous one.
    pub fn set_select_changed_listener<F>(&self, listener: F)
    where
        F: Fn(&SelectionTracker<A>, usize, &A::Item, bool) + Send + Sync + 'static,
    {
        *self.listener.write() = Some(Arc::new(listener));
    }

    /// Removes the listener.
    pub fn clear_select_changed_listener(&self) {
        *self.listener.write() = None;
    }

    // =========================================================================
    // Single-item Changes
    // =========================================================================

    /// Checks or unchecks the item at `position`.
    ///
    /// Returns `false` only if the interceptor vetoed the change. An empty or
    /// out-of-range position changes nothing and still returns `true`; use
    /// [`try_set_checked`](Self::try_set_checked) to tell the two apart.
    pub fn set_checked(&self, position: usize, checked: bool) -> bool {
        self.try_set_checked(position, checked).is_ok()
    }

    /// Like [`set_checked`](Self::set_checked), reporting what happened.
    pub fn try_set_checked(&self, position: usize, checked: bool) -> Result<CheckOutcome> {
        let item = self.adapter.item_at(position);
        self.apply_checked(position, item, checked)
    }

    /// Checks or unchecks `item`, locating it in the list by equality.
    ///
    /// Returns `false` if the item is not in the list or the interceptor
    /// vetoed the change.
    pub fn set_checked_by_item(&self, item: &A::Item, checked: bool) -> bool {
        self.try_set_checked_by_item(item, checked).is_ok()
    }

    /// Like [`set_checked_by_item`](Self::set_checked_by_item), reporting
    /// what happened.
    pub fn try_set_checked_by_item(&self, item: &A::Item, checked: bool) -> Result<CheckOutcome> {
        let position = self.adapter.position_of(item).ok_or_else(|| {
            tracing::debug!(target: targets::SELECTION, checked, "item not found in list");
            SelectionError::NotInList
        })?;
        self.apply_checked(position, Some(item.clone()), checked)
    }

    fn apply_checked(
        &self,
        position: usize,
        item: Option<A::Item>,
        checked: bool,
    ) -> Result<CheckOutcome> {
        let Some(item) = item else {
            tracing::trace!(target: targets::SELECTION, position, "no item at position");
            return Ok(CheckOutcome::Absent);
        };

        if self.is_intercepted(&item) {
            tracing::debug!(
                target: targets::SELECTION,
                position,
                checked,
                "change blocked by interceptor"
            );
            return Err(SelectionError::Intercepted);
        }

        let key = self.adapter.key_of(&item);
        {
            let mut selected = self.selected.lock();
            if checked {
                selected.insert(key, item.clone());
            } else {
                selected.remove(&key);
            }
        }

        let Some(_guard) = BroadcastGuard::enter(&self.broadcasting) else {
            tracing::trace!(
                target: targets::SELECTION,
                position,
                checked,
                "nested change, notification suppressed"
            );
            return Ok(CheckOutcome::Applied);
        };

        tracing::trace!(target: targets::SELECTION, position, checked, "checked state changed");
        self.adapter.on_select_changed(self, position, checked);

        let listener = self.listener.read().clone();
        if let Some(listener) = listener {
            listener(self, position, &item, checked);
        }

        Ok(CheckOutcome::Applied)
    }

    fn is_intercepted(&self, item: &A::Item) -> bool {
        let interceptor = self.interceptor.read().clone();
        interceptor.is_some_and(|intercept| intercept(item))
    }

    // =========================================================================
    // Bulk Changes
    // =========================================================================

    /// Checks every item in the list, then requests a full refresh.
    ///
    /// The adapter hook runs once per item with `checked = true`. The
    /// interceptor and listener are not consulted.
    pub fn check_all(&self) {
        let count = self.adapter.item_count();
        for position in 0..count {
            if let Some(item) = self.adapter.item_at(position) {
                let key = self.adapter.key_of(&item);
                self.selected.lock().insert(key, item);
                self.adapter.on_select_changed(self, position, true);
            }
        }
        tracing::debug!(
            target: targets::SELECTION,
            checked = self.checked_count(),
            "checked all items"
        );
        self.adapter.notify_data_set_changed();
    }

    /// Unchecks everything, then requests a full refresh.
    ///
    /// When `notify_select_holder` is `true`, the adapter hook first runs with
    /// `checked = false` for every item in the list, checked or not. The
    /// listener is never called.
    pub fn uncheck_all(&self, notify_select_holder: bool) {
        if notify_select_holder {
            let count = self.adapter.item_count();
            for position in 0..count {
                if self.adapter.item_at(position).is_some() {
                    self.adapter.on_select_changed(self, position, false);
                }
            }
        }
        self.selected.lock().clear();
        tracing::debug!(target: targets::SELECTION, notify_select_holder, "unchecked all items");
        self.adapter.notify_data_set_changed();
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Returns the checked items in list order.
    ///
    /// Returns `None` when the list is empty or nothing is checked. Membership
    /// is decided by item equality against the stored values, so the result
    /// can be `Some(vec![])` if every stored item has since left the list.
    pub fn checked(&self) -> Option<Vec<A::Item>> {
        let count = self.adapter.item_count();
        if count == 0 {
            return None;
        }

        let values: Vec<A::Item> = {
            let selected = self.selected.lock();
            if selected.is_empty() {
                return None;
            }
            selected.values().cloned().collect()
        };

        let result = (0..count)
            .filter_map(|position| self.adapter.item_at(position))
            .filter(|item| values.contains(item))
            .collect();
        Some(result)
    }

    /// Returns the number of checked items.
    pub fn checked_count(&self) -> usize {
        self.selected.lock().len()
    }

    /// Returns `true` if at least one item is checked.
    pub fn has_checked(&self) -> bool {
        !self.selected.lock().is_empty()
    }

    /// Returns the keys of all checked items, in no particular order.
    pub fn checked_keys(&self) -> Vec<A::Key> {
        self.selected.lock().keys().cloned().collect()
    }

    /// Checks whether an item with `key` is checked.
    pub fn is_checked_key(&self, key: &A::Key) -> bool {
        self.selected.lock().contains_key(key)
    }

    /// Checks whether `item` is checked, comparing by its key.
    pub fn is_checked_item(&self, item: &A::Item) -> bool {
        let key = self.adapter.key_of(item);
        self.is_checked_key(&key)
    }

    // =========================================================================
    // Select Mode
    // =========================================================================

    /// Enters or leaves select mode.
    ///
    /// Does nothing if the mode is already `enabled`. Otherwise the adapter's
    /// [`on_select_model_changed`](SelectableAdapter::on_select_model_changed)
    /// runs, unless this call is nested inside that hook. If select mode is
    /// off afterwards, the selection is cleared without per-item hooks.
    pub fn set_select_model(&self, enabled: bool) {
        if self.select_mode.swap(enabled, Ordering::SeqCst) == enabled {
            return;
        }
        tracing::debug!(target: targets::SELECTION, enabled, "select mode changed");

        match BroadcastGuard::enter(&self.mode_broadcasting) {
            Some(_guard) => self.adapter.on_select_model_changed(self, enabled),
            None => {
                tracing::trace!(
                    target: targets::SELECTION,
                    enabled,
                    "nested mode change, hook suppressed"
                );
            }
        }

        if !self.is_select_model() {
            self.selected.lock().clear();
        }
    }

    /// Returns `true` while select mode is on.
    pub fn is_select_model(&self) -> bool {
        self.select_mode.load(Ordering::SeqCst)
    }
}

/// Builder for [`SelectionTracker`] with the interceptor and listener
/// installed up front.
pub struct SelectionTrackerBuilder<A: SelectableAdapter> {
    adapter: Arc<A>,
    interceptor: Option<SelectInterceptor<A::Item>>,
    listener: Option<SelectChangedListener<A>>,
}

impl<A: SelectableAdapter> SelectionTrackerBuilder<A> {
    /// Create a builder for `adapter` with no interceptor or listener.
    pub fn new(adapter: Arc<A>) -> Self {
        Self {
            adapter,
            interceptor: None,
            listener: None,
        }
    }

    /// Set the interceptor.
    pub fn interceptor<F>(mut self, interceptor: F) -> Self
    where
        F: Fn(&A::Item) -> bool + Send + Sync + 'static,
    {
        self.interceptor = Some(Arc::new(interceptor));
        self
    }

    /// Set the listener.
    pub fn listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&SelectionTracker<A>, usize, &A::Item, bool) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Build the tracker.
    pub fn build(self) -> SelectionTracker<A> {
        let tracker = SelectionTracker::new(self.adapter);
        *tracker.interceptor.write() = self.interceptor;
        *tracker.listener.write() = self.listener;
        tracker
    }
}
