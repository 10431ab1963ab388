//! Keyboard selection over a live item list.
//!
//! A [`NavigationController`] tracks the selected index into an [`ItemList`]
//! and reports every change to a selection callback. While activated on a
//! [`KeyHub`] it reacts to `ArrowDown`, `ArrowUp` and `Escape`:
//!
//! | key         | new index                     | default action |
//! |-------------|-------------------------------|----------------|
//! | `ArrowDown` | `min(index + 1, len - 1)`     | suppressed     |
//! | `ArrowUp`   | `max(index - 1, 0)`           | suppressed     |
//! | `Escape`    | unselected                    | untouched      |
//!
//! The list length is read when each key arrives. On an empty list both arrow
//! keys leave the controller unselected and report `None`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::NavError;
use crate::hub::{KeyHub, Subscription};
use crate::items::ItemList;
use crate::key::{KeyInput, NavKey};
use crate::result::NavResult;

type SelectCallback<T> = Box<dyn FnMut(Option<T>)>;

struct Inner<L: ItemList> {
    items: L,
    on_select: RefCell<SelectCallback<L::Item>>,
    selection: Cell<Option<usize>>,
    active: Cell<bool>,
}

/// Handle onto a navigation controller. Clones share state.
pub struct NavigationController<L: ItemList> {
    inner: Rc<Inner<L>>,
}

impl<L: ItemList> Clone for NavigationController<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: ItemList> fmt::Debug for NavigationController<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("index", &self.index())
            .field("len", &self.inner.items.len())
            .field("active", &self.is_active())
            .finish()
    }
}

impl<L: ItemList> NavigationController<L> {
    /// Create an unselected, inactive controller.
    pub fn new<F>(items: L, on_select: F) -> Self
    where
        F: FnMut(Option<L::Item>) + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                items,
                on_select: RefCell::new(Box::new(on_select)),
                selection: Cell::new(None),
                active: Cell::new(false),
            }),
        }
    }

    /// Selected index, or `None` when nothing is selected.
    pub fn index(&self) -> Option<usize> {
        self.inner.selection.get()
    }

    /// Currently selected item, read from the live list.
    pub fn selected(&self) -> Option<L::Item> {
        self.index().and_then(|index| self.inner.items.get(index))
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    pub fn items(&self) -> &L {
        &self.inner.items
    }

    /// Apply one key event. Returns `false` for keys the controller ignores.
    ///
    /// This is what the hub listener calls. It does not check the activation
    /// scope: a direct call moves the index even while the controller is
    /// inactive, and the next `activate` resets it.
    pub fn handle_key(&self, input: &mut KeyInput) -> bool {
        let Some(key) = input.nav_key() else {
            return false;
        };

        let len = self.inner.items.len();
        let previous = self.index();
        let next = match key {
            NavKey::Down => step_down(previous, len),
            NavKey::Up => step_up(previous, len),
            NavKey::Escape => None,
        };

        if key.suppresses_default() {
            input.prevent_default();
        }
        self.inner.selection.set(next);
        tracing::debug!(key = key.identifier(), ?previous, ?next, len, "selection moved");

        let item = next.and_then(|index| self.inner.items.get(index));
        self.notify(item);
        true
    }

    fn notify(&self, item: Option<L::Item>) {
        match self.inner.on_select.try_borrow_mut() {
            Ok(mut callback) => (*callback)(item),
            Err(_) => tracing::warn!("selection callback re-entered, notification dropped"),
        }
    }
}

impl<L> NavigationController<L>
where
    L: ItemList + 'static,
    L::Item: 'static,
{
    /// Start listening on `hub`.
    ///
    /// The index is reset to unselected. At most one activation may be live
    /// per controller; the returned guard removes the listener when dropped.
    pub fn activate(&self, hub: &KeyHub) -> NavResult<Activation> {
        if self.inner.active.replace(true) {
            return Err(NavError::AlreadyActive);
        }
        self.inner.selection.set(None);

        let weak = Rc::downgrade(&self.inner);
        let subscription = hub.subscribe(move |input| {
            if let Some(inner) = weak.upgrade() {
                NavigationController { inner }.handle_key(input);
            }
        });
        tracing::debug!(listener = ?subscription.id(), "navigation activated");

        Ok(Activation {
            subscription: Some(subscription),
            scope: self.inner.clone(),
        })
    }
}

trait Scope {
    fn end(&self);
}

impl<L: ItemList> Scope for Inner<L> {
    fn end(&self) {
        self.selection.set(None);
        self.active.set(false);
    }
}

/// A live activation of a [`NavigationController`].
///
/// Dropping it, or calling [`Activation::deactivate`], removes the key
/// listener and clears the selection.
#[must_use = "dropping an Activation deactivates the controller immediately"]
pub struct Activation {
    subscription: Option<Subscription>,
    scope: Rc<dyn Scope>,
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("subscription", &self.subscription)
            .finish()
    }
}

impl Activation {
    pub fn deactivate(self) {}
}

impl Drop for Activation {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(listener = ?subscription.id(), "navigation deactivated");
            drop(subscription);
        }
        self.scope.end();
    }
}

fn step_down(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) => (index + 1).min(len - 1),
        None => 0,
    })
}

fn step_up(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        // Also clamps from above when the list shrank since the last key.
        Some(index) => index.saturating_sub(1).min(len - 1),
        None => 0,
    })
}
