//! Single-threaded key-event dispatch with scoped subscriptions.
//!
//! A [`KeyHub`] stands in for the process-wide key target a host view listens
//! on. Listeners are only reachable through the [`Subscription`] returned by
//! [`KeyHub::subscribe`]; dropping it removes the listener.
//!
//! Delivery is synchronous. A dispatch started from inside a listener is
//! queued and delivered once the current event has reached every listener, so
//! events are always handled one at a time in arrival order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::key::KeyInput;

type Listener = Rc<RefCell<dyn FnMut(&mut KeyInput)>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
struct HubState {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
    dispatching: bool,
    pending: VecDeque<KeyInput>,
}

impl HubState {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }
}

/// Result of [`KeyHub::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event reached `listeners` listeners before `dispatch` returned.
    Delivered {
        default_prevented: bool,
        listeners: usize,
    },
    /// Another dispatch was in progress; the event runs after it.
    Queued,
}

impl DispatchOutcome {
    pub fn default_prevented(&self) -> bool {
        matches!(
            self,
            Self::Delivered {
                default_prevented: true,
                ..
            }
        )
    }
}

/// Cloneable handle onto a key-event target.
#[derive(Clone, Default)]
pub struct KeyHub {
    state: Rc<RefCell<HubState>>,
}

impl fmt::Debug for KeyHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl KeyHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&mut KeyInput) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        state.listeners.push((id, listener));
        tracing::trace!(listener = id.0, total = state.listeners.len(), "key listener added");

        Subscription {
            hub: Rc::downgrade(&self.state),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn dispatch(&self, key: impl Into<String>) -> DispatchOutcome {
        let input = KeyInput::new(key);
        {
            let mut state = self.state.borrow_mut();
            if state.dispatching {
                tracing::trace!(key = input.key(), "dispatch in progress, queueing key");
                state.pending.push_back(input);
                return DispatchOutcome::Queued;
            }
            state.dispatching = true;
        }
        let _guard = DispatchGuard { state: &self.state };

        let outcome = self.deliver(input);
        loop {
            let next = self.state.borrow_mut().pending.pop_front();
            let Some(next) = next else {
                break;
            };
            let queued = self.deliver(next);
            tracing::trace!(?queued, "queued key delivered");
        }
        outcome
    }

    fn deliver(&self, mut input: KeyInput) -> DispatchOutcome {
        let snapshot: Vec<(ListenerId, Listener)> = self.state.borrow().listeners.clone();
        let mut delivered = 0;

        for (id, listener) in snapshot {
            // Skip listeners removed by an earlier listener for this same event.
            if !self.state.borrow().contains(id) {
                continue;
            }
            let mut callback = listener.borrow_mut();
            (*callback)(&mut input);
            delivered += 1;
        }

        DispatchOutcome::Delivered {
            default_prevented: input.default_prevented(),
            listeners: delivered,
        }
    }
}

struct DispatchGuard<'a> {
    state: &'a RefCell<HubState>,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.dispatching = false;
            if !state.pending.is_empty() {
                // Only reachable when a listener panicked mid-dispatch.
                tracing::warn!(dropped = state.pending.len(), "discarding queued keys");
                state.pending.clear();
            }
        }
    }
}

/// Keeps a listener registered on a [`KeyHub`] for as long as it lives.
#[must_use = "dropping a Subscription removes its listener immediately"]
pub struct Subscription {
    hub: Weak<RefCell<HubState>>,
    id: ListenerId,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered with a live hub.
    pub fn is_active(&self) -> bool {
        self.hub
            .upgrade()
            .is_some_and(|state| state.borrow().contains(self.id))
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(state) = self.hub.upgrade() else {
            return;
        };
        let removed = {
            let Ok(mut state) = state.try_borrow_mut() else {
                tracing::error!(listener = self.id.0, "key hub busy, listener not removed");
                return;
            };
            let position = state
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id);
            position.map(|index| state.listeners.remove(index))
        };
        // The listener's captures are dropped here, after the hub borrow ends.
        if removed.is_some() {
            tracing::trace!(listener = self.id.0, "key listener removed");
        }
        drop(removed);
    }
}
