//! Viewport-wide pointer event stream
//!
//! Pointer moves and releases are observed anywhere in the window, not just
//! over the sidebar. Components register a listener with [`PointerEvents::subscribe`]
//! and hold the returned [`PointerSubscription`] for as long as they are mounted.
//! Dropping (or explicitly unsubscribing) the guard releases the listener.
//!
//! Dispatch iterates over a snapshot of the listeners taken when the event is
//! emitted, so a listener removed during dispatch may still see that one event.
//! Listeners must tolerate being called after their owner has gone away.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A pointer sample delivered to every subscriber
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to window coordinates (logical pixels)
    Moved { x: f64, y: f64 },
    /// Primary button released, wherever the pointer is
    Released,
}

type Listener = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

impl Registry {
    fn remove(&self, id: u64) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

/// Shared handle to the pointer event stream. Clones refer to the same stream.
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Rc<Registry>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the guard is released.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> PointerSubscription
    where
        F: Fn(&PointerEvent) + 'static,
    {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        tracing::trace!(target: "pointer", id, "listener subscribed");

        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
            active: true,
        }
    }

    /// Deliver an event to every listener registered at the time of the call
    pub fn emit(&self, event: PointerEvent) {
        let snapshot: Vec<Listener> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(&event);
        }
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

impl std::fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// RAII guard for a pointer listener
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    registry: Weak<Registry>,
    active: bool,
}

impl PointerSubscription {
    /// Release the listener. Safe to call more than once.
    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(registry) = self.registry.upgrade() {
            if registry.remove(self.id) {
                tracing::trace!(target: "pointer", id = self.id, "listener unsubscribed");
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));

        let h1 = Rc::clone(&hits);
        let _a = events.subscribe(move |_| h1.set(h1.get() + 1));
        let h2 = Rc::clone(&hits);
        let _b = events.subscribe(move |_| h2.set(h2.get() + 10));

        events.emit(PointerEvent::Released);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = PointerEvents::new();
        let sub = events.subscribe(|_| {});
        assert_eq!(events.listener_count(), 1);
        drop(sub);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_twice_is_safe() {
        let events = PointerEvents::new();
        let mut sub = events.subscribe(|_| {});
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_stream() {
        let events = PointerEvents::new();
        let mut sub = events.subscribe(|_| {});
        drop(events);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_unsubscribed_listener_not_called_on_next_emit() {
        let events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let mut sub = events.subscribe(move |_| h.set(h.get() + 1));

        events.emit(PointerEvent::Moved { x: 1.0, y: 1.0 });
        sub.unsubscribe();
        events.emit(PointerEvent::Moved { x: 2.0, y: 1.0 });
        assert_eq!(hits.get(), 1);
    }
}
