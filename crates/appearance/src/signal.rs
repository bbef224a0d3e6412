//! OS color-scheme signal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The OS-level dark/light signal.
///
/// `watch` registers a change listener for the lifetime of the returned
/// [`Subscription`]; dropping the guard unregisters it. No polling.
pub trait ColorScheme {
    /// Current darkness as the OS reports it.
    fn is_dark(&self) -> bool;

    /// Subscribe to changes. The listener receives the new darkness.
    fn watch(&self, listener: Box<dyn FnMut(bool)>) -> Subscription;
}

/// RAII guard for a registered listener.
///
/// Must be held to keep the listener active; dropping it unsubscribes, on
/// every exit path.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(bool)>>>;

/// Push-style [`ColorScheme`] for hosts that receive appearance events from
/// their windowing layer.
///
/// The host forwards each platform event into [`set_dark`](Self::set_dark)
/// and hands clones of the relay to anything that needs the signal. Also
/// serves as the test double.
#[derive(Clone, Default)]
pub struct SchemeRelay {
    inner: Rc<RelayInner>,
}

#[derive(Default)]
struct RelayInner {
    dark: Cell<bool>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl SchemeRelay {
    pub fn new(dark: bool) -> Self {
        let relay = Self::default();
        relay.inner.dark.set(dark);
        relay
    }

    /// Record a newly reported darkness and notify listeners.
    ///
    /// Listeners run only on an actual change.
    pub fn set_dark(&self, dark: bool) {
        if self.inner.dark.replace(dark) == dark {
            return;
        }
        // Snapshot so a listener may drop its own subscription mid-notify.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            (*listener.borrow_mut())(dark);
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ColorScheme for SchemeRelay {
    fn is_dark(&self) -> bool {
        self.inner.dark.get()
    }

    fn watch(&self, listener: Box<dyn FnMut(bool)>) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }
}
