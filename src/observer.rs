//! Single-threaded publish/subscribe primitive.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    listeners: Vec<(u64, Callback<T>)>,
    next_id: u64,
    disposed: bool,
}

impl<T> Registry<T> {
    fn is_listening(&self, id: u64) -> bool {
        !self.disposed && self.listeners.iter().any(|(listener, _)| *listener == id)
    }
}

/// Keeps a list of callbacks and invokes them synchronously on [`publish`](Self::publish).
///
/// Callbacks may subscribe, unsubscribe or dispose from inside a
/// notification. A listener removed during a publish (or every listener, once
/// the publisher is disposed) receives nothing further from it.
///
/// # Examples
///
/// ```
/// use ayumi::Publisher;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let publisher = Publisher::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let sink = Rc::clone(&seen);
/// let subscription = publisher.subscribe(move |value: &i32| sink.set(*value));
///
/// publisher.publish(&7);
/// assert_eq!(seen.get(), 7);
///
/// subscription.unsubscribe();
/// publisher.publish(&9);
/// assert_eq!(seen.get(), 7);
/// ```
pub struct Publisher<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("Publisher")
            .field("subscribers", &registry.listeners.len())
            .field("disposed", &registry.disposed)
            .finish()
    }
}

impl<T: 'static> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Publisher<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                listeners: Vec::new(),
                next_id: 0,
                disposed: false,
            })),
        }
    }

    /// Registers `callback`. After [`dispose`](Self::dispose) the callback is
    /// dropped immediately and the returned handle is inert.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        if registry.disposed {
            trace!("Subscribe on disposed publisher ignored");
            return Subscription { detach: None };
        }
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(callback)));
        trace!(id, subscribers = registry.listeners.len(), "Subscribed");

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry
                        .borrow_mut()
                        .listeners
                        .retain(|(listener, _)| *listener != id);
                    trace!(id, "Unsubscribed");
                }
            })),
        }
    }

    /// Invokes every current listener with `value`, in subscription order.
    pub fn publish(&self, value: &T) {
        let snapshot: Vec<(u64, Callback<T>)> = {
            let registry = self.registry.borrow();
            if registry.disposed {
                return;
            }
            registry
                .listeners
                .iter()
                .map(|(id, callback)| (*id, Rc::clone(callback)))
                .collect()
        };

        for (id, callback) in snapshot {
            if self.registry.borrow().is_listening(id) {
                callback(value);
            }
        }
    }

    /// Drops every listener. Later publishes and subscribes are no-ops.
    pub fn dispose(&self) {
        let released = {
            let mut registry = self.registry.borrow_mut();
            registry.disposed = true;
            std::mem::take(&mut registry.listeners)
        };
        trace!(released = released.len(), "Publisher disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.registry.borrow().disposed
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle returned by [`Publisher::subscribe`].
///
/// Dropping the handle leaves the callback attached; call
/// [`unsubscribe`](Self::unsubscribe) to detach it.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}
