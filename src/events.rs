//! Scoped event subscriptions.
//!
//! An [`EventTarget`] keeps a list of handlers for one event type.
//! [`EventTarget::subscribe`] hands back a [`ListenerGuard`]; the handler stays
//! registered exactly as long as the guard lives, so every exit path (an
//! explicit close, an early return, a dropped owner) releases it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Locks a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Identifier of a registered handler, unique per target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(ListenerId, Handler<E>)>,
}

/// Removes a handler by id; lets a guard forget the event type.
trait Deregister: Send + Sync {
    fn deregister(&self, id: ListenerId);
}

impl<E> Deregister for Mutex<Registry<E>> {
    fn deregister(&self, id: ListenerId) {
        lock(self).handlers.retain(|(handler_id, _)| *handler_id != id);
    }
}

/// A list of handlers for events of type `E`.
///
/// Cloning yields another handle to the same list.
pub struct EventTarget<E> {
    registry: Arc<Mutex<Registry<E>>>,
}

impl<E> Clone for EventTarget<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E> Default for EventTarget<E> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }
}

impl<E> std::fmt::Debug for EventTarget<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<E: 'static> EventTarget<E> {
    /// Creates an empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` until the returned guard is dropped.
    #[must_use = "the handler is removed as soon as the guard is dropped"]
    pub fn subscribe<F>(&self, handler: F) -> ListenerGuard
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = lock(&self.registry);
            let id = ListenerId(registry.next_id);
            registry.next_id += 1;
            registry.handlers.push((id, Arc::new(handler)));
            id
        };

        let registry: Arc<dyn Deregister> = self.registry.clone();
        ListenerGuard {
            id,
            registry: Arc::downgrade(&registry),
        }
    }

    /// Delivers `event` to every handler registered at the time of the call.
    ///
    /// Handlers run without the registry lock held, so they may subscribe or
    /// drop guards. Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &E) -> usize {
        let handlers: Vec<Handler<E>> = lock(&self.registry)
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}

impl<E> EventTarget<E> {
    /// Number of handlers currently registered.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

/// Keeps a handler registered; dropping it deregisters the handler.
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<dyn Deregister>,
}

impl ListenerGuard {
    /// Id of the guarded handler.
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.deregister(self.id);
        }
    }
}
