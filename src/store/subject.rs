//! Replay-Latest Subject
//!
//! A single-value publish/subscribe cell. The subject holds the current value
//! and a registry of observers, each fed through its own unbounded channel so
//! a live observer sees every published value in order. A new observer
//! receives the current value immediately on subscribing.
//!
//! Observers are released by dropping their [`Subscription`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Unique identifier for a subscription
pub type SubscriptionId = Uuid;

/// Single current value plus the observers to notify on change
pub struct Subject<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

struct Shared<T> {
    current: T,
    observers: HashMap<SubscriptionId, mpsc::UnboundedSender<T>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone> Subject<T> {
    /// Create a subject holding an initial value
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                current: initial,
                observers: HashMap::new(),
            })),
        }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        lock(&self.shared).current.clone()
    }

    /// Replace the current value and push it to every observer
    pub fn publish(&self, value: T) {
        let mut shared = lock(&self.shared);
        shared.current = value.clone();

        // Receivers gone without a Drop (leaked handles) are pruned here
        shared
            .observers
            .retain(|_, sender| sender.send(value.clone()).is_ok());

        tracing::trace!(observers = shared.observers.len(), "Published value");
    }

    /// Register an observer; the current value is delivered first
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        let mut shared = lock(&self.shared);
        // Receiver is alive, this cannot fail
        let _ = sender.send(shared.current.clone());
        shared.observers.insert(id, sender);

        tracing::debug!(subscription_id = %id, observers = shared.observers.len(), "Subscribed");

        Subscription {
            id,
            receiver,
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<T> Subject<T> {
    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        lock(&self.shared).observers.len()
    }
}

/// Scoped observer handle; dropping it unregisters the observer
pub struct Subscription<T> {
    id: SubscriptionId,
    receiver: mpsc::UnboundedReceiver<T>,
    shared: Weak<Mutex<Shared<T>>>,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Wait for the next value. Returns `None` once the subject is gone.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Take the next pending value without waiting
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Drain pending values and return the newest one, if any
    pub fn latest(&mut self) -> Option<T> {
        let mut last = None;
        while let Ok(value) = self.receiver.try_recv() {
            last = Some(value);
        }
        last
    }

    /// Release the subscription now
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            let mut shared = lock(&shared);
            shared.observers.remove(&self.id);
            tracing::debug!(
                subscription_id = %self.id,
                observers = shared.observers.len(),
                "Subscription released"
            );
        }
    }
}
