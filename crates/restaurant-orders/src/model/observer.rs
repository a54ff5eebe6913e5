//! Order notification contracts.
//!
//! An [`OrderSubject`] (in practice an [`Order`](crate::model::Order)) keeps a set of
//! [`OrderObserver`]s and tells each of them "order X changed". The subject never learns
//! what an observer does with that; the kitchen, a test recorder or anything else can
//! sit behind the trait.

use crate::model::OrderId;
use std::fmt::{self, Debug};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors an observer can report back from a delivery.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ObserverError {
    /// Whatever the observer forwards to is gone.
    #[error("observer disconnected")]
    Disconnected,

    /// The observer rejected or failed to handle the notification.
    #[error("observer failed: {0}")]
    Failed(String),
}

/// Something that wants to hear about order changes.
///
/// `update` is called synchronously on the notifying task, while the order is being
/// mutated, so implementations must return quickly and must not call back into the
/// order store. Hand the id off (e.g. over a channel) instead.
pub trait OrderObserver: Send + Sync + Debug {
    fn update(&self, order_id: OrderId) -> Result<(), ObserverError>;
}

/// A shared handle to an observer. Identity is the pointed-to allocation.
pub type SharedObserver = Arc<dyn OrderObserver>;

/// Something observers can attach to.
pub trait OrderSubject {
    /// Registers `observer`. Attaching the same observer twice has no effect.
    fn attach(&mut self, observer: SharedObserver);

    /// Unregisters `observer`. Detaching an unknown observer has no effect.
    fn detach(&mut self, observer: &SharedObserver);

    /// Delivers one notification to every attached observer.
    fn notify(&self);
}

/// A deduplicated, ordered set of observers, keyed by allocation address.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<SharedObserver>,
}

fn same_observer(a: &SharedObserver, b: &SharedObserver) -> bool {
    // Compare data addresses only; vtable pointers for one type can differ.
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `observer` was already present.
    pub fn insert(&mut self, observer: SharedObserver) -> bool {
        if self.contains(&observer) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Returns `false` if `observer` was not present.
    pub fn remove(&mut self, observer: &SharedObserver) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        self.observers.len() != before
    }

    pub fn contains(&self, observer: &SharedObserver) -> bool {
        self.observers.iter().any(|o| same_observer(o, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers `order_id` to every observer and returns how many accepted it.
    ///
    /// A failing observer is logged and skipped; the rest still get the notification.
    pub fn deliver(&self, order_id: OrderId) -> usize {
        let mut delivered = 0;
        for observer in &self.observers {
            match observer.update(order_id) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(%order_id, ?observer, error = %e, "Observer failed"),
            }
        }
        delivered
    }
}

impl Debug for ObserverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorder {
        seen: Mutex<Vec<OrderId>>,
    }

    impl OrderObserver for Recorder {
        fn update(&self, order_id: OrderId) -> Result<(), ObserverError> {
            self.seen.lock().unwrap().push(order_id);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl OrderObserver for Broken {
        fn update(&self, _order_id: OrderId) -> Result<(), ObserverError> {
            Err(ObserverError::Failed("display offline".into()))
        }
    }

    #[test]
    fn test_insert_is_deduplicated_by_identity() {
        let a: SharedObserver = Arc::new(Recorder::default());
        let b: SharedObserver = Arc::new(Recorder::default());
        let mut set = ObserverSet::new();

        assert!(set.insert(a.clone()));
        assert!(!set.insert(a.clone()));
        assert!(set.insert(b.clone()));
        assert_eq!(set.len(), 2);

        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert!(set.contains(&b));
    }

    #[test]
    fn test_failing_observer_does_not_block_others() {
        let recorder = Arc::new(Recorder::default());
        let mut set = ObserverSet::new();
        set.insert(Arc::new(Broken));
        set.insert(recorder.clone());

        let order_id = OrderId::new();
        assert_eq!(set.deliver(order_id), 1);
        assert_eq!(*recorder.seen.lock().unwrap(), vec![order_id]);
    }
}
