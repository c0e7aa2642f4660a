//! Observer registry and the notification protocol.

use crate::core::{same_observer, ObserverRef, StateRef};
use parking_lot::RwLock;
use tracing::trace;

/// Lock-protected list of observers owned by one machine.
///
/// Every access, including the walk during notification, takes the write
/// side of the lock, so registration and removal never interleave with a
/// notification in flight.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<Vec<ObserverRef>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append observers in order. Duplicates are kept.
    pub fn register<I>(&self, observers: I)
    where
        I: IntoIterator<Item = ObserverRef>,
    {
        let mut list = self.observers.write();
        let before = list.len();
        list.extend(observers);
        trace!(added = list.len() - before, total = list.len(), "registered observers");
    }

    /// Remove the first entry that is `observer` by identity.
    ///
    /// The last entry takes the removed slot, so the order of the remaining
    /// observers is not preserved. Unknown observers are ignored.
    pub fn remove(&self, observer: &ObserverRef) {
        let mut list = self.observers.write();
        if let Some(index) = list.iter().position(|o| same_observer(o, observer)) {
            list.swap_remove(index);
            trace!(index, total = list.len(), "removed observer");
        }
    }

    /// Report the move from `prior` into `next` to every observer.
    ///
    /// Transitions into an anonymous state are not reported. When `prior`
    /// exists but is anonymous, the whole call stops at the first observer,
    /// so no observer hears about that transition.
    pub fn notify<C>(&self, prior: Option<&StateRef<C>>, next: &StateRef<C>) {
        let list = self.observers.write();

        for observer in list.iter() {
            let next_name = next.as_named().map(|n| n.name()).unwrap_or_default();
            let prior_name = match prior {
                None => "",
                Some(state) => match state.as_named() {
                    Some(named) => named.name(),
                    None => {
                        trace!("prior state is anonymous, notification suppressed");
                        return;
                    }
                },
            };

            if !next_name.is_empty() {
                observer.state_changed(prior_name, next_name);
            }
        }
    }

    /// Number of registered observers, duplicates included.
    pub fn len(&self) -> usize {
        self.observers.write().len()
    }

    /// Check if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
