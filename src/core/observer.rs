//! Observer contract for transition notifications.

use std::sync::Arc;

/// Shared handle to an observer. Removal matches by identity.
pub type ObserverRef = Arc<dyn Observer>;

/// Listener notified synchronously whenever the machine enters a named state.
///
/// `prior` is empty when `next` is the start state of a run. Callbacks run
/// while the machine holds its observer lock, so an observer must not
/// register or remove observers on the machine that is notifying it.
pub trait Observer: Send + Sync {
    /// Called with the names of the state being left and the state being entered.
    fn state_changed(&self, prior: &str, next: &str);
}

/// Observer backed by a closure.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{FnObserver, Observer};
///
/// let observer = FnObserver::new(|prior, next| println!("{prior} -> {next}"));
/// observer.state_changed("", "Start");
/// ```
pub struct FnObserver {
    callback: Box<dyn Fn(&str, &str) + Send + Sync>,
}

impl FnObserver {
    /// Wrap a closure taking `(prior, next)` names.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl Observer for FnObserver {
    fn state_changed(&self, prior: &str, next: &str) {
        (self.callback)(prior, next)
    }
}

/// Identity comparison of two observer handles.
pub fn same_observer(a: &ObserverRef, b: &ObserverRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
