//! Core State trait for state machine states.
//!
//! A state is a unit of work that decides its own successor. States are
//! shared through [`StateRef`] handles and compared by identity, never by
//! value: two handles name the same state only when they point at the same
//! allocation.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error produced by a state's `exec`.
///
/// The machine hands it back to the caller of `run` untouched.
pub type StateError = Box<dyn Error + Send + Sync + 'static>;

/// Shared handle to a state. Identity is the allocation, see [`same_state`].
pub type StateRef<C> = Arc<dyn State<C>>;

/// Optional naming capability.
///
/// States that implement it (and expose it through [`State::as_named`]) are
/// reported to observers. Anonymous states still run and are still validated.
pub trait Named {
    /// Name used in transition notifications.
    fn name(&self) -> &str;
}

/// Trait for state machine states.
///
/// `C` is the cargo type, the payload threaded from one state to the next.
/// `exec` takes `&self`; states that need to remember anything across calls
/// use interior mutability.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{Named, State, StateError, Step};
///
/// struct Countdown;
///
/// impl State<u32> for Countdown {
///     fn exec(&self, cargo: u32) -> Result<Step<u32>, StateError> {
///         if cargo == 0 {
///             return Err("already at zero".into());
///         }
///         Ok(Step::done(cargo - 1))
///     }
///
///     fn as_named(&self) -> Option<&dyn Named> {
///         Some(self)
///     }
/// }
///
/// impl Named for Countdown {
///     fn name(&self) -> &str {
///         "Countdown"
///     }
/// }
///
/// let step = Countdown.exec(3).unwrap();
/// assert!(step.is_terminal());
/// assert_eq!(step.cargo, 2);
/// ```
pub trait State<C>: Send + Sync {
    /// Execute the state with the cargo handed over by its predecessor.
    ///
    /// Returns the successor (or none to finish the run) together with the
    /// cargo for that successor.
    fn exec(&self, cargo: C) -> Result<Step<C>, StateError>;

    /// Query the naming capability.
    ///
    /// Default implementation returns `None`, which makes the state
    /// anonymous to observers.
    fn as_named(&self) -> Option<&dyn Named> {
        None
    }
}

/// Outcome of a successful `exec`.
pub struct Step<C> {
    /// Successor state, `None` when the run should stop here.
    pub next: Option<StateRef<C>>,
    /// Cargo handed to the successor.
    pub cargo: C,
}

impl<C> Step<C> {
    /// Continue with `next`, handing it `cargo`.
    pub fn to(next: StateRef<C>, cargo: C) -> Self {
        Self {
            next: Some(next),
            cargo,
        }
    }

    /// Finish the run.
    pub fn done(cargo: C) -> Self {
        Self { next: None, cargo }
    }

    /// Check if this step ends the run.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}

impl<C: fmt::Debug> fmt::Debug for Step<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("next", &self.next.as_ref().map(|s| describe(s)))
            .field("cargo", &self.cargo)
            .finish()
    }
}

/// Identity comparison of two state handles.
///
/// Only the data address is compared, so two handles to the same value
/// coerced through different vtables still match.
pub fn same_state<C>(a: &StateRef<C>, b: &StateRef<C>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Name of a state if it exposes one.
pub fn state_name<C>(state: &StateRef<C>) -> Option<&str> {
    state.as_named().map(|n| n.name())
}

/// Human readable label: the name when there is a non-empty one, the
/// address otherwise.
pub(crate) fn describe<C>(state: &StateRef<C>) -> String {
    match state_name(state) {
        Some(name) if !name.is_empty() => format!("'{name}'"),
        _ => format!("<anonymous state at {:p}>", Arc::as_ptr(state) as *const ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Labelled(&'static str);

    impl State<()> for Labelled {
        fn exec(&self, cargo: ()) -> Result<Step<()>, StateError> {
            Ok(Step::done(cargo))
        }

        fn as_named(&self) -> Option<&dyn Named> {
            Some(self)
        }
    }

    impl Named for Labelled {
        fn name(&self) -> &str {
            self.0
        }
    }

    struct Silent;

    impl State<()> for Silent {
        fn exec(&self, cargo: ()) -> Result<Step<()>, StateError> {
            Ok(Step::done(cargo))
        }
    }

    #[test]
    fn same_state_uses_identity() {
        let a: StateRef<()> = Arc::new(Labelled("A"));
        let twin: StateRef<()> = Arc::new(Labelled("A"));
        let alias = Arc::clone(&a);

        assert!(same_state(&a, &alias));
        assert!(!same_state(&a, &twin));
    }

    #[test]
    fn zero_sized_states_are_distinct() {
        let a: StateRef<()> = Arc::new(Silent);
        let b: StateRef<()> = Arc::new(Silent);

        assert!(!same_state(&a, &b));
    }

    #[test]
    fn naming_capability_is_optional() {
        let named: StateRef<()> = Arc::new(Labelled("Ready"));
        let anonymous: StateRef<()> = Arc::new(Silent);

        assert_eq!(state_name(&named), Some("Ready"));
        assert_eq!(state_name(&anonymous), None);
    }

    #[test]
    fn describe_prefers_name() {
        let named: StateRef<()> = Arc::new(Labelled("Ready"));
        let blank: StateRef<()> = Arc::new(Labelled(""));
        let anonymous: StateRef<()> = Arc::new(Silent);

        assert_eq!(describe(&named), "'Ready'");
        assert!(describe(&blank).starts_with("<anonymous state at "));
        assert!(describe(&anonymous).starts_with("<anonymous state at "));
    }

    #[test]
    fn step_constructors() {
        let next: StateRef<()> = Arc::new(Silent);

        let step = Step::to(Arc::clone(&next), ());
        assert!(!step.is_terminal());
        assert!(same_state(step.next.as_ref().unwrap(), &next));

        assert!(Step::done(()).is_terminal());
    }
}
