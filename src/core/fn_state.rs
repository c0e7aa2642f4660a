//! Closure-backed states.
//!
//! `FnState` wraps a plain function so small machines can be wired without
//! a struct per state.

use super::state::{Named, State, StateError, Step};

type ExecFn<C> = Box<dyn Fn(C) -> Result<Step<C>, StateError> + Send + Sync>;

/// State whose `exec` is a boxed closure.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{FnState, State, StateRef, Step};
/// use std::sync::Arc;
///
/// let done: StateRef<i32> = Arc::new(FnState::named("Done", |n: i32| Ok(Step::done(n))));
///
/// let next = Arc::clone(&done);
/// let double: StateRef<i32> =
///     Arc::new(FnState::named("Double", move |n: i32| Ok(Step::to(Arc::clone(&next), n * 2))));
///
/// let step = double.exec(21).unwrap();
/// assert_eq!(step.cargo, 42);
/// ```
pub struct FnState<C> {
    name: Option<String>,
    exec: ExecFn<C>,
}

impl<C> FnState<C> {
    /// Create an anonymous state from a closure.
    ///
    /// Anonymous states run like any other but are never reported as the
    /// target of a transition.
    pub fn new<F>(exec: F) -> Self
    where
        F: Fn(C) -> Result<Step<C>, StateError> + Send + Sync + 'static,
    {
        FnState {
            name: None,
            exec: Box::new(exec),
        }
    }

    /// Create a named state from a closure.
    pub fn named<F>(name: impl Into<String>, exec: F) -> Self
    where
        F: Fn(C) -> Result<Step<C>, StateError> + Send + Sync + 'static,
    {
        FnState {
            name: Some(name.into()),
            exec: Box::new(exec),
        }
    }
}

impl<C> State<C> for FnState<C> {
    fn exec(&self, cargo: C) -> Result<Step<C>, StateError> {
        (self.exec)(cargo)
    }

    fn as_named(&self) -> Option<&dyn Named> {
        self.name.as_ref().map(|_| self as &dyn Named)
    }
}

impl<C> Named for FnState<C> {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{same_state, state_name, StateRef};
    use std::sync::Arc;

    #[test]
    fn named_closure_exposes_name() {
        let state: StateRef<()> = Arc::new(FnState::named("Idle", |c| Ok(Step::done(c))));

        assert_eq!(state_name(&state), Some("Idle"));
    }

    #[test]
    fn anonymous_closure_has_no_name() {
        let state: StateRef<()> = Arc::new(FnState::new(|c| Ok(Step::done(c))));

        assert_eq!(state_name(&state), None);
    }

    #[test]
    fn closure_decides_successor() {
        let even: StateRef<u8> = Arc::new(FnState::named("Even", |n| Ok(Step::done(n))));
        let odd: StateRef<u8> = Arc::new(FnState::named("Odd", |n| Ok(Step::done(n))));

        let (e, o) = (Arc::clone(&even), Arc::clone(&odd));
        let split: StateRef<u8> = Arc::new(FnState::new(move |n: u8| {
            let next = if n % 2 == 0 { &e } else { &o };
            Ok(Step::to(Arc::clone(next), n))
        }));

        let step = split.exec(4).unwrap();
        assert!(same_state(step.next.as_ref().unwrap(), &even));

        let step = split.exec(7).unwrap();
        assert!(same_state(step.next.as_ref().unwrap(), &odd));
    }

    #[test]
    fn closure_errors_pass_through() {
        let state: StateRef<()> = Arc::new(FnState::new(|_: ()| Err("boom".into())));

        let err = state.exec(()).err().unwrap();
        assert_eq!(err.to_string(), "boom");
    }
}
