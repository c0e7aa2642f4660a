//! Builder for constructing state machines.

use crate::core::{ObserverRef, StateRef};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Every state that may be chosen as a successor has to be registered here
/// (or later with [`StateMachine::add_state`]).
///
/// # Example
///
/// ```rust
/// use statewalk::builder::StateMachineBuilder;
/// use statewalk::core::{FnState, HistoryRecorder, ObserverRef, StateRef, Step};
/// use std::sync::Arc;
///
/// let end: StateRef<()> = Arc::new(FnState::named("End", |c: ()| Ok(Step::done(c))));
/// let recorder = Arc::new(HistoryRecorder::new());
///
/// let machine = StateMachineBuilder::new()
///     .state(Arc::clone(&end))
///     .observer(recorder.clone() as ObserverRef)
///     .build();
///
/// machine.run((), &end).unwrap();
/// assert_eq!(recorder.log().entered(), vec!["End"]);
/// ```
pub struct StateMachineBuilder<C> {
    states: Vec<StateRef<C>>,
    observers: Vec<ObserverRef>,
}

impl<C> StateMachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Register a state.
    pub fn state(mut self, state: StateRef<C>) -> Self {
        self.states.push(state);
        self
    }

    /// Register several states at once, keeping their order.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = StateRef<C>>,
    {
        self.states.extend(states);
        self
    }

    /// Register an observer.
    pub fn observer(mut self, observer: ObserverRef) -> Self {
        self.observers.push(observer);
        self
    }

    /// Register several observers at once, keeping their order.
    pub fn observers<I>(mut self, observers: I) -> Self
    where
        I: IntoIterator<Item = ObserverRef>,
    {
        self.observers.extend(observers);
        self
    }

    /// Build the state machine.
    pub fn build(self) -> StateMachine<C> {
        let mut machine = StateMachine::new();
        for state in self.states {
            machine.add_state(state);
        }
        machine.register_observers(self.observers);
        machine
    }
}

impl<C> Default for StateMachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
