//! State machine driver: the state registry and the traversal loop.

use crate::core::{describe, same_state, ObserverRef, StateRef};
use crate::machine::error::RunError;
use crate::machine::observers::ObserverRegistry;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Walks from a start state to a terminal state, letting each state pick its
/// successor.
///
/// `C` is the cargo type threaded between states.
pub struct StateMachine<C> {
    states: Vec<StateRef<C>>,
    observers: ObserverRegistry,
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> StateMachine<C> {
    /// Create a machine with no states and no observers
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Add a state to the registry.
    ///
    /// Only registered states may be chosen as a successor. The same state
    /// may be added more than once.
    pub fn add_state(&mut self, state: StateRef<C>) {
        self.states.push(state);
    }

    /// Registered states in insertion order
    pub fn states(&self) -> &[StateRef<C>] {
        &self.states
    }

    /// Check whether this exact state (by identity) is registered
    pub fn contains(&self, state: &StateRef<C>) -> bool {
        self.states.iter().any(|s| same_state(s, state))
    }

    /// Register observers; they are notified in registration order.
    pub fn register_observers<I>(&self, observers: I)
    where
        I: IntoIterator<Item = ObserverRef>,
    {
        self.observers.register(observers);
    }

    /// Stop notifying `observer`. Unknown observers are ignored.
    pub fn remove_observer(&self, observer: &ObserverRef) {
        self.observers.remove(observer);
    }

    /// Number of registered observers
    pub fn observers(&self) -> usize {
        self.observers.len()
    }

    /// Notify observers of the move from `prior` into `next`.
    ///
    /// See [`ObserverRegistry::notify`] for which transitions are reported.
    pub fn notify_state(&self, prior: Option<&StateRef<C>>, next: &StateRef<C>) {
        self.observers.notify(prior, next);
    }

    /// Run the machine from `start` with the given cargo.
    ///
    /// Each iteration announces the state about to run, executes it and
    /// follows the successor it returns. The run ends successfully when a
    /// state returns no successor. It fails as soon as a state returns an
    /// error, or names a successor that was never added with
    /// [`add_state`](Self::add_state).
    ///
    /// There is no step limit: states that keep returning successors keep
    /// the machine running.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::core::{FnState, StateRef, Step};
    /// use statewalk::StateMachine;
    /// use std::sync::Arc;
    ///
    /// let end: StateRef<u32> = Arc::new(FnState::named("End", |n: u32| Ok(Step::done(n))));
    /// let next = Arc::clone(&end);
    /// let start: StateRef<u32> =
    ///     Arc::new(FnState::named("Start", move |n: u32| Ok(Step::to(Arc::clone(&next), n + 1))));
    ///
    /// let mut machine = StateMachine::new();
    /// machine.add_state(Arc::clone(&start));
    /// machine.add_state(end);
    ///
    /// machine.run(0, &start).unwrap();
    /// ```
    pub fn run(&self, cargo: C, start: &StateRef<C>) -> Result<(), RunError> {
        debug!(states = self.states.len(), start = %describe(start), "starting run");

        let mut cargo = cargo;
        let mut current = Arc::clone(start);
        let mut prior: Option<StateRef<C>> = None;
        let mut steps: usize = 0;

        loop {
            self.notify_state(prior.as_ref(), &current);

            trace!(state = %describe(&current), step = steps, "executing state");
            let step = current.exec(cargo).map_err(|err| {
                debug!(state = %describe(&current), error = %err, "state execution failed");
                RunError::Exec(err)
            })?;
            steps += 1;

            let Some(next) = step.next else {
                debug!(steps, "run completed");
                return Ok(());
            };

            if !self.contains(&next) {
                let state = describe(&next);
                warn!(from = %describe(&current), to = %state, "transition to unregistered state");
                return Err(RunError::UnregisteredTarget { state });
            }

            cargo = step.cargo;
            prior = Some(current);
            current = next;
        }
    }
}
