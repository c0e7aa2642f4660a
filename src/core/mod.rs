//! Core state machine types.
//!
//! This module contains the contracts the machine consumes and exposes:
//! - States via the `State` trait, with naming as a separate `Named` capability
//! - Observers via the `Observer` trait
//! - Closure adapters and a history-recording observer

mod fn_state;
mod history;
mod observer;
mod state;

pub use fn_state::FnState;
pub use history::{HistoryRecorder, NamedTransition, TransitionLog};
pub use observer::{same_observer, FnObserver, Observer, ObserverRef};
pub(crate) use state::describe;
pub use state::{same_state, state_name, Named, State, StateError, StateRef, Step};
