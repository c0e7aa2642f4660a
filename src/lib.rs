//! Statewalk: a minimal finite state machine runtime
//!
//! A machine holds a registry of states and walks from a start state to a
//! terminal state. There is no transition table: every state decides its own
//! successor while it executes, and the machine only checks that the chosen
//! successor was registered. Observers are told about each transition into a
//! named state.
//!
//! # Core Concepts
//!
//! - **State**: unit of work implementing the `State` trait, identified by
//!   its `Arc` allocation rather than by value
//! - **Named**: optional capability that makes a state visible to observers
//! - **Cargo**: payload of any type moved from each state to its successor
//! - **Observer**: listener receiving `(prior, next)` names on every reported
//!   transition
//!
//! # Example
//!
//! ```rust
//! use statewalk::builder::StateMachineBuilder;
//! use statewalk::core::{FnState, HistoryRecorder, ObserverRef, StateRef, Step};
//! use std::sync::Arc;
//!
//! let done: StateRef<u32> = Arc::new(FnState::named("Done", |n: u32| Ok(Step::done(n))));
//!
//! let to_done = Arc::clone(&done);
//! let count: StateRef<u32> = Arc::new(FnState::named("Count", move |n: u32| {
//!     Ok(Step::to(Arc::clone(&to_done), n + 1))
//! }));
//!
//! let recorder = Arc::new(HistoryRecorder::new());
//! let machine = StateMachineBuilder::new()
//!     .states([Arc::clone(&count), Arc::clone(&done)])
//!     .observer(recorder.clone() as ObserverRef)
//!     .build();
//!
//! machine.run(0, &count).unwrap();
//!
//! assert_eq!(recorder.log().pairs(), vec![("", "Count"), ("Count", "Done")]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Named, Observer, ObserverRef, State, StateError, StateRef, Step};
pub use machine::{RunError, StateMachine};
