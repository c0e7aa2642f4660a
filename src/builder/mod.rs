//! Builder API for ergonomic state machine construction.

pub mod machine;

pub use machine::StateMachineBuilder;
