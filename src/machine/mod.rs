//! The state machine driver.
//!
//! # Key Concepts
//!
//! - **Registry**: the states a run may move into, compared by identity
//! - **Traversal**: each state decides its successor while it executes
//! - **Observers**: listeners told about every transition into a named state

mod driver;
mod error;
mod observers;

pub use driver::StateMachine;
pub use error::RunError;
pub use observers::ObserverRegistry;
