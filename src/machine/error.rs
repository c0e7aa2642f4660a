//! Run errors.

use crate::core::StateError;
use std::error::Error;
use thiserror::Error;

/// Errors that end a run. Both kinds are fatal; the run cannot be resumed.
#[derive(Debug, Error)]
pub enum RunError {
    /// A state's `exec` failed. The state's error is carried as-is.
    #[error(transparent)]
    Exec(StateError),

    /// A state chose a successor that was never added to the machine.
    #[error("invalid target state {state}")]
    UnregisteredTarget { state: String },
}

impl RunError {
    /// The error returned by the failing state, if that is what ended the run.
    pub fn exec_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Exec(err) => Some(err.as_ref()),
            Self::UnregisteredTarget { .. } => None,
        }
    }

    /// Unwrap into the failing state's error.
    pub fn into_exec_error(self) -> Option<StateError> {
        match self {
            Self::Exec(err) => Some(err),
            Self::UnregisteredTarget { .. } => None,
        }
    }
}
