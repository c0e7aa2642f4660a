//! Transition history recording.
//!
//! [`HistoryRecorder`] is a ready-made observer that keeps an immutable
//! [`TransitionLog`] of every transition the machine reports.

use super::observer::Observer;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single reported transition.
///
/// `from` is empty for the entry into the start state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedTransition {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// When the notification was received
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of reported transitions.
///
/// The log is immutable - `record` returns a new log with the transition
/// appended.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{NamedTransition, TransitionLog};
/// use chrono::Utc;
///
/// let log = TransitionLog::new().record(NamedTransition {
///     from: String::new(),
///     to: "Start".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.pairs(), vec![("", "Start")]);
/// assert_eq!(log.entered(), vec!["Start"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    transitions: Vec<NamedTransition>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    pub fn record(&self, transition: NamedTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// All transitions in the order they were reported.
    pub fn transitions(&self) -> &[NamedTransition] {
        &self.transitions
    }

    /// `(from, to)` name pairs in order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.transitions
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str()))
            .collect()
    }

    /// Names of the entered states in order.
    ///
    /// Suppressed notifications leave gaps, so this is the path as observed,
    /// not necessarily every state that ran.
    pub fn entered(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.to.as_str()).collect()
    }

    /// Time between the first and the last reported transition.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Observer that records every notification into a [`TransitionLog`].
///
/// # Example
///
/// ```rust
/// use statewalk::core::{HistoryRecorder, Observer};
///
/// let recorder = HistoryRecorder::new();
/// recorder.state_changed("", "Start");
/// recorder.state_changed("Start", "End");
///
/// assert_eq!(recorder.log().entered(), vec!["Start", "End"]);
/// ```
#[derive(Debug, Default)]
pub struct HistoryRecorder {
    log: Mutex<TransitionLog>,
}

impl HistoryRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn log(&self) -> TransitionLog {
        self.log.lock().clone()
    }

    /// Take the recorded log, leaving an empty one behind.
    pub fn take(&self) -> TransitionLog {
        std::mem::take(&mut *self.log.lock())
    }
}

impl Observer for HistoryRecorder {
    fn state_changed(&self, prior: &str, next: &str) {
        let mut log = self.log.lock();
        *log = log.record(NamedTransition {
            from: prior.to_string(),
            to: next.to_string(),
            timestamp: Utc::now(),
        });
    }
}
