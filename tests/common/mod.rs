//! Scripted states shared by the integration tests.

#![allow(dead_code)]

use parking_lot::Mutex;
use statewalk::{Named, State, StateError, StateRef, Step};
use std::sync::Arc;

/// Cargo used by the scripted states; `None` mirrors "nothing handed over".
pub type Cargo = Option<i32>;

/// What a scripted state does when executed, and what it saw.
#[derive(Default)]
pub struct Script {
    pub next: Option<StateRef<Cargo>>,
    pub cargo: Cargo,
    pub error: Option<String>,
    pub received: Mutex<Option<Cargo>>,
}

impl Script {
    fn exec(&self, cargo: Cargo) -> Result<Step<Cargo>, StateError> {
        *self.received.lock() = Some(cargo);
        if let Some(message) = &self.error {
            return Err(Box::new(ScriptError(message.clone())));
        }
        Ok(Step {
            next: self.next.clone(),
            cargo: self.cargo,
        })
    }

    pub fn ran(&self) -> bool {
        self.received.lock().is_some()
    }

    pub fn received(&self) -> Cargo {
        self.received.lock().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ScriptError(pub String);

/// Scripted state exposing the naming capability.
pub struct NamedStub {
    pub name: String,
    pub script: Script,
}

impl State<Cargo> for NamedStub {
    fn exec(&self, cargo: Cargo) -> Result<Step<Cargo>, StateError> {
        self.script.exec(cargo)
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }
}

impl Named for NamedStub {
    fn name(&self) -> &str {
        &self.name
    }
}

impl std::ops::Deref for NamedStub {
    type Target = Script;

    fn deref(&self) -> &Script {
        &self.script
    }
}

/// Scripted state without the naming capability.
pub struct AnonymousStub {
    pub script: Script,
}

impl State<Cargo> for AnonymousStub {
    fn exec(&self, cargo: Cargo) -> Result<Step<Cargo>, StateError> {
        self.script.exec(cargo)
    }
}

impl std::ops::Deref for AnonymousStub {
    type Target = Script;

    fn deref(&self) -> &Script {
        &self.script
    }
}

pub fn named(name: &str) -> Arc<NamedStub> {
    named_with(name, Script::default())
}

pub fn named_to(name: &str, next: StateRef<Cargo>, cargo: Cargo) -> Arc<NamedStub> {
    named_with(
        name,
        Script {
            next: Some(next),
            cargo,
            ..Script::default()
        },
    )
}

pub fn named_with(name: &str, script: Script) -> Arc<NamedStub> {
    Arc::new(NamedStub {
        name: name.to_string(),
        script,
    })
}

pub fn anonymous_to(next: StateRef<Cargo>, cargo: Cargo) -> Arc<AnonymousStub> {
    anonymous_with(Script {
        next: Some(next),
        cargo,
        ..Script::default()
    })
}

/// Type-erase a state handle.
pub fn handle<S: State<Cargo> + 'static>(state: &Arc<S>) -> StateRef<Cargo> {
    state.clone()
}

pub fn anonymous_with(script: Script) -> Arc<AnonymousStub> {
    Arc::new(AnonymousStub { script })
}
