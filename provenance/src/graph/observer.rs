//! Observer registry: callbacks fired when watched state fields change.
//!
//! Field paths are dotted names (`selected`, `layout.mode`) resolved against the
//! JSON form of the state, so container fields compare structurally.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::logging;

/// Error returned by an observer callback.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Observer callback; receives the new current state.
pub type ObserverCallback<S> = Box<dyn FnMut(&S) -> Result<(), ObserverError> + Send>;

/// Handle of a registered observer, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Dotted path to a state field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    path: String,
    pointer: String,
}

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let mut pointer = String::new();
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            pointer.push('/');
            pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        }
        Self { path, pointer }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Value at this path, `None` when absent.
    pub fn lookup<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        root.pointer(&self.pointer)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// One callback failure from a notification pass.
#[derive(Debug)]
pub struct ObserverFailure {
    pub observer: ObserverId,
    pub error: ObserverError,
}

struct Registration<S> {
    paths: Vec<FieldPath>,
    callback: ObserverCallback<S>,
}

/// Registered observers, notified in registration order.
pub struct ObserverRegistry<S> {
    observers: Vec<Registration<S>>,
}

impl<S> Default for ObserverRegistry<S> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<S> ObserverRegistry<S>
where
    S: Serialize,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Registers `callback` for `paths`; duplicate paths are collapsed.
    pub fn add<P, F>(&mut self, paths: P, callback: F) -> ObserverId
    where
        P: IntoIterator,
        P::Item: Into<FieldPath>,
        F: FnMut(&S) -> Result<(), ObserverError> + Send + 'static,
    {
        let mut unique: Vec<FieldPath> = Vec::new();
        for p in paths {
            let p = p.into();
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        let id = ObserverId(self.observers.len());
        self.observers.push(Registration {
            paths: unique,
            callback: Box::new(callback),
        });
        id
    }

    /// Calls every observer with a watched field that differs between `previous` and `current`.
    ///
    /// A failing callback does not stop the pass; failures are logged and returned.
    pub fn notify(&mut self, previous: &S, current: &S) -> Vec<ObserverFailure> {
        let mut failures = Vec::new();
        if self.observers.is_empty() {
            return failures;
        }
        let values = match (serde_json::to_value(previous), serde_json::to_value(current)) {
            (Ok(prev), Ok(next)) => Some((prev, next)),
            (Err(e), _) | (_, Err(e)) => {
                logging::log_state_unreadable(&e);
                None
            }
        };
        for (i, registration) in self.observers.iter_mut().enumerate() {
            let changed = match &values {
                Some((prev, next)) => registration
                    .paths
                    .iter()
                    .any(|p| p.lookup(prev) != p.lookup(next)),
                None => true,
            };
            if !changed {
                continue;
            }
            if let Err(error) = (registration.callback)(current) {
                logging::log_observer_failure(i, error.as_ref());
                failures.push(ObserverFailure {
                    observer: ObserverId(i),
                    error,
                });
            }
        }
        failures
    }
}
