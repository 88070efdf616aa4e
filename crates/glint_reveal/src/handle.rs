//! Binding handles

use crate::engine::{BindingId, EngineInner};
use std::sync::{Mutex, Weak};

/// Owner-side handle to an armed reveal binding.
///
/// Held by the mounting section and cancelled when it unmounts before the
/// entrance played. Cancellation detaches the watch and abandons any
/// in-flight transition in place; it never rewinds the target.
#[derive(Debug)]
pub struct RevealHandle {
    engine: Weak<Mutex<EngineInner>>,
    binding: BindingId,
}

impl RevealHandle {
    pub(crate) fn new(engine: Weak<Mutex<EngineInner>>, binding: BindingId) -> Self {
        Self { engine, binding }
    }

    /// Detach the binding. Safe to call any number of times, and after the
    /// engine itself is gone.
    pub fn cancel(&self) {
        if let Some(inner) = self.engine.upgrade() {
            inner.lock().unwrap().cancel(self.binding);
        }
    }

    /// Whether the binding still exists in the engine (it is removed by
    /// `cancel`, not by firing)
    pub fn is_bound(&self) -> bool {
        self.engine
            .upgrade()
            .is_some_and(|inner| inner.lock().unwrap().is_bound(self.binding))
    }

    /// Whether the binding's one shot has been spent
    pub fn has_fired(&self) -> bool {
        self.engine
            .upgrade()
            .is_some_and(|inner| inner.lock().unwrap().has_fired(self.binding))
    }
}
