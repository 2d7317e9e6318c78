//! Mount gate.
//!
//! A server-rendered shell and the hydrated client can disagree about the
//! document (stored preferences, injected elements). Anything that touches the
//! document waits until the component's first render has committed on the
//! client. The gate starts closed, opens once, and never closes again.
//!
//! `MountGate` owns the capability it guards: the only way to reach it is
//! [`MountGate::with`], which does nothing while the gate is closed.

use std::cell::Cell;

pub struct MountGate<T> {
    inner: T,
    open: Cell<bool>,
}

impl<T> MountGate<T> {
    /// A closed gate around `inner`.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            open: Cell::new(false),
        }
    }

    /// Open the gate. Idempotent.
    pub fn open(&self) {
        if !self.open.replace(true) {
            tracing::trace!("mount gate opened");
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Run `f` against the guarded value if the gate is open.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        if self.open.get() {
            Some(f(&self.inner))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentAdapter, MemoryDocument};

    #[test]
    fn closed_gate_blocks_access() {
        let doc = MemoryDocument::new();
        let gate = MountGate::new(doc.clone());

        let ran = gate.with(|d| d.add_root_class("light"));
        assert!(ran.is_none());
        assert!(!gate.is_open());
        assert_eq!(doc.mutation_count(), 0);
    }

    #[test]
    fn open_is_permanent_and_idempotent() {
        let gate = MountGate::new(1u8);
        gate.open();
        gate.open();
        assert!(gate.is_open());
        assert_eq!(gate.with(|v| *v + 1), Some(2));
    }
}
