//! Thread-safe handle to a [`Context`].
//!
//! Unification mutates variable cells that any tree in the context may
//! observe, so a context admits one session at a time. Callers that share
//! a context across threads go through this handle, which serializes every
//! request behind a single lock.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::Context;

/// Shared, lock-protected context.
#[derive(Clone, Default)]
pub struct SharedContext(Arc<Mutex<Context>>);

impl SharedContext {
    pub fn new(ctx: Context) -> Self {
        Self(Arc::new(Mutex::new(ctx)))
    }

    /// Lock the context for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, Context> {
        self.0.lock()
    }

    /// Run `f` with exclusive access to the context.
    pub fn with<R>(&self, f: impl FnOnce(&mut Context) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl std::fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedContext").finish_non_exhaustive()
    }
}
