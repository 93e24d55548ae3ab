//! Dereferencing bound type variables.
//!
//! [`Pool::deref`] follows bound variables to the type they currently
//! stand for. Every hop allocates a copy of the bound value whose `pred`
//! is the variable node just followed, so the result carries the trail of
//! variables it was reached through. The bound values themselves are never
//! touched, which keeps repeated dereferences of the same variable
//! independently attributable.
//!
//! [`Pool::resolve`] follows the same links without allocating.

use crate::{Idx, InvariantError, Pool};

impl Pool {
    /// Resolve `idx` to its representative node, stamping provenance.
    ///
    /// Returns a concrete node or an unbound `Ref` node. A value chain that
    /// loops back on itself fails with [`InvariantError::RefCycle`].
    pub fn deref(&mut self, idx: Idx) -> Result<Idx, InvariantError> {
        let mut current = idx;
        let mut hops = 0;
        while let Some(target) = self.link_target(current) {
            hops += 1;
            self.check_hops(current, hops)?;
            current = self.derive(target, current);
        }
        Ok(current)
    }

    /// Resolve without allocating (for read-only queries).
    ///
    /// Returns the bound value node itself, whose `pred` is not updated.
    pub fn resolve(&self, idx: Idx) -> Result<Idx, InvariantError> {
        let mut current = idx;
        let mut hops = 0;
        while let Some(target) = self.link_target(current) {
            hops += 1;
            self.check_hops(current, hops)?;
            current = target;
        }
        Ok(current)
    }

    /// An acyclic chain visits each variable at most once.
    fn check_hops(&self, current: Idx, hops: usize) -> Result<(), InvariantError> {
        if hops <= self.ref_count() {
            return Ok(());
        }
        match self.ref_id(current) {
            Some(ref_id) => {
                tracing::error!(%ref_id, "reference cycle while dereferencing");
                Err(InvariantError::RefCycle { ref_id })
            }
            None => Ok(()),
        }
    }

    /// Walk the `pred` links of `idx`, starting with its predecessor.
    pub fn provenance(&self, idx: Idx) -> Provenance<'_> {
        Provenance {
            pool: self,
            next: self.pred(idx),
        }
    }
}

/// Iterator over a node's predecessors, nearest first.
pub struct Provenance<'pool> {
    pool: &'pool Pool,
    next: Option<Idx>,
}

impl Iterator for Provenance<'_> {
    type Item = Idx;

    fn next(&mut self) -> Option<Idx> {
        let current = self.next?;
        self.next = self.pool.pred(current);
        Some(current)
    }
}
