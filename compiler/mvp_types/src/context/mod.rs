//! Type checking session.
//!
//! A [`Context`] owns the node pool and the variable id counter. It is the
//! only place variables are created and bound, and it provides the
//! request-level operations: [`Context::unify`] and [`Context::copy`].
//!
//! # Instantiation
//!
//! `copy` rebuilds a type with every variable occurrence replaced by a
//! fresh unbound variable. Giving each call site its own copy of a
//! function's type lets the call sites bind their variables independently,
//! which stands in for generic instantiation.

mod shared;

pub use shared::SharedContext;

use crate::stack::ensure_sufficient_stack;
use crate::{FilePos, Idx, InvariantError, Pool, RefId, TypeKind, Unifier, VarState};

/// Type checking session: node pool plus variable identity counter.
#[derive(Debug, Default)]
pub struct Context {
    pool: Pool,
    /// Id of the most recently created variable (0 before the first one).
    next_ref: u32,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get read-only access to the pool.
    #[inline]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Get mutable access to the pool (for type construction).
    #[inline]
    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    /// Number of variables created by this context.
    #[inline]
    pub fn ref_count(&self) -> u32 {
        self.next_ref
    }

    // ========================================
    // Construction
    // ========================================

    pub fn nil(&mut self, pos: FilePos) -> Idx {
        self.pool.nil(pos)
    }

    pub fn int(&mut self, pos: FilePos) -> Idx {
        self.pool.int(pos)
    }

    pub fn str(&mut self, pos: FilePos) -> Idx {
        self.pool.str(pos)
    }

    pub fn func(&mut self, pos: FilePos, params: &[Idx], result: Idx) -> Idx {
        self.pool.func(pos, params, result)
    }

    pub fn union(&mut self, pos: FilePos, alternatives: &[Idx]) -> Idx {
        self.pool.union(pos, alternatives)
    }

    /// Create a fresh unbound type variable.
    pub fn new_ref(&mut self, pos: FilePos, pred: Option<Idx>) -> Idx {
        self.next_ref += 1;
        let id = RefId::from_raw(self.next_ref);
        self.pool.register_ref(id);
        tracing::trace!(ref_id = %id, %pos, "new type variable");
        self.pool.alloc(TypeKind::Ref(id), pos, pred)
    }

    // ========================================
    // Binding
    // ========================================

    /// Bind the variable `var` to `value`.
    ///
    /// Fails if `var` is not a `Ref` node, if its variable is already bound,
    /// or if `value`'s chain of bound variables leads back to it. The cell
    /// is left untouched on failure.
    pub fn bind(&mut self, var: Idx, value: Idx) -> Result<(), InvariantError> {
        let Some(ref_id) = self.pool.ref_id(var) else {
            return Err(InvariantError::NotARef {
                idx: var,
                tag: self.pool.tag(var),
            });
        };

        if let VarState::Link { target } = self.pool.var_state(ref_id) {
            return Err(InvariantError::AlreadyBound {
                ref_id,
                target: *target,
            });
        }

        let resolved = self.pool.resolve(value)?;
        if self.pool.ref_id(resolved) == Some(ref_id) {
            return Err(InvariantError::RefCycle { ref_id });
        }

        tracing::debug!(%ref_id, %value, "bind type variable");
        *self.pool.var_state_mut(ref_id) = VarState::Link { target: value };
        Ok(())
    }

    /// Resolve a type to its current representative, stamping provenance.
    pub fn deref(&mut self, idx: Idx) -> Result<Idx, InvariantError> {
        self.pool.deref(idx)
    }

    // ========================================
    // Requests
    // ========================================

    /// Unify `a` with `b`, running to completion.
    ///
    /// Inspect [`Unifier::errors`] on the result. Bindings made during the
    /// run stay in effect whether or not errors were found.
    #[tracing::instrument(level = "debug", skip_all, fields(left = %a, right = %b))]
    pub fn unify(&mut self, a: Idx, b: Idx) -> Unifier {
        let mut unifier = Unifier::new(a, b);
        unifier.unify(self);
        unifier
    }

    /// Instantiate `x`: rebuild it with every variable freshened.
    ///
    /// - `Ref`: a new unbound variable whose `pred` is `x`. What `x` is bound
    ///   to is not copied. Every occurrence gets its own variable.
    /// - `Func`: a new function whose `pred` is `x`, with each parameter and
    ///   the result copied recursively at their own positions.
    /// - Anything else: the same node at the new position.
    ///
    /// `pos` defaults to `x`'s own position. The input is never modified.
    pub fn copy(&mut self, x: Idx, pos: Option<FilePos>) -> Idx {
        ensure_sufficient_stack(|| {
            let pos = pos.unwrap_or_else(|| self.pool.pos(x).clone());
            match self.pool.kind(x) {
                TypeKind::Ref(_) => self.new_ref(pos, Some(x)),
                TypeKind::Func { params, result } => {
                    let (params, result) = (params.clone(), *result);
                    let params: Box<[Idx]> = params.iter().map(|&p| self.copy(p, None)).collect();
                    let result = self.copy(result, None);
                    self.pool
                        .alloc(TypeKind::Func { params, result }, pos, Some(x))
                }
                TypeKind::Nil | TypeKind::Int | TypeKind::Str | TypeKind::Union { .. } => {
                    self.pool.relocate(x, pos)
                }
            }
        })
    }
}
