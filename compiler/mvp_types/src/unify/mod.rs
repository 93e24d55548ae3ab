//! Worklist type unification.
//!
//! A [`Unifier`] reconciles two type trees. Pending pairs sit on a LIFO
//! worklist seeded with the starting pair; each step dereferences both
//! sides, binds variables, or compares shapes and pushes sub-pairs.
//!
//! # Error recovery
//!
//! Mismatches never stop a run. Each conflict becomes a [`UnifyError`]
//! appended to the unifier's list and the worklist keeps draining, so all
//! reconcilable structure is still visited and bindings made before a
//! conflict stay in effect.
//!
//! # Binding direction
//!
//! - A variable against a non-variable: the variable is bound.
//! - Two distinct variables: the newer one (higher id) is bound to the
//!   older one. The outcome does not depend on argument order.
//!
//! # Functions
//!
//! Only parameters are unified, front aligned. A parameter count mismatch
//! is reported and the overlapping prefix is still checked. Result types
//! are not compared.
//!
//! # Usage
//!
//! ```ignore
//! let mut ctx = Context::new();
//! let var = ctx.new_ref(FilePos::new(1, "x"), None);
//! let int = ctx.int(FilePos::builtin());
//!
//! let unifier = ctx.unify(var, int);
//! assert!(!unifier.has_errors());
//! ```

mod error;

pub use error::{ErrorKind, UnifyError};

use crate::{Context, FilePos, Idx, Tag};

/// The unification engine for one pair of types.
#[derive(Clone, Debug)]
pub struct Unifier {
    /// The pair this unifier was created for.
    start: (Idx, Idx),
    /// Pending pairs; the last pushed is processed first.
    stack: Vec<(Idx, Idx)>,
    /// Accumulated errors, in discovery order.
    errors: Vec<UnifyError>,
}

impl Unifier {
    /// Create a unifier for `a` and `b`. Nothing runs until [`Unifier::unify`].
    pub fn new(a: Idx, b: Idx) -> Self {
        Self {
            start: (a, b),
            stack: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// The pair this unifier reconciles.
    #[inline]
    pub fn start(&self) -> (Idx, Idx) {
        self.start
    }

    /// Get accumulated errors.
    #[inline]
    pub fn errors(&self) -> &[UnifyError] {
        &self.errors
    }

    /// Check if any errors occurred.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take accumulated errors, leaving an empty vector.
    pub fn take_errors(&mut self) -> Vec<UnifyError> {
        std::mem::take(&mut self.errors)
    }

    /// Run to completion.
    ///
    /// Restarts from the starting pair and clears previous errors, so
    /// running again re-checks the pair against the current bindings.
    pub fn unify(&mut self, ctx: &mut Context) -> &mut Self {
        self.stack.clear();
        self.errors.clear();
        self.stack.push(self.start);

        let mut steps = 0usize;
        while let Some((a, b)) = self.stack.pop() {
            steps += 1;
            self.unify_step(ctx, a, b);
        }

        tracing::debug!(
            steps,
            errors = self.errors.len(),
            "unification finished"
        );
        self
    }

    /// A fresh, not yet run unifier over instantiations of both starting
    /// types. See [`Context::copy`].
    pub fn instantiate(&self, ctx: &mut Context, pos: Option<&FilePos>) -> Unifier {
        let (a, b) = self.start;
        let a = ctx.copy(a, pos.cloned());
        let b = ctx.copy(b, pos.cloned());
        Unifier::new(a, b)
    }

    /// Process one pair.
    pub fn unify_step(&mut self, ctx: &mut Context, a: Idx, b: Idx) {
        tracing::trace!(left = %a, right = %b, "unify step");

        let (a, b) = match (ctx.deref(a), ctx.deref(b)) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(%err, "dereference failed during unification");
                self.error(ErrorKind::Internal, a, b);
                return;
            }
        };

        let pool = ctx.pool();
        match (pool.ref_id(a), pool.ref_id(b)) {
            (Some(_), None) => self.bind(ctx, a, b),
            (None, Some(_)) => self.bind(ctx, b, a),
            (Some(id_a), Some(id_b)) => {
                if id_a == id_b {
                    return;
                }
                // Newer variable points at the older one.
                if id_a < id_b {
                    self.bind(ctx, b, a);
                } else {
                    self.bind(ctx, a, b);
                }
            }
            (None, None) => self.unify_structural(ctx, a, b),
        }
    }

    /// Bind a variable through the context's binding rule.
    pub(crate) fn bind(&mut self, ctx: &mut Context, var: Idx, value: Idx) {
        if let Err(err) = ctx.bind(var, value) {
            tracing::error!(%err, "binding rejected during unification");
            self.error(ErrorKind::Internal, var, value);
        }
    }

    /// Compare two dereferenced, non-variable nodes.
    fn unify_structural(&mut self, ctx: &mut Context, a: Idx, b: Idx) {
        let tag_a = ctx.pool().tag(a);
        let tag_b = ctx.pool().tag(b);

        if tag_a != tag_b {
            self.error(ErrorKind::Different, a, b);
            return;
        }

        match tag_a {
            // Same tag means equal
            Tag::Nil | Tag::Int | Tag::Str => {}

            Tag::Func => self.unify_params(ctx, a, b),

            // No rule for unions; refs never reach here
            Tag::Union | Tag::Ref => self.error(ErrorKind::Unknown, a, b),
        }
    }

    /// Queue the overlapping parameters of two functions.
    fn unify_params(&mut self, ctx: &mut Context, a: Idx, b: Idx) {
        let params_a = ctx.pool().func_params(a).to_vec();
        let params_b = ctx.pool().func_params(b).to_vec();

        if params_a.len() != params_b.len() {
            self.error(ErrorKind::FuncParamsLength, a, b);
        }

        // A shorter list is assumed to be missing trailing parameters.
        // Push in reverse so pairs pop left to right.
        let pool = ctx.pool_mut();
        for (&p, &q) in params_a.iter().zip(&params_b).rev() {
            let p = pool.derive(p, a);
            let q = pool.derive(q, b);
            self.stack.push((p, q));
        }
    }

    fn error(&mut self, kind: ErrorKind, left: Idx, right: Idx) {
        tracing::debug!(%kind, %left, %right, "unification error");
        self.errors.push(UnifyError::new(kind, left, right));
    }
}
