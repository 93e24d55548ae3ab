//! Structural type unification.
//!
//! Type trees are built from six node kinds (`nil`, `int`, `str`, functions,
//! unions and type variables) stored in a [`Pool`] and addressed by [`Idx`].
//! A [`Context`] owns the pool, issues variable ids, and runs the two
//! request-level operations:
//!
//! - [`Context::unify`]: reconcile two trees with a worklist [`Unifier`],
//!   binding variables and collecting [`UnifyError`]s instead of failing.
//! - [`Context::copy`]: instantiate a type with fresh variables so each use
//!   site binds its own.
//!
//! Every node records where it was introduced ([`FilePos`]) and which node
//! it was derived from (`pred`). [`Pool::deref`] follows bound variables and
//! stamps that trail; [`Pool::format_provenance`] renders it.
//!
//! # Tracing
//!
//! Unification emits `tracing` events: `trace` per worklist step, `debug`
//! per binding and per recorded error, `error` for invariant violations.

mod context;
mod deref;
mod error;
mod idx;
mod pool;
mod pos;
mod stack;
mod tag;
mod unify;

pub use context::{Context, SharedContext};
pub use deref::Provenance;
pub use error::InvariantError;
pub use idx::Idx;
pub use pool::{Item, Pool, RefId, TypeKind, VarState};
pub use pos::FilePos;
pub use tag::Tag;
pub use unify::{ErrorKind, Unifier, UnifyError};
