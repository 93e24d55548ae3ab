//! Invariant violations.
//!
//! These are not type errors. A type mismatch is ordinary data collected by
//! the [`Unifier`](crate::Unifier); an `InvariantError` means the type
//! trees themselves are malformed and no sensible type can be produced.

use crate::{Idx, RefId, Tag};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvariantError {
    /// Following bound variables leads back to a variable already visited.
    #[error("type variable {ref_id} is part of a reference cycle")]
    RefCycle { ref_id: RefId },

    /// A variable may be bound only once.
    #[error("type variable {ref_id} is already bound to {target}")]
    AlreadyBound { ref_id: RefId, target: Idx },

    /// Only `Ref` nodes own a value slot.
    #[error("{idx} is a {tag} node, not a type variable")]
    NotARef { idx: Idx, tag: Tag },
}
