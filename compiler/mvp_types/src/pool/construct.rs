//! Node construction helpers for the Pool.
//!
//! These are the boundary through which a producer of type trees (a parser,
//! a driver, a test) builds nodes. Variables are not created here: their ids
//! come from [`Context::new_ref`](crate::Context::new_ref).

use crate::{FilePos, Idx, Pool, TypeKind};

impl Pool {
    // === Atomic Constructors ===

    /// Create a `nil` node.
    pub fn nil(&mut self, pos: FilePos) -> Idx {
        self.alloc(TypeKind::Nil, pos, None)
    }

    /// Create an `int` node.
    pub fn int(&mut self, pos: FilePos) -> Idx {
        self.alloc(TypeKind::Int, pos, None)
    }

    /// Create a `str` node.
    pub fn str(&mut self, pos: FilePos) -> Idx {
        self.alloc(TypeKind::Str, pos, None)
    }

    // === Compound Constructors ===

    /// Create a function node `(params...) -> result`.
    pub fn func(&mut self, pos: FilePos, params: &[Idx], result: Idx) -> Idx {
        let kind = TypeKind::Func {
            params: params.into(),
            result,
        };
        self.alloc(kind, pos, None)
    }

    /// Create a union node over `alternatives`.
    pub fn union(&mut self, pos: FilePos, alternatives: &[Idx]) -> Idx {
        let kind = TypeKind::Union {
            alternatives: alternatives.into(),
        };
        self.alloc(kind, pos, None)
    }

    // === Derived Nodes ===

    /// Copy `idx` with its predecessor set to `pred`.
    ///
    /// Copying a `Ref` node keeps its id, so the copy shares the original
    /// variable's cell.
    pub fn derive(&mut self, idx: Idx, pred: Idx) -> Idx {
        let item = self.item(idx);
        let (kind, pos) = (item.kind.clone(), item.pos.clone());
        self.alloc(kind, pos, Some(pred))
    }

    /// Copy `idx` with a new position. Everything else is kept.
    pub fn relocate(&mut self, idx: Idx, pos: FilePos) -> Idx {
        let item = self.item(idx);
        let (kind, pred) = (item.kind.clone(), item.pred);
        self.alloc(kind, pos, pred)
    }
}
