//! Arena of type nodes and type variable cells.
//!
//! The pool owns every node of every type tree. A node is an [`Item`]: its
//! [`TypeKind`] payload, the [`FilePos`] it was introduced at, and an
//! optional predecessor (`pred`) naming the node it was derived from.
//!
//! # Immutability
//!
//! Items never change once pushed. Rewriting a node's `pos` or `pred`
//! allocates a new item (see [`Pool::derive`] and [`Pool::relocate`]).
//! Because a `pred` can only name an item that already exists, following
//! `pred` links always terminates.
//!
//! # Type variables
//!
//! A `Ref` item carries only a [`RefId`]. The variable's value lives in a
//! separate cell table indexed by that id, so every `Ref` item with the same
//! id, including copies made by [`Pool::derive`], observes the same binding.
//! Binding is the only mutation the pool supports and goes through
//! [`Context::bind`](crate::Context::bind).

mod construct;
mod format;

use std::fmt;

use crate::stack::ensure_sufficient_stack;
use crate::{FilePos, Idx, Tag};

/// Identity of a type variable.
///
/// Ids are handed out by the [`Context`](crate::Context) starting at 1 and
/// increasing by one per variable. A lower id means an older variable.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct RefId(u32);

impl RefId {
    /// The id given to the first variable of a context.
    pub const FIRST: Self = Self(1);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this variable's cell.
    #[inline]
    const fn slot(self) -> usize {
        (self.0 - Self::FIRST.0) as usize
    }
}

impl fmt::Debug for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefId({})", self.0)
    }
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// State of a type variable cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VarState {
    /// Not yet unified with anything.
    Unbound,
    /// Unified with `target`.
    Link { target: Idx },
}

/// Payload of a type node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Nil,
    Int,
    Str,
    Func { params: Box<[Idx]>, result: Idx },
    Union { alternatives: Box<[Idx]> },
    Ref(RefId),
}

impl TypeKind {
    pub fn tag(&self) -> Tag {
        match self {
            Self::Nil => Tag::Nil,
            Self::Int => Tag::Int,
            Self::Str => Tag::Str,
            Self::Func { .. } => Tag::Func,
            Self::Union { .. } => Tag::Union,
            Self::Ref(_) => Tag::Ref,
        }
    }
}

/// A node in the pool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub kind: TypeKind,
    pub pos: FilePos,
    /// The node this one was derived from. Diagnostics only.
    pub pred: Option<Idx>,
}

/// The type node arena.
#[derive(Default)]
pub struct Pool {
    items: Vec<Item>,
    /// Variable cells, indexed by `RefId::slot`.
    cells: Vec<VarState>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of type variables registered so far.
    #[inline]
    pub fn ref_count(&self) -> usize {
        self.cells.len()
    }

    // === Allocation ===

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pools beyond u32::MAX nodes are not supported"
    )]
    pub(crate) fn alloc(&mut self, kind: TypeKind, pos: FilePos, pred: Option<Idx>) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(Item { kind, pos, pred });
        idx
    }

    /// Register the cell for a freshly issued variable id.
    pub(crate) fn register_ref(&mut self, id: RefId) {
        debug_assert_eq!(id.slot(), self.cells.len(), "ref ids must be issued in order");
        self.cells.push(VarState::Unbound);
    }

    // === Node Accessors ===

    #[inline]
    pub fn item(&self, idx: Idx) -> &Item {
        &self.items[idx.index()]
    }

    #[inline]
    pub fn kind(&self, idx: Idx) -> &TypeKind {
        &self.item(idx).kind
    }

    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.kind(idx).tag()
    }

    #[inline]
    pub fn pos(&self, idx: Idx) -> &FilePos {
        &self.item(idx).pos
    }

    #[inline]
    pub fn pred(&self, idx: Idx) -> Option<Idx> {
        self.item(idx).pred
    }

    /// Whether the node is a leaf that unifies by tag alone.
    #[inline]
    pub fn is_atomic(&self, idx: Idx) -> bool {
        self.tag(idx).is_atomic()
    }

    /// Parameter types of a function node. Empty for any other node.
    pub fn func_params(&self, idx: Idx) -> &[Idx] {
        match self.kind(idx) {
            TypeKind::Func { params, .. } => params,
            _ => &[],
        }
    }

    /// Result type of a function node.
    pub fn func_result(&self, idx: Idx) -> Option<Idx> {
        match self.kind(idx) {
            TypeKind::Func { result, .. } => Some(*result),
            _ => None,
        }
    }

    /// Alternatives of a union node. Empty for any other node.
    pub fn union_alternatives(&self, idx: Idx) -> &[Idx] {
        match self.kind(idx) {
            TypeKind::Union { alternatives } => alternatives,
            _ => &[],
        }
    }

    /// Variable id of a `Ref` node.
    #[inline]
    pub fn ref_id(&self, idx: Idx) -> Option<RefId> {
        match self.kind(idx) {
            TypeKind::Ref(id) => Some(*id),
            _ => None,
        }
    }

    // === Variable Cells ===

    #[inline]
    pub fn var_state(&self, id: RefId) -> &VarState {
        &self.cells[id.slot()]
    }

    #[inline]
    pub(crate) fn var_state_mut(&mut self, id: RefId) -> &mut VarState {
        &mut self.cells[id.slot()]
    }

    /// What the variable named by `idx` is bound to, if `idx` is a bound `Ref`.
    pub fn link_target(&self, idx: Idx) -> Option<Idx> {
        let id = self.ref_id(idx)?;
        match self.var_state(id) {
            VarState::Link { target } => Some(*target),
            VarState::Unbound => None,
        }
    }

    /// Check if `idx` is a `Ref` whose cell holds a value.
    pub fn is_bound(&self, idx: Idx) -> bool {
        self.link_target(idx).is_some()
    }

    // === Structural Comparison ===

    /// Structural equality that ignores `pos` and `pred`.
    ///
    /// Tags must match, variables are equal when their ids are, and
    /// compound nodes are compared element by element. Bound variables are
    /// not followed: call [`Pool::resolve`] first to compare what they mean.
    pub fn same_shape(&self, a: Idx, b: Idx) -> bool {
        if a == b {
            return true;
        }
        ensure_sufficient_stack(|| match (self.kind(a), self.kind(b)) {
            (TypeKind::Nil, TypeKind::Nil)
            | (TypeKind::Int, TypeKind::Int)
            | (TypeKind::Str, TypeKind::Str) => true,
            (TypeKind::Ref(x), TypeKind::Ref(y)) => x == y,
            (
                TypeKind::Func {
                    params: pa,
                    result: ra,
                },
                TypeKind::Func {
                    params: pb,
                    result: rb,
                },
            ) => self.same_shapes(pa, pb) && self.same_shape(*ra, *rb),
            (TypeKind::Union { alternatives: xa }, TypeKind::Union { alternatives: xb }) => {
                self.same_shapes(xa, xb)
            }
            _ => false,
        })
    }

    fn same_shapes(&self, a: &[Idx], b: &[Idx]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.same_shape(x, y))
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("items", &self.items.len())
            .field("refs", &self.cells.len())
            .finish()
    }
}
