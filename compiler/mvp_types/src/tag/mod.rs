//! Type kind tag.
//!
//! Every node in the pool has a `Tag` identifying which of the six node
//! kinds it is. Unification dispatches on the tag pair, and
//! [`Tag::is_atomic`] is a pure function of the tag.

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Atomic leaves ===
    /// The `nil` type.
    Nil = 0,
    /// The `int` type.
    Int = 1,
    /// The `str` type.
    Str = 2,

    // === Compound shapes ===
    /// Function type `(params...) -> result`.
    Func = 16,
    /// One of several alternatives.
    Union = 17,

    // === Type variables ===
    /// Type variable cell.
    Ref = 32,
}

impl Tag {
    /// Whether values of this kind are leaves that unify by tag alone.
    ///
    /// A `Ref` is never atomic, whatever it is bound to.
    #[inline]
    pub const fn is_atomic(self) -> bool {
        matches!(self, Self::Nil | Self::Int | Self::Str)
    }

    /// Check if this is a type variable.
    #[inline]
    pub const fn is_ref(self) -> bool {
        matches!(self, Self::Ref)
    }

    /// Short lowercase name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Int => "int",
            Self::Str => "str",
            Self::Func => "func",
            Self::Union => "union",
            Self::Ref => "ref",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
