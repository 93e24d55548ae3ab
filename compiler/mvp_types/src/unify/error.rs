//! Unification error records.
//!
//! Errors are plain data appended to the [`Unifier`](super::Unifier)'s
//! list. Producing one never interrupts a run.

use std::fmt;

use crate::Idx;

/// What kind of conflict a [`UnifyError`] records.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Two concrete shapes with different tags.
    Different,
    /// Two functions with different parameter counts. The overlapping
    /// parameters are still unified.
    FuncParamsLength,
    /// No rule covers the pairing (any union involvement).
    Unknown,
    /// An invariant was violated mid-run (reference cycle, rebinding).
    Internal,
}

impl ErrorKind {
    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Different => "different",
            Self::FuncParamsLength => "func_params_length",
            Self::Unknown => "unknown",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from type unification.
///
/// `left` and `right` are the two nodes that failed to unify, captured
/// after dereferencing. Render them with
/// [`Pool::format_error`](crate::Pool::format_error).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind}: {left} vs {right}")]
pub struct UnifyError {
    pub kind: ErrorKind,
    pub left: Idx,
    pub right: Idx,
}

impl UnifyError {
    pub fn new(kind: ErrorKind, left: Idx, right: Idx) -> Self {
        Self { kind, left, right }
    }
}
