//! Type node handle.
//!
//! Every node of every type tree lives in a [`Pool`](crate::Pool) and is
//! referenced by its 32-bit `Idx`. Handles are `Copy` and compare by
//! position in the pool, so two handles are equal only when they name the
//! very same node. Use [`Pool::same_shape`](crate::Pool::same_shape) for
//! structural comparison.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    /// Create an index from a raw u32 value.
    ///
    /// The caller must make sure the index names a node of the pool it is
    /// used with; pool accessors panic on foreign indices.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of the node in pool storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Idx({})", self.0)
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
