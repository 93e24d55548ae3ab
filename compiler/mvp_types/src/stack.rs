//! Stack growth for recursive walks over type trees.
//!
//! Copy, formatting and shape comparison recurse once per nesting level.
//! Hand-built or generated trees can be nested far deeper than the native
//! stack allows, so every recursive step goes through
//! [`ensure_sufficient_stack`].

/// Remaining stack below which we grow (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
