//! Stack growth for the recursive quicksort.
//!
//! Quicksort recursion depth is O(n) on adversarial input (already sorted
//! runs of duplicates with an unlucky pivot). Each recursive call goes
//! through [`ensure_sufficient_stack`], which grows the native stack on
//! demand instead of overflowing.
//!
//! - **Red zone**: 100KB - if less than this remains, the stack grows
//! - **Growth size**: 1MB per growth
//! - **WASM**: passthrough, the runtime manages its own stack

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
