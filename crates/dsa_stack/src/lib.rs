//! Stack growth for the recursive exercises.
//!
//! The palindrome and reversal routines recurse once per pair of elements,
//! so a long enough input walks straight off the end of the main thread's
//! stack. Each recursive step goes through [`ensure_sufficient_stack`],
//! which switches to a freshly allocated segment when the current one is
//! nearly exhausted.
//!
//! On `wasm32` the guard is a plain call; the runtime owns the stack there.

/// Remaining stack below which a new segment is allocated (100 KiB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
///
/// ```
/// use dsa_stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(1_000), 1_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
