//! In-place reversal by recursive two-pointer swap.
//!
//! Cursors start at both ends of the window; each call swaps the pair they
//! point at and moves both inward until they meet or cross. The slice is
//! mutated where it lies and handed back to the caller for chaining; no
//! new storage is allocated.

use dsa_stack::ensure_sufficient_stack;

/// Reverse `arr` in place and return it.
///
/// ```
/// use dsa_recursion::reverse_sequence;
///
/// let mut items = [1, 2, 3, 4];
/// assert_eq!(reverse_sequence(&mut items), &[4, 3, 2, 1]);
/// assert_eq!(items, [4, 3, 2, 1]);
/// ```
pub fn reverse_sequence<T>(arr: &mut [T]) -> &mut [T] {
    tracing::debug!(len = arr.len(), "reverse_sequence");
    if let Some(end) = arr.len().checked_sub(1) {
        swap_inward(arr, 0, end);
    }
    arr
}

/// Reverse the inclusive window `arr[start..=end]` in place and return `arr`.
///
/// An `end` at or past the last index is clamped to it. A window with
/// `start >= end` is left untouched.
pub fn reverse_between<T>(arr: &mut [T], start: usize, end: usize) -> &mut [T] {
    if let Some(last) = arr.len().checked_sub(1) {
        swap_inward(arr, start, end.min(last));
    }
    arr
}

fn swap_inward<T>(arr: &mut [T], start: usize, end: usize) {
    ensure_sufficient_stack(|| {
        if start >= end {
            return;
        }
        arr.swap(start, end);
        swap_inward(arr, start + 1, end - 1);
    });
}
