//! Palindrome check by recursive two-pointer shrink.
//!
//! Two cursors start at opposite ends and move inward one step per call.
//! The first mismatching pair ends the recursion with `false`; cursors
//! meeting or crossing end it with `true`. The input is never mutated.

use dsa_stack::ensure_sufficient_stack;

/// Whether `s` reads the same forwards and backwards.
///
/// Empty and single-element sequences are palindromes.
pub fn is_palindrome<T: PartialEq>(s: &[T]) -> bool {
    tracing::debug!(len = s.len(), "is_palindrome");
    match s.len().checked_sub(1) {
        Some(end) => shrink(s, 0, end),
        None => true,
    }
}

/// [`is_palindrome`] over the `char`s of a string.
///
/// Compares Unicode scalar values, not bytes, so `"été"` is a palindrome.
pub fn is_valid_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    is_palindrome(&chars)
}

fn shrink<T: PartialEq>(s: &[T], start: usize, end: usize) -> bool {
    ensure_sufficient_stack(|| {
        if start >= end {
            return true;
        }
        if s[start] != s[end] {
            tracing::trace!(start, end, "mismatch");
            return false;
        }
        shrink(s, start + 1, end - 1)
    })
}
