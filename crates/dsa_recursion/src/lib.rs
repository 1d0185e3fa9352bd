//! Textbook recursion exercises.
//!
//! Three independent routines, each a classic recursive algorithm:
//!
//! - [`fibonacci`]: the n-th Fibonacci number by naive double recursion.
//! - [`is_palindrome`]: symmetric-sequence check by two-pointer shrink.
//! - [`reverse_sequence`]: in-place reversal by two-pointer swap.
//!
//! The sequence routines recurse once per pair of elements and run each
//! step under [`dsa_stack::ensure_sufficient_stack`], so long inputs do not
//! overflow the caller's stack. [`fibonacci`] recurses at most `n` deep and
//! is exponential in time; it is kept deliberately unmemoized.

mod errors;
pub mod fibonacci;
pub mod palindrome;
pub mod reverse;

pub use errors::{RecursionError, RecursionResult};
pub use fibonacci::{checked_fibonacci, fibonacci, MAX_FIBONACCI_INDEX};
pub use palindrome::{is_palindrome, is_valid_palindrome};
pub use reverse::{reverse_between, reverse_sequence};
