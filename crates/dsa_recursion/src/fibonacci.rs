//! Fibonacci numbers by naive double recursion.
//!
//! `F(0) = 0`, `F(1) = 1`, `F(k) = F(k-1) + F(k-2)`.
//!
//! Every call re-derives both subproblems, so the running time is
//! exponential in `n` while the stack depth stays linear. There is no
//! memoization.

use crate::{RecursionError, RecursionResult};

/// Largest index whose Fibonacci number fits in a `u64`.
///
/// `F(93) = 12_200_160_415_121_876_738`; `F(94)` exceeds `u64::MAX`.
pub const MAX_FIBONACCI_INDEX: u64 = 93;

/// The `n`-th Fibonacci number.
///
/// Indices above [`MAX_FIBONACCI_INDEX`] overflow `u64`; use
/// [`checked_fibonacci`] when `n` comes from outside.
pub fn fibonacci(n: u64) -> u64 {
    tracing::debug!(n, "fibonacci");
    fib(n)
}

fn fib(n: u64) -> u64 {
    if n == 0 || n == 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// [`fibonacci`] for a signed, unvalidated index.
///
/// Rejects negative indices with [`RecursionError::InvalidArgument`] and
/// indices past [`MAX_FIBONACCI_INDEX`] with [`RecursionError::Overflow`].
/// Both checks happen before any recursion.
pub fn checked_fibonacci(n: i64) -> RecursionResult<u64> {
    let index = u64::try_from(n).map_err(|_| RecursionError::negative_index(n))?;
    if index > MAX_FIBONACCI_INDEX {
        tracing::trace!(index, "rejecting fibonacci index past u64 range");
        return Err(RecursionError::Overflow {
            index,
            max: MAX_FIBONACCI_INDEX,
        });
    }
    Ok(fibonacci(index))
}
