//! Errors for the checked entry points.
//!
//! The core routines are total over their argument types. Only callers
//! holding unvalidated input (a signed index, a user-typed number) go
//! through the checked variants and see these.

use thiserror::Error;

/// Result alias for the checked entry points.
pub type RecursionResult<T> = Result<T, RecursionError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecursionError {
    /// An argument lies outside the domain of the function.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// The result would not fit in the output type.
    #[error("F({index}) overflows u64 (largest representable index is {max})")]
    Overflow { index: u64, max: u64 },
}

impl RecursionError {
    pub(crate) fn negative_index(value: i64) -> Self {
        RecursionError::InvalidArgument {
            name: "n",
            value,
            reason: "index must be non-negative",
        }
    }
}
