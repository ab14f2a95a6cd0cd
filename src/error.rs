//! Error types for sequence operations.
//!
//! Every partial operation in this crate reports its precondition failure
//! through [`SequenceError`]. Total operations (`take`, `take_while`,
//! `zip_with`, `zip_all`, `drop_while`) never produce one.

/// Errors raised by partial operations on lists and lazy sequences.
///
/// # Examples
///
/// ```rust
/// use funseq::error::SequenceError;
/// use funseq::persistent::PersistentList;
///
/// let empty: PersistentList<i32> = PersistentList::empty();
/// assert_eq!(
///     empty.tail(),
///     Err(SequenceError::EmptyStructure { operation: "tail" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The operation requires a non-empty structure.
    #[error("{operation}: the structure is empty")]
    EmptyStructure {
        /// The name of the operation that was attempted.
        operation: &'static str,
    },

    /// More elements were requested than the structure holds.
    #[error("cannot drop {requested} elements: only {available} available")]
    InsufficientLength {
        /// The number of elements requested.
        requested: usize,
        /// The number of elements that were actually present.
        available: usize,
    },

    /// Materializing a lazy sequence produced more elements than allowed.
    #[error("materialization stopped after {limit} elements; the sequence may be infinite")]
    MaterializationLimitExceeded {
        /// The configured element limit.
        limit: usize,
    },
}

impl SequenceError {
    pub(crate) fn empty_structure(operation: &'static str) -> Self {
        tracing::debug!(operation, "operation on an empty structure");
        Self::EmptyStructure { operation }
    }

    pub(crate) fn insufficient_length(requested: usize, available: usize) -> Self {
        tracing::debug!(requested, available, "drop past the end of a sequence");
        Self::InsufficientLength {
            requested,
            available,
        }
    }

    pub(crate) fn materialization_limit_exceeded(limit: usize) -> Self {
        tracing::warn!(limit, "lazy sequence exceeded the materialization limit");
        Self::MaterializationLimitExceeded { limit }
    }
}
