//! Persistent (immutable) linked lists and trees.
//!
//! - [`PersistentList`]: a singly-linked list with two variants, `Nil` and
//!   `Cell`, whose folds never grow the call stack with its length
//! - `traverse`/`sequence` for `Option` and `Result` elements
//! - [`Tree`]: a binary tree with values at the leaves, queried by folding
//!
//! # Structural Sharing
//!
//! Every operation returns a new list. Only the cells in front of the
//! changed position are rebuilt; the rest is shared with the original:
//!
//! ```text
//! list:                 1 -> 2 -> 3 -> nil
//! list.set_head(0):     0 -> [2 -> 3 -> nil]   // shares [2, 3] with list
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funseq::persistent::PersistentList;
//!
//! let list = PersistentList::of([1, 2, 3]);
//! let doubled = list.map(|element| element * 2);
//! assert_eq!(doubled, PersistentList::of([2, 4, 6]));
//! assert_eq!(list.fold_right(0, |element, sum| element + sum), 6);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
mod traversable;
mod tree;

pub use list::Node;
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;
pub use tree::Tree;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Tree<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
