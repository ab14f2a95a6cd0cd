//! Lazily evaluated, memoized, possibly infinite sequences.
//!
//! - [`LazySequence`]: a sequence with two variants, `Empty` and `Cons`,
//!   whose cells evaluate their head and tail on first access and cache
//!   the result
//! - [`LazySequence::unfold`]: the generator every other constructor is
//!   derived from
//!
//! # Examples
//!
//! ```rust
//! use funseq::persistent::PersistentList;
//! use funseq::stream::LazySequence;
//!
//! let squares = LazySequence::from(1).map(|n| n * n);
//! let first = squares.take(4).to_strict_list();
//! assert_eq!(first, Ok(PersistentList::of([1, 4, 9, 16])));
//! ```

mod sequence;

pub use sequence::ConsCell;
pub use sequence::LazySequence;
pub use sequence::LazySequenceIterator;

static_assertions::assert_not_impl_any!(LazySequence<i32>: Send, Sync);
