//! # funseq
//!
//! Immutable, persistent sequences for Rust: a strict linked list whose
//! folds never overflow the stack, and a lazy, memoized, possibly infinite
//! stream built on a single `unfold` generator.
//!
//! ## Overview
//!
//! - **Persistent List**: [`PersistentList`](persistent::PersistentList), a
//!   two-variant cons list with structural sharing and stack-safe right folds
//! - **Lazy Sequence**: [`LazySequence`](stream::LazySequence), whose cells
//!   evaluate their head and tail at most once
//! - **Traversal**: `traverse`/`sequence` of lists over `Option`, `Result`
//!   and [`State`](effect::State)
//! - **Trees and Random Draws**: a fold-based binary
//!   [`Tree`](persistent::Tree), and a pure generator
//!   ([`SimpleRng`](effect::SimpleRng)) whose draws are `State` computations
//! - **Control Structures**: the memoization cell and the continuation
//!   engine the sequences are built on
//!
//! ## Feature Flags
//!
//! - `arc`: share list nodes and subtrees with `Arc` so lists and trees are
//!   `Send + Sync`
//! - `serde`: serialize and deserialize lists as sequences
//! - `full`: enable all optional features
//!
//! ## Example
//!
//! ```rust
//! use funseq::prelude::*;
//!
//! let naturals = LazySequence::from(1);
//! let odd_squares = naturals.map(|n| n * n).filter(|n| n % 2 == 1);
//!
//! let first: PersistentList<i64> = odd_squares.take(3).to_strict_list()?;
//! assert_eq!(first, PersistentList::of([1, 9, 25]));
//! assert_eq!(first.fold_right(0, |element, sum| element + sum), 35);
//! # Ok::<(), SequenceError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence types, the error type and the configuration.
///
/// # Usage
///
/// ```rust
/// use funseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::SequenceConfig;
    pub use crate::control::{Continuation, Lazy};
    pub use crate::effect::{Rand, SimpleRng, State};
    pub use crate::error::SequenceError;
    pub use crate::persistent::{PersistentList, Tree};
    pub use crate::stream::LazySequence;
}

pub mod config;
pub mod control;
pub mod effect;
pub mod error;
pub mod persistent;
pub mod stream;
