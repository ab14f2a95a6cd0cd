//! Control structures behind the sequence types.
//!
//! - [`Lazy`]: single-evaluation memoization cell, used for the head and
//!   tail of every lazy sequence cell
//! - [`Continuation`]: a composed `B -> B` function applied in a loop, used
//!   to turn right folds into stack-safe left folds
//!
//! # Examples
//!
//! ```rust
//! use funseq::control::{Continuation, Lazy};
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert_eq!(*lazy.force(), 42);
//!
//! let continuation = Continuation::identity().compose(|value: i32| value * 2);
//! assert_eq!(continuation.apply(21), 42);
//! ```

mod continuation;
mod lazy;

pub use continuation::Continuation;
pub use lazy::{Lazy, LazyState, Thunk};
