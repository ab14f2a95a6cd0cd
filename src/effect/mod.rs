//! Computations that thread state through a sequence of steps.
//!
//! - [`State`]: a computation `S -> (A, S)`, composed with `fmap`,
//!   `flat_map` and `map2`, and run over a whole [`PersistentList`] with
//!   [`State::sequence`]
//! - [`rng`]: a pure random number generator whose draws are `State`
//!   computations over the generator
//!
//! ```rust
//! use funseq::effect::State;
//!
//! let counter = State::modify(|count: u32| count + 1).flat_map(|()| State::get());
//! assert_eq!(counter.run(41), (42, 42));
//! ```
//!
//! [`PersistentList`]: crate::persistent::PersistentList

pub mod rng;
mod state;

pub use rng::{Rand, SimpleRng};
pub use state::State;
