//! A pure pseudo-random number generator.
//!
//! [`SimpleRng`] is an immutable 48-bit linear congruential generator:
//! every draw returns the value together with the generator to use next, so
//! the same seed always replays the same values. [`Rand<A>`] is a
//! [`State`] over the generator, which lets draws compose with the usual
//! `fmap`, `map2`, `flat_map`, `sequence` and `traverse`.
//!
//! # Examples
//!
//! ```rust
//! use funseq::effect::rng::{self, SimpleRng};
//!
//! let pair = rng::both(rng::int(), rng::double());
//! let ((number, fraction), _) = pair.run(SimpleRng::new(42));
//! assert_eq!(number, 16_159_453);
//! assert!((0.0..1.0).contains(&fraction));
//! ```

use std::num::NonZeroU32;

use crate::effect::State;
use crate::persistent::PersistentList;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const SEED_MASK: i64 = 0xFFFF_FFFF_FFFF;

/// A linear congruential generator with a 48-bit seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    seed: i64,
}

/// A draw from a [`SimpleRng`].
pub type Rand<A> = State<SimpleRng, A>;

impl SimpleRng {
    /// A generator starting from `seed`.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// A uniformly distributed `i32` and the next generator.
    #[must_use]
    pub const fn next_int(self) -> (i32, Self) {
        let seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & SEED_MASK;
        // The masked seed is 48 bits wide; the value is its upper 32.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bits = (seed >> 16) as u32;
        (bits.cast_signed(), Self { seed })
    }

    /// An `i32` in `0..=i32::MAX`.
    ///
    /// Negative draws map to `-(n + 1)`, so `i32::MIN` becomes `i32::MAX`
    /// and every non-negative value has exactly two preimages.
    #[must_use]
    pub const fn non_negative_int(self) -> (i32, Self) {
        let (value, next) = self.next_int();
        let value = if value < 0 { -(value + 1) } else { value };
        (value, next)
    }

    /// An `f64` in `[0, 1)`.
    #[must_use]
    pub fn double(self) -> (f64, Self) {
        let (value, next) = self.non_negative_int();
        (to_unit_interval(value), next)
    }

    /// `count` successive [`next_int`](Self::next_int) draws, in order.
    #[must_use]
    pub fn ints(self, count: usize) -> (PersistentList<i32>, Self) {
        let mut drawn = Vec::with_capacity(count);
        let mut generator = self;
        for _ in 0..count {
            let (value, next) = generator.next_int();
            drawn.push(value);
            generator = next;
        }
        (PersistentList::of(drawn), generator)
    }
}

fn to_unit_interval(value: i32) -> f64 {
    f64::from(value) / (f64::from(i32::MAX) + 1.0)
}

/// Draws one `i32`.
#[must_use]
pub fn int() -> Rand<i32> {
    State::new(SimpleRng::next_int)
}

/// Draws one `i32` in `0..=i32::MAX`.
#[must_use]
pub fn non_negative_int() -> Rand<i32> {
    State::new(SimpleRng::non_negative_int)
}

/// Draws one `f64` in `[0, 1)`, derived from [`non_negative_int`].
#[must_use]
pub fn double() -> Rand<f64> {
    non_negative_int().fmap(to_unit_interval)
}

/// Always yields `value` and leaves the generator untouched.
pub fn unit<A: Clone + 'static>(value: A) -> Rand<A> {
    State::pure(value)
}

/// Runs `first` and then `second`, pairing the results.
pub fn both<A, B>(first: Rand<A>, second: Rand<B>) -> Rand<(A, B)>
where
    A: 'static,
    B: 'static,
{
    first.map2(second, |left, right| (left, right))
}

/// Runs every draw in `draws` front to back.
///
/// The composition is a [`PersistentList::fold_right`] over `map2`.
pub fn sequence<A: Clone + 'static>(draws: &PersistentList<Rand<A>>) -> Rand<PersistentList<A>> {
    draws.fold_right(unit(PersistentList::empty()), |draw, rest| {
        draw.clone()
            .map2(rest, |head, tail: PersistentList<A>| tail.cons(head))
    })
}

/// [`sequence`] over `elements` mapped by `function`.
pub fn traverse<T, A, F>(elements: &PersistentList<T>, function: F) -> Rand<PersistentList<A>>
where
    A: Clone + 'static,
    F: Fn(&T) -> Rand<A>,
{
    sequence(&elements.map(function))
}

/// `count` successive `i32` draws as one [`Rand`].
///
/// Running the result nests one call per draw; use [`SimpleRng::ints`] for
/// large counts.
#[must_use]
pub fn ints(count: usize) -> Rand<PersistentList<i32>> {
    sequence(&std::iter::repeat_with(int).take(count).collect())
}

/// Draws a value in `0..bound` without modulo bias.
///
/// A draw that falls in the incomplete last block of `bound` values below
/// `i32::MAX` is rejected and drawn again. Draws come from `0..=i32::MAX`,
/// so a bound above `2^31` behaves as `2^31`.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroU32;
///
/// use funseq::effect::rng::{self, SimpleRng};
///
/// let die = rng::non_negative_int_less_than(NonZeroU32::new(6).unwrap());
/// let rolls = rng::sequence(&std::iter::repeat_n(die, 20).collect());
/// let (values, _) = rolls.run(SimpleRng::new(7));
/// assert_eq!(values.length(), 20);
/// assert!(values.for_all(|roll| *roll < 6));
/// ```
#[must_use]
pub fn non_negative_int_less_than(bound: NonZeroU32) -> Rand<u32> {
    let range = i32::MAX.unsigned_abs() + 1;
    let modulus = bound.get().min(range);
    non_negative_int().flat_map(move |value| {
        let value = value.unsigned_abs();
        let remainder = value % modulus;
        let block_end = u64::from(value - remainder) + u64::from(modulus) - 1;
        if block_end < u64::from(range) {
            unit(remainder)
        } else {
            non_negative_int_less_than(bound)
        }
    })
}
