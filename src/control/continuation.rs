//! Composed continuations applied without recursion.
//!
//! A right fold `f(x1, f(x2, ... f(xn, seed)))` can be computed by a single
//! left-to-right pass that builds one function out of the elements:
//!
//! ```text
//! k0       = identity
//! k(i)     = |b| k(i-1)(f(xi, b))
//! result   = k(n)(seed)
//! ```
//!
//! Represented as nested closures, applying `k(n)` would still recurse once
//! per element. [`Continuation`] keeps the composition as a stack of frames
//! instead: composing pushes a frame and applying pops frames in a loop, so
//! neither step grows the call stack with the number of elements.
//!
//! # Examples
//!
//! ```rust
//! use funseq::control::Continuation;
//!
//! let continuation = Continuation::identity()
//!     .compose(|value: i32| value + 1)
//!     .compose(|value: i32| value * 10);
//!
//! // The most recently composed step runs first: (2 * 10) + 1
//! assert_eq!(continuation.apply(2), 21);
//! ```

use std::fmt;

/// A single step of a composed continuation.
type Frame<'a, B> = Box<dyn FnOnce(B) -> B + 'a>;

/// A function `B -> B` built by repeated composition.
///
/// `continuation.compose(step)` is the function `|b| continuation(step(b))`.
/// Each composition is O(1) and [`apply`](Continuation::apply) runs every
/// step exactly once, in a loop.
///
/// # Invariants
///
/// - `Continuation::identity().apply(value) == value`
/// - `k.compose(g).apply(value) == k.apply(g(value))`
pub struct Continuation<'a, B> {
    frames: Vec<Frame<'a, B>>,
}

impl<'a, B> Continuation<'a, B> {
    /// The identity continuation.
    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self { frames: Vec::new() }
    }

    /// Composes `step` inside this continuation.
    ///
    /// The resulting continuation applies `step` first and then the steps
    /// that were already composed.
    #[must_use]
    pub fn compose<F>(mut self, step: F) -> Self
    where
        F: FnOnce(B) -> B + 'a,
    {
        self.frames.push(Box::new(step));
        self
    }

    /// Applies the composed continuation to `value`.
    pub fn apply(self, value: B) -> B {
        self.frames
            .into_iter()
            .rev()
            .fold(value, |accumulator, frame| frame(accumulator))
    }

    /// Returns the number of composed steps.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if nothing has been composed yet.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<B> Default for Continuation<'_, B> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<B> fmt::Debug for Continuation<'_, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Continuation")
            .field("depth", &self.frames.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity() {
        let continuation: Continuation<'_, i32> = Continuation::identity();
        assert!(continuation.is_identity());
        assert_eq!(continuation.apply(42), 42);
    }

    #[rstest]
    fn test_compose_order() {
        let continuation = Continuation::identity()
            .compose(|text: String| text + "a")
            .compose(|text: String| text + "b")
            .compose(|text: String| text + "c");
        assert_eq!(continuation.depth(), 3);
        assert_eq!(continuation.apply(String::new()), "cba");
    }

    #[rstest]
    fn test_borrowed_frames() {
        let elements = vec![1, 2, 3];
        let continuation = elements
            .iter()
            .fold(Continuation::identity(), |continuation, element| {
                continuation.compose(move |accumulator: Vec<i32>| {
                    let mut accumulator = accumulator;
                    accumulator.push(*element);
                    accumulator
                })
            });
        assert_eq!(continuation.apply(Vec::new()), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_deep_composition_is_stack_safe() {
        let continuation = (0..1_000_000).fold(Continuation::identity(), |continuation, _| {
            continuation.compose(|value: u64| value + 1)
        });
        assert_eq!(continuation.apply(0), 1_000_000);
    }

    #[rstest]
    fn test_debug() {
        let continuation = Continuation::identity().compose(|value: i32| value);
        assert_eq!(format!("{continuation:?}"), "Continuation { depth: 1 }");
    }
}
