//! Computations that thread a state value.
//!
//! A [`State<S, A>`] wraps a transition `S -> (A, S)`. Nothing runs until
//! [`State::run`] is given an initial state; until then computations are
//! plain values that can be combined with `fmap`, `flat_map` and `map2`, or
//! collected from a [`PersistentList`] with [`State::sequence`].
//!
//! `State::pure(a).flat_map(f)` behaves as `f(a)`, and
//! `m.flat_map(State::pure)` behaves as `m`.
//!
//! # Examples
//!
//! ```rust
//! use funseq::effect::State;
//! use funseq::persistent::PersistentList;
//!
//! fn next_ticket() -> State<u32, u32> {
//!     State::new(|counter: u32| (counter, counter + 1))
//! }
//!
//! let tickets = State::sequence(&PersistentList::of([
//!     next_ticket(),
//!     next_ticket(),
//!     next_ticket(),
//! ]));
//! let (issued, counter) = tickets.run(100);
//! assert_eq!(issued, PersistentList::of([100, 101, 102]));
//! assert_eq!(counter, 103);
//! ```

use std::rc::Rc;

use crate::persistent::PersistentList;

/// A transition from a state `S` to a result `A` and the next state.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Applies the transition to `initial`.
    pub fn run(&self, initial: S) -> (A, S) {
        (self.transition)(initial)
    }

    /// The result of [`run`](Self::run), without the final state.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// The final state of [`run`](Self::run), without the result.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// Yields `value` and passes the state through.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let first = self.transition;
        State::new(move |state| {
            let (value, next) = first(state);
            (function(value), next)
        })
    }

    /// Feeds the result into `function` and runs the computation it picks
    /// on the updated state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let first = self.transition;
        State::new(move |state| {
            let (value, next) = first(state);
            function(value).run(next)
        })
    }

    /// Runs `self` and then `other`, combining both results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (left, middle) = first(state);
            let (right, last) = second(middle);
            (function(left, right), last)
        })
    }

    /// Runs every computation in `states` front to back and collects the
    /// results in the same order.
    ///
    /// Built with [`PersistentList::fold_right`], so building is stack-safe
    /// for any length. Running the result nests one call per element.
    pub fn sequence(states: &PersistentList<Self>) -> State<S, PersistentList<A>> {
        states.fold_right(State::pure(PersistentList::empty()), |state, rest| {
            state
                .clone()
                .map2(rest, |head, tail: PersistentList<A>| tail.cons(head))
        })
    }

    /// [`sequence`](Self::sequence) over `elements` mapped by `function`.
    pub fn traverse<T, F>(elements: &PersistentList<T>, function: F) -> State<S, PersistentList<A>>
    where
        F: Fn(&T) -> Self,
    {
        Self::sequence(&elements.map(function))
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Yields a copy of the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Discards the current state in favour of `replacement`.
    pub fn put(replacement: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), replacement.clone()))
    }

    /// Rewrites the current state with `update`.
    pub fn modify<F>(update: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), update(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}
