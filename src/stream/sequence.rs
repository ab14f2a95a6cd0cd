//! The lazy sequence type and its combinators.
//!
//! A [`LazySequence`] is either `Empty` or a `Cons` cell holding two
//! memoized suspensions, one for the head and one for the tail. Forcing the
//! head never forces the tail, which is what lets infinite sequences such as
//! [`LazySequence::from`] and [`LazySequence::fibs`] exist.
//!
//! Two operations carry the recursion:
//!
//! - [`unfold`](LazySequence::unfold) generates a sequence from a seed, one
//!   cell per request. Generators, `map`, `filter`, `flat_map`, `take`,
//!   `take_while`, `zip_with`, `zip_all` and `tails` are all unfolds.
//! - [`fold_right`](LazySequence::fold_right) consumes a sequence and hands
//!   the caller the rest of the fold as a suspension, so it can stop early.
//!   `append` is a right fold.
//!
//! The combinators built on `unfold` keep their position in the source as a
//! cell whose tail is still suspended. A source cell's tail is forced only
//! when the next output cell is built, so a combinator never evaluates more
//! of its source than downstream consumers ask for.
//!
//! Consumers that always walk to the end (`exists`, `for_all`, `drop`,
//! `to_strict_list`) are plain loops and use constant stack.

use std::cell::Ref;
use std::fmt;
use std::rc::Rc;

use crate::config::SequenceConfig;
use crate::control::{Lazy, Thunk};
use crate::error::SequenceError;
use crate::persistent::PersistentList;

/// A lazily evaluated, memoized, possibly infinite sequence.
///
/// # Examples
///
/// ```rust
/// use funseq::persistent::PersistentList;
/// use funseq::stream::LazySequence;
///
/// let evens = LazySequence::from(0).filter(|n| n % 2 == 0);
/// assert_eq!(evens.take(3).to_strict_list(), Ok(PersistentList::of([0, 2, 4])));
/// ```
pub enum LazySequence<A> {
    /// The empty sequence.
    Empty,
    /// A cell with a suspended head and a suspended tail.
    Cons(Rc<ConsCell<A>>),
}

/// A non-empty cell of a [`LazySequence`].
///
/// Both fields are evaluated at most once. Every clone of the sequence
/// that reaches this cell sees the same cached values.
pub struct ConsCell<A> {
    head: Lazy<A>,
    tail: Lazy<LazySequence<A>>,
}

impl<A> ConsCell<A> {
    /// Forces and returns the head.
    ///
    /// # Panics
    ///
    /// Panics if the head's suspension panicked on an earlier access.
    pub fn head(&self) -> Ref<'_, A> {
        self.head.force()
    }

    /// Forces and returns the tail.
    ///
    /// # Panics
    ///
    /// Panics if the tail's suspension panicked on an earlier access.
    pub fn tail(&self) -> LazySequence<A> {
        self.tail.force().clone()
    }

    /// Returns `true` once the head has been evaluated.
    pub fn is_head_forced(&self) -> bool {
        self.head.is_initialized()
    }

    /// Returns `true` once the tail has been evaluated.
    pub fn is_tail_forced(&self) -> bool {
        self.tail.is_initialized()
    }
}

impl<A> Drop for ConsCell<A> {
    fn drop(&mut self) {
        // Unlink forced tails one cell at a time so long chains do not
        // recurse through Rc drops.
        let mut next = self.tail.take_initialized();
        while let Some(LazySequence::Cons(cell)) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(mut owned) => owned.tail.take_initialized(),
                Err(_) => None,
            };
        }
    }
}

/// A position in a source sequence, held in an unfold state.
///
/// `After` is a cell whose head was consumed and whose tail is still
/// suspended.
enum Cursor<A> {
    At(LazySequence<A>),
    After(Rc<ConsCell<A>>),
}

impl<A> Cursor<A> {
    fn resolve(self) -> LazySequence<A> {
        match self {
            Self::At(sequence) => sequence,
            Self::After(cell) => cell.tail(),
        }
    }

    fn past(sequence: LazySequence<A>) -> Self {
        match sequence {
            LazySequence::Empty => Self::At(LazySequence::Empty),
            LazySequence::Cons(cell) => Self::After(cell),
        }
    }
}

impl<A> LazySequence<A> {
    /// Returns the empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if this is [`LazySequence::Empty`].
    ///
    /// Never forces anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl<A: 'static> LazySequence<A> {
    /// Builds a cell from two suspensions.
    ///
    /// Neither closure runs until its value is first requested, and each
    /// runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::stream::LazySequence;
    ///
    /// let sequence = LazySequence::cons(|| 1, || -> LazySequence<i32> {
    ///     unreachable!("the tail is never forced")
    /// });
    /// assert_eq!(sequence.head_option(), Some(1));
    /// ```
    pub fn cons<H, T>(head: H, tail: T) -> Self
    where
        H: FnOnce() -> A + 'static,
        T: FnOnce() -> Self + 'static,
    {
        let head: Thunk<'static, A> = Box::new(head);
        let tail: Thunk<'static, Self> = Box::new(tail);
        Self::Cons(Rc::new(ConsCell {
            head: Lazy::new(head),
            tail: Lazy::new(tail),
        }))
    }

    fn with_tail(head: A, tail: Thunk<'static, Self>) -> Self {
        Self::Cons(Rc::new(ConsCell {
            head: Lazy::new_with_value(head),
            tail: Lazy::new(tail),
        }))
    }

    fn evaluated(head: A, tail: Self) -> Self {
        Self::Cons(Rc::new(ConsCell {
            head: Lazy::new_with_value(head),
            tail: Lazy::new_with_value(tail),
        }))
    }

    /// Generates a sequence from a seed.
    ///
    /// `step` is applied to the current state when a cell is built. `None`
    /// ends the sequence; `Some((element, next))` yields `element` and
    /// suspends the rest of the sequence on `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    /// use funseq::stream::LazySequence;
    ///
    /// let powers = LazySequence::unfold(1_u32, |n| n.checked_mul(2).map(|next| (n, next)));
    /// assert_eq!(powers.take(4).to_strict_list(), Ok(PersistentList::of([1, 2, 4, 8])));
    /// ```
    pub fn unfold<S, F>(state: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(A, S)> + 'static,
    {
        Self::unfold_shared(state, Rc::new(step))
    }

    fn unfold_shared<S: 'static>(state: S, step: Rc<dyn Fn(S) -> Option<(A, S)>>) -> Self {
        match step(state) {
            None => Self::Empty,
            Some((head, next)) => {
                Self::with_tail(head, Box::new(move || Self::unfold_shared(next, step)))
            }
        }
    }
}

impl<A: Clone + 'static> LazySequence<A> {
    // =========================================================================
    // Generators
    // =========================================================================

    /// A finite sequence of the given items.
    pub fn of<I: IntoIterator<Item = A>>(items: I) -> Self {
        let items: Rc<[A]> = items.into_iter().collect();
        Self::unfold(0_usize, move |index| {
            items.get(index).map(|item| (item.clone(), index + 1))
        })
    }

    /// A sequence over the elements of `list`, walking its cells on demand.
    #[must_use]
    pub fn from_list(list: &PersistentList<A>) -> Self {
        Self::unfold(list.clone(), |rest| {
            rest.uncons().map(|(head, tail)| (head.clone(), tail))
        })
    }

    /// The infinite sequence `value, value, value, ...`.
    pub fn constant(value: A) -> Self {
        Self::unfold((), move |()| Some((value.clone(), ())))
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the first element, forcing only the first head.
    #[must_use]
    pub fn head_option(&self) -> Option<A> {
        match self {
            Self::Empty => None,
            Self::Cons(cell) => Some(cell.head().clone()),
        }
    }

    /// Splits off the first element, forcing the first head and tail.
    #[must_use]
    pub fn uncons(&self) -> Option<(A, Self)> {
        match self {
            Self::Empty => None,
            Self::Cons(cell) => {
                let head = cell.head().clone();
                Some((head, cell.tail()))
            }
        }
    }

    /// Returns an iterator that forces one cell per call to `next`.
    #[must_use]
    pub fn iter(&self) -> LazySequenceIterator<A> {
        LazySequenceIterator {
            current: self.clone(),
        }
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Folds from the right, passing the rest of the fold as a suspension.
    ///
    /// `function` receives an element and the suspended fold of everything
    /// after it. If it never calls the suspension, the rest of the sequence
    /// is never evaluated, which is how a right fold can stop on an infinite
    /// sequence. Each forced suspension nests one call, so a function that
    /// always forces should be used only on short sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::stream::LazySequence;
    ///
    /// let found = LazySequence::from(0).fold_right(|| false, |n, rest| n > 10 || rest());
    /// assert!(found);
    /// ```
    pub fn fold_right<B, Z, F>(&self, seed: Z, function: F) -> B
    where
        B: 'static,
        Z: FnOnce() -> B + 'static,
        F: Fn(A, Thunk<'static, B>) -> B + 'static,
    {
        Self::fold_right_shared(self.clone(), Box::new(seed), Rc::new(function))
    }

    fn fold_right_shared<B: 'static>(
        sequence: Self,
        seed: Thunk<'static, B>,
        function: Rc<dyn Fn(A, Thunk<'static, B>) -> B>,
    ) -> B {
        match sequence {
            Self::Empty => seed(),
            Self::Cons(cell) => {
                let head = cell.head().clone();
                let next = Rc::clone(&function);
                let rest: Thunk<'static, B> =
                    Box::new(move || Self::fold_right_shared(cell.tail(), seed, next));
                function(head, rest)
            }
        }
    }

    /// Returns `true` if any element satisfies `predicate`, stopping at the
    /// first one that does.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().any(|element| predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`, stopping at the
    /// first one that does not.
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().all(|element| predicate(&element))
    }

    // =========================================================================
    // Truncation
    // =========================================================================

    /// The first `count` elements.
    ///
    /// The tail of the last kept cell is never forced.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        Self::unfold((Cursor::At(self.clone()), count), |(cursor, remaining)| {
            if remaining == 0 {
                return None;
            }
            let Self::Cons(cell) = cursor.resolve() else {
                return None;
            };
            let head = cell.head().clone();
            Some((head, (Cursor::After(cell), remaining - 1)))
        })
    }

    /// The longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::unfold(Cursor::At(self.clone()), move |cursor: Cursor<A>| {
            let Self::Cons(cell) = cursor.resolve() else {
                return None;
            };
            let head = cell.head().clone();
            predicate(&head).then(|| (head, Cursor::After(cell)))
        })
    }

    /// Skips the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InsufficientLength`] if the sequence ends
    /// before `count` elements were skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::stream::LazySequence;
    ///
    /// let sequence = LazySequence::of([1, 2, 3]);
    /// assert!(sequence.drop(3).is_ok_and(|rest| rest.is_empty()));
    /// assert!(sequence.drop(4).is_err());
    /// ```
    pub fn drop(&self, count: usize) -> Result<Self, SequenceError> {
        let mut current = self.clone();
        for dropped in 0..count {
            match current {
                Self::Empty => return Err(SequenceError::insufficient_length(count, dropped)),
                Self::Cons(cell) => current = cell.tail(),
            }
        }
        Ok(current)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to every element.
    pub fn map<B, F>(&self, function: F) -> LazySequence<B>
    where
        B: Clone + 'static,
        F: Fn(&A) -> B + 'static,
    {
        LazySequence::unfold(Cursor::At(self.clone()), move |cursor: Cursor<A>| {
            let Self::Cons(cell) = cursor.resolve() else {
                return None;
            };
            let mapped = function(&cell.head());
            Some((mapped, Cursor::After(cell)))
        })
    }

    /// Keeps the elements that satisfy `predicate`.
    ///
    /// Building a cell skips rejected elements in a loop, so on an infinite
    /// sequence with no further match the next cell never arrives.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::unfold(Cursor::At(self.clone()), move |cursor: Cursor<A>| {
            let mut sequence = cursor.resolve();
            loop {
                let Self::Cons(cell) = sequence else {
                    return None;
                };
                let head = cell.head().clone();
                if predicate(&head) {
                    return Some((head, Cursor::After(cell)));
                }
                sequence = cell.tail();
            }
        })
    }

    /// Concatenates `other` after this sequence.
    ///
    /// `other` is a suspension and is only evaluated when the end of this
    /// sequence is reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    /// use funseq::stream::LazySequence;
    ///
    /// let joined = LazySequence::of([1, 2]).append(|| LazySequence::from(3));
    /// assert_eq!(joined.take(4).to_strict_list(), Ok(PersistentList::of([1, 2, 3, 4])));
    /// ```
    pub fn append<F>(&self, other: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        self.fold_right(other, Self::with_tail)
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// Empty results are skipped in a loop while the next cell is built, so
    /// any number of consecutive empty results uses constant stack. On an
    /// infinite sequence whose results are all empty the next cell never
    /// arrives.
    pub fn flat_map<B, F>(&self, function: F) -> LazySequence<B>
    where
        B: Clone + 'static,
        F: Fn(&A) -> LazySequence<B> + 'static,
    {
        LazySequence::unfold(
            (Cursor::At(LazySequence::Empty), Cursor::At(self.clone())),
            move |(inner, outer): (Cursor<B>, Cursor<A>)| {
                let mut inner = inner.resolve();
                let mut outer = outer;
                loop {
                    if let LazySequence::Cons(cell) = inner {
                        let head = cell.head().clone();
                        return Some((head, (Cursor::After(cell), outer)));
                    }
                    let Self::Cons(next) = outer.resolve() else {
                        return None;
                    };
                    inner = function(&next.head());
                    outer = Cursor::After(next);
                }
            },
        )
    }

    /// Combines elements pairwise, ending with the shorter sequence.
    pub fn zip_with<B, C, F>(&self, other: &LazySequence<B>, function: F) -> LazySequence<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(&A, &B) -> C + 'static,
    {
        LazySequence::unfold(
            (Cursor::At(self.clone()), Cursor::At(other.clone())),
            move |(left, right): (Cursor<A>, Cursor<B>)| {
                let Self::Cons(left) = left.resolve() else {
                    return None;
                };
                let LazySequence::Cons(right) = right.resolve() else {
                    return None;
                };
                let combined = function(&left.head(), &right.head());
                Some((combined, (Cursor::After(left), Cursor::After(right))))
            },
        )
    }

    /// Pairs elements until both sequences end, padding the shorter one
    /// with `None`.
    ///
    /// Unlike [`PersistentList::zip_with`], nothing is truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    /// use funseq::stream::LazySequence;
    ///
    /// let zipped = LazySequence::of([1, 2]).zip_all(&LazySequence::of(["a"]));
    /// assert_eq!(
    ///     zipped.to_strict_list(),
    ///     Ok(PersistentList::of([(Some(1), Some("a")), (Some(2), None)]))
    /// );
    /// ```
    pub fn zip_all<B>(&self, other: &LazySequence<B>) -> LazySequence<(Option<A>, Option<B>)>
    where
        B: Clone + 'static,
    {
        LazySequence::unfold(
            (Cursor::At(self.clone()), Cursor::At(other.clone())),
            |(left, right): (Cursor<A>, Cursor<B>)| {
                let left = left.resolve();
                let right = right.resolve();
                let left_head = left.head_option();
                let right_head = right.head_option();
                (left_head.is_some() || right_head.is_some()).then(|| {
                    (
                        (left_head, right_head),
                        (Cursor::past(left), Cursor::past(right)),
                    )
                })
            },
        )
    }

    /// Every suffix of this sequence, longest first, ending with `Empty`.
    #[must_use]
    pub fn tails(&self) -> LazySequence<Self> {
        LazySequence::unfold(Some(Cursor::At(self.clone())), |state: Option<Cursor<A>>| {
            let sequence = state?.resolve();
            let rest = match &sequence {
                Self::Empty => None,
                Self::Cons(cell) => Some(Cursor::After(Rc::clone(cell))),
            };
            Some((sequence, rest))
        })
    }

    /// Right-to-left running folds, ending with `seed`.
    ///
    /// Each intermediate result is computed once and shared by the
    /// suffixes after it.
    ///
    /// The scan is eager: the whole receiver is walked and every
    /// intermediate result is computed when this is called, so the receiver
    /// must be finite and the returned sequence is fully evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    /// use funseq::stream::LazySequence;
    ///
    /// let sums = LazySequence::of([1, 2, 3]).scan_right(0, |element, sum| element + sum);
    /// assert_eq!(sums.to_strict_list(), Ok(PersistentList::of([6, 5, 3, 0])));
    /// ```
    pub fn scan_right<B, F>(&self, seed: B, function: F) -> LazySequence<B>
    where
        B: Clone + 'static,
        F: Fn(&A, &B) -> B,
    {
        let elements: Vec<A> = self.iter().collect();
        let last = LazySequence::evaluated(seed.clone(), LazySequence::Empty);
        let (_, scanned) = elements
            .iter()
            .rev()
            .fold((seed, last), |(accumulator, scanned), element| {
                let next = function(element, &accumulator);
                (next.clone(), LazySequence::evaluated(next, scanned))
            });
        scanned
    }

    // =========================================================================
    // Materialization
    // =========================================================================

    /// Collects the sequence into a [`PersistentList`] using the default
    /// [`SequenceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MaterializationLimitExceeded`] if the
    /// sequence has more elements than the configured limit, which is the
    /// case for every infinite sequence.
    pub fn to_strict_list(&self) -> Result<PersistentList<A>, SequenceError> {
        self.to_strict_list_with(&SequenceConfig::default())
    }

    /// Collects the sequence into a [`PersistentList`], stopping after
    /// `config.materialize_limit()` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MaterializationLimitExceeded`] if more than
    /// `config.materialize_limit()` elements are present.
    pub fn to_strict_list_with(
        &self,
        config: &SequenceConfig,
    ) -> Result<PersistentList<A>, SequenceError> {
        let limit = config.materialize_limit();
        let mut buffer = Vec::new();
        let mut current = self.clone();
        while let Some((head, rest)) = current.uncons() {
            if buffer.len() == limit {
                return Err(SequenceError::materialization_limit_exceeded(limit));
            }
            buffer.push(head);
            current = rest;
        }
        tracing::trace!(elements = buffer.len(), "materialized lazy sequence");
        Ok(PersistentList::of(buffer))
    }
}

impl<A: Clone + PartialEq + 'static> LazySequence<A> {
    /// Returns `true` if `prefix` matches the start of this sequence.
    ///
    /// Forces at most `prefix`'s length in cells of each sequence, plus the
    /// end marker of `prefix`.
    pub fn starts_with(&self, prefix: &Self) -> bool {
        let mut left = self.clone();
        let mut right = prefix.clone();
        loop {
            let Self::Cons(expected) = right else {
                return true;
            };
            let Self::Cons(actual) = left else {
                return false;
            };
            if *actual.head() != *expected.head() {
                return false;
            }
            right = expected.tail();
            if right.is_empty() {
                return true;
            }
            left = actual.tail();
        }
    }

    /// Returns `true` if `other` occurs contiguously anywhere in this
    /// sequence. An empty `other` occurs in every sequence.
    ///
    /// Every suffix from [`tails`](Self::tails) is tested with
    /// [`starts_with`](Self::starts_with).
    ///
    /// `other` must be finite: testing a suffix against an infinite `other`
    /// never finishes, even when every compared element matches. On an
    /// infinite receiver this returns `true` as soon as a match is found
    /// but never returns if there is none, so the receiver must be finite
    /// or contain a match.
    pub fn has_subsequence(&self, other: &Self) -> bool {
        self.tails().exists(|suffix| suffix.starts_with(other))
    }
}

impl LazySequence<i64> {
    /// Ascending integers from `start`. Ends after `i64::MAX`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from(start: i64) -> Self {
        Self::unfold(Some(start), |state: Option<i64>| {
            state.map(|current| (current, current.checked_add(1)))
        })
    }
}

impl LazySequence<u64> {
    /// The Fibonacci numbers `1, 1, 2, 3, 5, 8, ...`.
    ///
    /// Ends with the largest Fibonacci number that fits in a `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    /// use funseq::stream::LazySequence;
    ///
    /// assert_eq!(
    ///     LazySequence::fibs().take(6).to_strict_list(),
    ///     Ok(PersistentList::of([1, 1, 2, 3, 5, 8]))
    /// );
    /// ```
    #[must_use]
    pub fn fibs() -> Self {
        Self::unfold(Some((1_u64, Some(1_u64))), |state: Option<(u64, Option<u64>)>| {
            let (current, next) = state?;
            let following = next.map(|next| (next, next.checked_add(current)));
            Some((current, following))
        })
    }
}

impl<A> Clone for LazySequence<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(cell) => Self::Cons(Rc::clone(cell)),
        }
    }
}

impl<A> Default for LazySequence<A> {
    fn default() -> Self {
        Self::Empty
    }
}

/// Shows the evaluated prefix only: `?` for an unevaluated head and `...`
/// for an unevaluated tail.
impl<A: fmt::Debug> fmt::Debug for LazySequence<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazySequence[")?;
        let mut current = self.clone();
        let mut first = true;
        loop {
            let Self::Cons(cell) = current else {
                break;
            };
            if !first {
                formatter.write_str(", ")?;
            }
            first = false;
            match cell.head.get() {
                Some(head) => write!(formatter, "{:?}", *head)?,
                None => formatter.write_str("?")?,
            }
            let next = cell.tail.get().map(|tail| tail.clone());
            match next {
                Some(tail) => current = tail,
                None => {
                    formatter.write_str(", ...")?;
                    break;
                }
            }
        }
        formatter.write_str("]")
    }
}

/// An iterator over a [`LazySequence`], forcing one cell per element.
pub struct LazySequenceIterator<A> {
    current: LazySequence<A>,
}

impl<A: Clone + 'static> Iterator for LazySequenceIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, rest) = self.current.uncons()?;
        self.current = rest;
        Some(head)
    }
}

impl<A: Clone + 'static> IntoIterator for &LazySequence<A> {
    type Item = A;
    type IntoIter = LazySequenceIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
