//! `traverse` and `sequence` for [`PersistentList`].
//!
//! These turn a list of effectful values inside out: a list of `Option`s
//! becomes an optional list, a list of `Result`s becomes a result holding a
//! list. They are right folds, so they inherit the stack safety of
//! [`PersistentList::fold_right`].
//!
//! # Examples
//!
//! ```rust
//! use funseq::persistent::PersistentList;
//!
//! let inputs = PersistentList::of(["1", "2", "3"]);
//! let parsed = inputs.traverse_result(|text| text.parse::<i32>());
//! assert_eq!(parsed, Ok(PersistentList::of([1, 2, 3])));
//!
//! let halves = PersistentList::of([2, 3, 4])
//!     .traverse_option(|n| (n % 2 == 0).then_some(n / 2));
//! assert_eq!(halves, None);
//! ```

use super::PersistentList;

impl<T> PersistentList<T> {
    /// Applies `function` to every element and collects the results if all
    /// of them are `Some`.
    ///
    /// `Nil` traverses to `Some(Nil)`.
    pub fn traverse_option<B, F>(&self, function: F) -> Option<PersistentList<B>>
    where
        F: Fn(&T) -> Option<B>,
    {
        self.fold_right(Some(PersistentList::empty()), |element, accumulator| {
            let tail = accumulator?;
            function(element).map(|head| tail.cons(head))
        })
    }

    /// Applies `function` to every element and collects the results if all
    /// of them are `Ok`.
    ///
    /// On failure the error of the first failing element, in list order, is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn traverse_result<B, E, F>(&self, function: F) -> Result<PersistentList<B>, E>
    where
        F: Fn(&T) -> Result<B, E>,
    {
        // Folding from the right, an error further left must replace an error
        // already in the accumulator, so the element is evaluated first.
        self.fold_right(Ok(PersistentList::empty()), |element, accumulator| {
            let head = function(element)?;
            accumulator.map(|tail| tail.cons(head))
        })
    }
}

impl<T: Clone> PersistentList<Option<T>> {
    /// Turns a list of options into an optional list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let all = PersistentList::of([Some(1), Some(2)]);
    /// assert_eq!(all.sequence_option(), Some(PersistentList::of([1, 2])));
    ///
    /// let gap = PersistentList::of([Some(1), None]);
    /// assert_eq!(gap.sequence_option(), None);
    /// ```
    #[must_use]
    pub fn sequence_option(&self) -> Option<PersistentList<T>> {
        self.traverse_option(Clone::clone)
    }
}

impl<T: Clone, E: Clone> PersistentList<Result<T, E>> {
    /// Turns a list of results into a result holding a list.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` in list order.
    pub fn sequence_result(&self) -> Result<PersistentList<T>, E> {
        self.traverse_result(Clone::clone)
    }
}
