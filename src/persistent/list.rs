//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], a cons-list with exactly two
//! variants: [`PersistentList::Nil`] and [`PersistentList::Cell`].
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), head and tail access
//! - O(n) append, reverse, length
//! - Every derived operation is a fold. `fold_left` is an iterative loop and
//!   `fold_right` is a left fold that builds a [`Continuation`], so no
//!   operation recurses once per element.
//!
//! Partial operations (`tail`, `set_head`, `set_tail`, `drop`, `drop_last`)
//! return [`SequenceError`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use funseq::persistent::PersistentList;
//!
//! let list = PersistentList::of([1, 2, 3]);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.length(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.length(), 3);
//! assert_eq!(extended.length(), 4);
//! assert_eq!(extended.tail(), Ok(list));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::ControlFlow;

use super::ReferenceCounter;
use crate::control::Continuation;
use crate::error::SequenceError;

/// A persistent (immutable) singly-linked list.
///
/// The variant set is closed: a list is either `Nil` or a `Cell` holding a
/// shared [`Node`]. Lists are never mutated; every "update" builds new cells
/// for the changed prefix and shares the rest.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `cons`         | O(1)       |
/// | `head`, `tail` | O(1)       |
/// | `set_head`     | O(1)       |
/// | `drop(n)`      | O(n)       |
/// | `length`       | O(n)       |
/// | `append`       | O(len(self)) |
/// | `fold_right`   | O(n), constant stack |
pub enum PersistentList<T> {
    /// The empty list.
    Nil,
    /// An element followed by the rest of the list.
    Cell(ReferenceCounter<Node<T>>),
}

/// A single cell of a [`PersistentList`].
pub struct Node<T> {
    head: T,
    tail: PersistentList<T>,
}

impl<T> Node<T> {
    /// The element stored in this cell.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// The rest of the list after this cell.
    #[inline]
    pub const fn tail(&self) -> &PersistentList<T> {
        &self.tail
    }
}

// Unlinks uniquely-owned cells one at a time. The default drop glue would
// recurse once per cell and overflow on long lists.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.tail);
        while let PersistentList::Cell(node) = next {
            next = match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => std::mem::take(&mut node.tail),
                Err(_) => break,
            };
        }
    }
}

impl<T> PersistentList<T> {
    /// Returns the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::empty();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Nil
    }

    /// Alias for [`empty`](Self::empty).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Nil
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::Nil.prepended(element)
    }

    /// Builds a list whose first element is the first item of `items`.
    ///
    /// `of([a, b, c])` is `Cell(a, Cell(b, Cell(c, Nil)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(["a", "b", "c"]);
    /// assert_eq!(list.head(), Some(&"a"));
    /// assert_eq!(list.to_string(), "[a, b, c]");
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut elements: Vec<T> = items.into_iter().collect();
        let mut list = Self::Nil;
        while let Some(element) = elements.pop() {
            list = list.prepended(element);
        }
        list
    }

    /// Prepends an element, sharing this list as the new tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        self.clone().prepended(element)
    }

    /// Owned variant of `cons` used by the folds; avoids a reference count
    /// round trip on the accumulator.
    #[inline]
    fn prepended(self, element: T) -> Self {
        Self::Cell(ReferenceCounter::new(Node {
            head: element,
            tail: self,
        }))
    }

    /// Returns `true` for `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the first element, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Nil => None,
            Self::Cell(node) => Some(&node.head),
        }
    }

    /// Returns the list without its first element.
    ///
    /// The returned list is the stored tail itself; nothing is copied.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyStructure`] for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// assert_eq!(list.tail(), Ok(PersistentList::of([2, 3])));
    /// assert!(PersistentList::<i32>::empty().tail().is_err());
    /// ```
    pub fn tail(&self) -> Result<Self, SequenceError> {
        match self {
            Self::Nil => Err(SequenceError::empty_structure("tail")),
            Self::Cell(node) => Ok(node.tail.clone()),
        }
    }

    /// Decomposes the list into its head and tail.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match self {
            Self::Nil => None,
            Self::Cell(node) => Some((&node.head, node.tail.clone())),
        }
    }

    /// Replaces the first element, sharing the tail with this list.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyStructure`] for `Nil`.
    pub fn set_head(&self, head: T) -> Result<Self, SequenceError> {
        match self {
            Self::Nil => Err(SequenceError::empty_structure("set_head")),
            Self::Cell(node) => Ok(node.tail.clone().prepended(head)),
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator { current: self }
    }

    /// Folds from the left: `f(f(f(seed, x1), x2), ..., xn)`.
    ///
    /// This is an iterative loop and is stack-safe for any length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// let digits = list.fold_left(String::new(), |text, element| format!("{text}{element}"));
    /// assert_eq!(digits, "123");
    /// ```
    pub fn fold_left<'a, B, F>(&'a self, seed: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(seed, function)
    }

    /// A left fold that stops as soon as `function` returns
    /// [`ControlFlow::Break`].
    ///
    /// Elements after the breaking one are never visited.
    pub fn try_fold_left<'a, B, F>(&'a self, seed: B, function: F) -> ControlFlow<B, B>
    where
        F: FnMut(B, &'a T) -> ControlFlow<B, B>,
    {
        self.iter().try_fold(seed, function)
    }

    /// Folds from the right: `f(x1, f(x2, ... f(xn, seed)))`.
    ///
    /// A single left-to-right pass composes one [`Continuation`], starting
    /// from the identity, by wrapping `f(x, ·)` around the previous one. The
    /// composed continuation is applied to `seed` once at the end. Neither
    /// pass recurses, so lists with hundreds of thousands of elements fold
    /// without growing the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// let rendered = list.fold_right("nil".to_string(), |element, rest| {
    ///     format!("({element} {rest})")
    /// });
    /// assert_eq!(rendered, "(1 (2 (3 nil)))");
    ///
    /// let long: PersistentList<u64> = (0..500_000).collect();
    /// assert_eq!(long.fold_right(0, |element, sum| element + sum), 124_999_750_000);
    /// ```
    pub fn fold_right<B, F>(&self, seed: B, function: F) -> B
    where
        F: Fn(&T, B) -> B,
    {
        let function = &function;
        self.fold_left(Continuation::identity(), |continuation, element| {
            continuation.compose(move |accumulator| function(element, accumulator))
        })
        .apply(seed)
    }

    /// Counts the elements with a left fold.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn length(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Short-circuits: `predicate` is not called on any element after the
    /// first one that fails. `Nil` satisfies every predicate.
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.try_fold_left((), |(), element| {
            if predicate(element) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// Returns `true` if some element satisfies `predicate`, stopping at the
    /// first match.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.try_fold_left((), |(), element| {
            if predicate(element) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Removes the first `count` elements.
    ///
    /// The result is a suffix of this list and shares all of its cells.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InsufficientLength`] if the list has fewer
    /// than `count` elements. Dropping exactly `length` elements yields `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// assert_eq!(list.drop(3), Ok(PersistentList::empty()));
    /// assert!(list.drop(4).is_err());
    /// ```
    pub fn drop(&self, count: usize) -> Result<Self, SequenceError> {
        let mut current = self;
        for dropped in 0..count {
            current = match current {
                Self::Nil => return Err(SequenceError::insufficient_length(count, dropped)),
                Self::Cell(node) => &node.tail,
            };
        }
        Ok(current.clone())
    }

    /// Drops the longest prefix whose elements satisfy `predicate`.
    ///
    /// Total: returns the whole list if the first element fails and `Nil` if
    /// every element passes.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Self::Cell(node) = current {
            if !predicate(&node.head) {
                break;
            }
            current = &node.tail;
        }
        current.clone()
    }

    /// Returns `true` if `prefix` matches the start of this list.
    pub fn starts_with(&self, prefix: &Self) -> bool
    where
        T: PartialEq,
    {
        let mut elements = self.iter();
        prefix.iter().all(|expected| elements.next() == Some(expected))
    }

    /// Returns `true` if `other` occurs contiguously, in order, somewhere in
    /// this list.
    ///
    /// The empty list is a subsequence of every list, including `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// assert!(list.has_subsequence(&PersistentList::of([2, 3])));
    /// assert!(!list.has_subsequence(&PersistentList::of([3, 2])));
    /// assert!(!list.has_subsequence(&PersistentList::of([1, 3])));
    /// ```
    pub fn has_subsequence(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        let mut suffix = self;
        loop {
            if suffix.starts_with(other) {
                return true;
            }
            match suffix {
                Self::Nil => return false,
                Self::Cell(node) => suffix = &node.tail,
            }
        }
    }

    /// Applies `function` to every element.
    ///
    /// Built with [`fold_right`](Self::fold_right), so element order is
    /// preserved without a reversal pass.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: Fn(&T) -> B,
    {
        self.fold_right(PersistentList::empty(), |element, accumulator| {
            accumulator.prepended(function(element))
        })
    }

    /// Combines elements pairwise, stopping at the end of the shorter list.
    ///
    /// A length mismatch is not an error; the longer list is truncated.
    #[must_use]
    pub fn zip_with<U, C, F>(&self, other: &PersistentList<U>, function: F) -> PersistentList<C>
    where
        F: Fn(&T, &U) -> C,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| function(left, right))
            .collect()
    }
}

impl<T: Clone> PersistentList<T> {
    /// Replaces the tail, keeping the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyStructure`] for `Nil`.
    pub fn set_tail(&self, tail: Self) -> Result<Self, SequenceError> {
        match self {
            Self::Nil => Err(SequenceError::empty_structure("set_tail")),
            Self::Cell(node) => Ok(tail.prepended(node.head.clone())),
        }
    }

    /// Returns every element except the last.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyStructure`] for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// assert_eq!(
    ///     PersistentList::of([1, 2, 3]).drop_last(),
    ///     Ok(PersistentList::of([1, 2]))
    /// );
    /// ```
    pub fn drop_last(&self) -> Result<Self, SequenceError> {
        // The seed marks "last element not seen yet"; the last element turns
        // it into an empty prefix and every earlier element is prepended.
        self.fold_right(None, |element, prefix: Option<Self>| {
            Some(prefix.map_or_else(Self::empty, |prefix| prefix.prepended(element.clone())))
        })
        .ok_or_else(|| SequenceError::empty_structure("drop_last"))
    }

    /// Concatenates two lists.
    ///
    /// The receiver's cells are rebuilt; `other` is shared unmodified.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.length()`
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |element, accumulator| {
            accumulator.prepended(element.clone())
        })
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.fold_left(Self::empty(), |accumulator, element| {
            accumulator.prepended(element.clone())
        })
    }

    /// Keeps the elements that satisfy `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.fold_right(Self::empty(), |element, accumulator| {
            if predicate(element) {
                accumulator.prepended(element.clone())
            } else {
                accumulator
            }
        })
    }

    /// Maps every element to a list and concatenates the results.
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> PersistentList<B>
    where
        B: Clone,
        F: Fn(&T) -> PersistentList<B>,
    {
        self.fold_right(PersistentList::empty(), |element, accumulator| {
            function(element).append(&accumulator)
        })
    }
}

// =============================================================================
// Specialized Methods for Nested Lists
// =============================================================================

impl<T: Clone> PersistentList<PersistentList<T>> {
    /// Flattens a list of lists.
    ///
    /// The last inner list is shared by the result; the others are copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::PersistentList;
    ///
    /// let nested = PersistentList::of([
    ///     PersistentList::of([1, 2]),
    ///     PersistentList::empty(),
    ///     PersistentList::of([3]),
    /// ]);
    /// assert_eq!(nested.concat(), PersistentList::of([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn concat(&self) -> PersistentList<T> {
        self.fold_right(PersistentList::empty(), |inner, accumulator| {
            inner.append(&accumulator)
        })
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: &'a PersistentList<T>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            PersistentList::Nil => None,
            PersistentList::Cell(node) => {
                self.current = &node.tail;
                Some(&node.head)
            }
        }
    }
}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Cells may be shared with other lists, so elements are cloned out.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = match &self.list {
            PersistentList::Nil => return None,
            PersistentList::Cell(node) => (node.head.clone(), node.tail.clone()),
        };
        self.list = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Cell(node) => Self::Cell(ReferenceCounter::clone(node)),
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::of(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
