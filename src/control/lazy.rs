//! Single-evaluation memoization cell.
//!
//! This module provides [`Lazy`], the suspended computation behind every
//! [`LazySequence`](crate::stream::LazySequence) cell. A `Lazy` holds either
//! its initializer or the value the initializer produced, and the
//! initializer runs at most once.
//!
//! # Examples
//!
//! ```rust
//! use funseq::control::Lazy;
//! use std::cell::Cell;
//!
//! let call_count = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     call_count.set(call_count.get() + 1);
//!     42
//! });
//!
//! assert_eq!(call_count.get(), 0);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(call_count.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// A boxed zero-argument computation, the initializer type used by sequence cells.
pub type Thunk<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// The internal state of a [`Lazy`] value.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// Not evaluated yet. Contains the initializer.
    Uninit(F),
    /// Evaluated. Contains the cached value.
    Init(T),
    /// The initializer is running, or it panicked.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// `Lazy<T, F>` defers computation until the value is first accessed via
/// [`force`](Lazy::force). The initializer is then taken out of the cell,
/// run, and its result cached. Later calls return the cached value.
///
/// # Thread Safety
///
/// `Lazy` is built on `RefCell` and is therefore not `Sync`. A `Lazy` can
/// never be forced from two threads at once, so single evaluation needs no
/// locking.
///
/// # Panics
///
/// If the initializer panics the cell stays poisoned and every later
/// `force` panics as well. Forcing a cell from inside its own initializer
/// panics for the same reason.
pub struct Lazy<T, F = Thunk<'static, T>> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value with the given initializer.
    ///
    /// The initializer is not called until [`force`](Lazy::force).
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// Panics if the cell is poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| "forced".to_string());
    /// assert_eq!(lazy.force().as_str(), "forced");
    /// ```
    pub fn force(&self) -> Ref<'_, T> {
        let needs_initialization = match &*self.state.borrow() {
            LazyState::Init(_) => false,
            LazyState::Uninit(_) => true,
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    /// Runs the initializer without holding a borrow of the cell.
    ///
    /// The cell is `Poisoned` while the initializer runs; it only becomes
    /// `Init` if the initializer returns.
    fn initialize(&self) {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), LazyState::Poisoned);
        let LazyState::Uninit(initializer) = previous else {
            *self.state.borrow_mut() = previous;
            return;
        };

        tracing::trace!("evaluating suspended computation");
        let value = initializer();
        *self.state.borrow_mut() = LazyState::Init(value);
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates a lazy value that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::control::Lazy;
    ///
    /// let lazy: Lazy<i32> = Lazy::new_with_value(42);
    /// assert!(lazy.is_initialized());
    /// ```
    #[inline]
    pub const fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }

    /// Returns the cached value without triggering evaluation.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the initializer panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }

    /// Moves the cached value out, leaving the cell poisoned.
    ///
    /// Used when tearing down long chains of cells.
    pub(crate) fn take_initialized(&mut self) -> Option<T> {
        let state = self.state.get_mut();
        if !matches!(state, LazyState::Init(_)) {
            return None;
        }
        match std::mem::replace(state, LazyState::Poisoned) {
            LazyState::Init(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
