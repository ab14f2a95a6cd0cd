//! Runtime configuration for lazy sequence materialization.

/// The default number of elements [`LazySequence::to_strict_list`] will
/// materialize before giving up.
///
/// [`LazySequence::to_strict_list`]: crate::stream::LazySequence::to_strict_list
pub const DEFAULT_MATERIALIZE_LIMIT: usize = 10_000_000;

/// Settings that bound otherwise unbounded work.
///
/// A lazy sequence may be infinite, and nothing in its representation says
/// so. Materializing one into a strict list therefore stops after
/// `materialize_limit` elements and reports
/// [`SequenceError::MaterializationLimitExceeded`].
///
/// # Examples
///
/// ```rust
/// use funseq::config::SequenceConfig;
/// use funseq::stream::LazySequence;
///
/// let config = SequenceConfig::default().with_materialize_limit(100);
/// assert!(LazySequence::from(0).to_strict_list_with(&config).is_err());
/// ```
///
/// [`SequenceError::MaterializationLimitExceeded`]: crate::error::SequenceError::MaterializationLimitExceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    materialize_limit: usize,
}

impl SequenceConfig {
    /// Creates a configuration with the default limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            materialize_limit: DEFAULT_MATERIALIZE_LIMIT,
        }
    }

    /// Creates a configuration with no materialization limit.
    ///
    /// Materializing an infinite sequence with this configuration never
    /// returns.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            materialize_limit: usize::MAX,
        }
    }

    /// Returns a copy with the given materialization limit.
    #[must_use]
    pub const fn with_materialize_limit(self, materialize_limit: usize) -> Self {
        Self { materialize_limit }
    }

    /// The maximum number of elements a materialization may produce.
    #[inline]
    #[must_use]
    pub const fn materialize_limit(&self) -> usize {
        self.materialize_limit
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new()
    }
}
