//! Comparator predicates for change detection.
//!
//! A comparator decides whether a command changed state enough to deserve
//! a history entry. It is a pure, two-argument predicate supplied by the
//! caller, so state types without a meaningful `==` can still be compared
//! by value.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate reporting whether two states are equivalent.
///
/// When the comparator reports the previous and next state as equivalent,
/// the command is discarded instead of recorded.
///
/// # Example
///
/// ```rust
/// use undoable::core::Comparator;
///
/// #[derive(Clone, Debug)]
/// struct Draft {
///     text: String,
///     cursor: usize,
/// }
///
/// // Cursor moves alone are not worth an undo step.
/// let same_text = Comparator::new(|a: &Draft, b: &Draft| a.text == b.text);
///
/// let before = Draft { text: "hi".into(), cursor: 0 };
/// let moved = Draft { text: "hi".into(), cursor: 2 };
/// let typed = Draft { text: "hi!".into(), cursor: 3 };
///
/// assert!(same_text.equivalent(&before, &moved));
/// assert!(!same_text.equivalent(&before, &typed));
/// ```
pub struct Comparator<S: State> {
    predicate: Arc<dyn Fn(&S, &S) -> bool + Send + Sync>,
}

impl<S: State> Comparator<S> {
    /// Create a comparator from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &S) -> bool + Send + Sync + 'static,
    {
        Comparator {
            predicate: Arc::new(predicate),
        }
    }

    /// Never equivalent: every command enters history.
    pub fn record_all() -> Self {
        Self::new(|_: &S, _: &S| false)
    }

    /// Always equivalent: history never grows.
    pub fn freeze() -> Self {
        Self::new(|_: &S, _: &S| true)
    }

    /// Evaluate the predicate.
    pub fn equivalent(&self, previous: &S, next: &S) -> bool {
        (self.predicate)(previous, next)
    }
}

impl<S: State + PartialEq> Comparator<S> {
    /// Value equality. This is the default comparator.
    pub fn equality() -> Self {
        Self::new(|a: &S, b: &S| a == b)
    }
}

impl<S: State + PartialEq> Default for Comparator<S> {
    fn default() -> Self {
        Self::equality()
    }
}

impl<S: State> Clone for Comparator<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Comparator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
