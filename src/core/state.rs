//! Core State trait for values tracked by a history.
//!
//! Any value produced by a transition function can live in a history as
//! long as it can be cloned (for replay and selectors) and debugged (for
//! diagnostics). Equality is only needed by the default comparator.

use std::fmt::Debug;

/// Marker trait for states managed by a [`HistoryEngine`](crate::HistoryEngine).
///
/// The trait has a blanket implementation, so plain values such as `i64`
/// or a domain struct deriving `Clone` and `Debug` qualify without any
/// boilerplate.
///
/// # Required Traits
///
/// - `Clone`: states are copied into selector results and working histories
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send + Sync + 'static`: comparators are shareable across threads
///
/// # Example
///
/// ```rust
/// use undoable::core::State;
///
/// #[derive(Clone, PartialEq, Debug, Default)]
/// struct Document {
///     title: String,
///     words: usize,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Document>();
/// assert_state::<i64>();
/// ```
pub trait State: Clone + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Debug + Send + Sync + 'static {}
