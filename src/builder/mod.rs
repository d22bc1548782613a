//! Builder API for history engine construction.
//!
//! This module provides a fluent builder and a serde-backed configuration
//! for creating history engines, validating the whole configuration before
//! an engine is handed out.

pub mod config;
pub mod error;
pub mod machine;

pub use config::HistoryConfig;
pub use error::{BuildError, ConfigViolation};
pub use machine::HistoryEngineBuilder;

use crate::core::{Comparator, State, TransitionFn};
use crate::engine::HistoryEngine;

/// Create an engine that records every command, even ones that leave the
/// state unchanged.
///
/// # Example
///
/// ```
/// use undoable::builder::recording_engine;
/// use undoable::{Command, HistoryEngine};
/// use std::convert::Infallible;
///
/// fn noop(state: &u8, _: &Command) -> Result<u8, Infallible> {
///     Ok(*state)
/// }
///
/// let engine: HistoryEngine<u8, _> = recording_engine(noop);
/// let history = engine.initial_state().unwrap();
/// let history = engine.apply(&history, &Command::new("TOUCH")).unwrap();
/// assert_eq!(history.past().len(), 2);
/// ```
pub fn recording_engine<S, T>(transition: T) -> HistoryEngine<S, T>
where
    S: State,
    T: TransitionFn<S>,
{
    HistoryEngine::compared_by(transition, Comparator::record_all())
}

/// Create an engine whose history keeps at most `limit` undoable entries.
///
/// A zero limit is raised to one, so at least the latest command can
/// always be undone.
///
/// # Example
///
/// ```
/// use undoable::builder::bounded_engine;
/// use undoable::{Command, HistoryEngine};
/// use std::convert::Infallible;
///
/// fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
///     Ok(if command.kind() == "INC" { state + 1 } else { *state })
/// }
///
/// let engine: HistoryEngine<i64, _> = bounded_engine(counter, 2);
/// let mut history = engine.initial_state().unwrap();
/// for _ in 0..5 {
///     history = engine.apply(&history, &Command::new("INC")).unwrap();
/// }
///
/// let oldest = engine.undo(&history, 10).unwrap();
/// assert_eq!(*oldest.present(), 3);
/// ```
pub fn bounded_engine<S, T>(transition: T, limit: usize) -> HistoryEngine<S, T>
where
    S: State + PartialEq,
    T: TransitionFn<S>,
{
    HistoryEngine::new(transition).with_limit(limit.max(1))
}
