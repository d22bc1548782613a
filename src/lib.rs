//! Undoable: undo/redo history for pure state-transition functions
//!
//! Undoable wraps any deterministic transition function `(state, command) -> state`
//! with a navigable history. The history stores commands, not states: the
//! present is always the result of replaying the past, and travelling
//! backward or forward recomputes it.
//!
//! # Core Concepts
//!
//! - **Command**: an immutable tagged request to transition state
//! - **History**: an immutable `{past, present, future}` value
//! - **Replay**: recomputing a state by folding the transition function over a log
//! - **Comparator**: a pluggable predicate that keeps no-op commands out of history
//! - **Group**: several commands recorded, undone and redone as one entry
//!
//! # Example
//!
//! ```rust
//! use undoable::{Command, HistoryEngine};
//! use std::convert::Infallible;
//!
//! fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
//!     Ok(match command.kind() {
//!         "INC" => state + 1,
//!         "DEC" => state - 1,
//!         _ => *state,
//!     })
//! }
//!
//! let engine: HistoryEngine<i64, _> = HistoryEngine::new(counter);
//! let history = engine.initial_state().unwrap();
//!
//! let history = engine.apply(&history, &Command::new("INC")).unwrap();
//! let history = engine
//!     .apply(&history, &Command::group(vec![Command::new("INC"), Command::new("INC")]))
//!     .unwrap();
//! assert_eq!(*history.present(), 3);
//!
//! // The group is a single entry, so one undo reverts both increments.
//! let history = engine.apply(&history, &Command::undo(1)).unwrap();
//! assert_eq!(*history.present(), 1);
//!
//! let selectors = engine.selectors();
//! assert_eq!(selectors.future_states(&history).unwrap(), vec![3]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, HistoryConfig, HistoryEngineBuilder};
pub use crate::core::{
    Command, CommandGroup, Comparator, HistoryEntry, HistoryError, HistoryState, State,
    TransitionFn,
};
pub use crate::engine::{Direction, HistoryEngine, Selectors};
