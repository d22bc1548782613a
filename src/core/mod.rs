//! Core history types and replay logic.
//!
//! This module contains the pure functional core:
//! - Commands and history entries
//! - The transition-function and comparator capabilities
//! - Deterministic replay over command logs
//! - The immutable `{past, present, future}` history value
//!
//! All logic in this module is pure (no side effects).

mod command;
mod comparator;
mod error;
mod history;
mod replay;
mod state;
mod transition;

pub use command::{Command, CommandGroup, HistoryEntry, GROUP, INIT, REDO, UNDO};
pub use comparator::Comparator;
pub use error::HistoryError;
pub use history::HistoryState;
pub use replay::{flatten, replay};
pub use state::State;
pub use transition::{BoxError, TransitionFn};

pub(crate) use replay::{flat_len, fold};
