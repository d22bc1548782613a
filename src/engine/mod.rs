//! The history engine and its selectors.
//!
//! This module turns a pure transition function into an undoable one:
//!
//! - **Engine**: applies commands, travels through history and groups
//!   commands into atomic entries
//! - **Selectors**: read-only projections of past, present and future
//!
//! Reserved commands (`UNDO`, `REDO`, `GROUP`) are interpreted here; every
//! other command is forwarded to the wrapped transition function.

mod directive;
mod machine;
mod selectors;

pub use machine::{Direction, HistoryEngine};
pub use selectors::Selectors;
