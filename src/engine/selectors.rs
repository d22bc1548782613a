//! Read-only projections over a history.
//!
//! Selectors never modify the history they read. State selectors replay
//! the command logs with the engine's transition function; command
//! selectors only flatten the logs.

use crate::core::{fold, Command, HistoryEntry, HistoryError, HistoryState, State, TransitionFn};
use std::marker::PhantomData;

/// Projections bound to a transition function.
///
/// # Example
///
/// ```rust
/// use undoable::{Command, HistoryEngine};
/// use std::convert::Infallible;
///
/// fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
///     Ok(match command.kind() {
///         "INC" => state + 1,
///         "DEC" => state - 1,
///         _ => *state,
///     })
/// }
///
/// let engine: HistoryEngine<i64, _> = HistoryEngine::new(counter);
/// let mut history = engine.initial_state().unwrap();
/// for kind in ["INC", "INC", "DEC"] {
///     history = engine.apply(&history, &Command::new(kind)).unwrap();
/// }
/// let history = engine.undo(&history, 1).unwrap();
///
/// let selectors = engine.selectors();
/// assert_eq!(selectors.past_states(&history).unwrap(), vec![0, 1]);
/// assert_eq!(*selectors.present_state(&history), 2);
/// assert_eq!(selectors.future_states(&history).unwrap(), vec![1]);
/// ```
pub struct Selectors<'a, S, T> {
    transition: &'a T,
    _state: PhantomData<fn() -> S>,
}

impl<'a, S: State, T: TransitionFn<S>> Selectors<'a, S, T> {
    pub fn new(transition: &'a T) -> Self {
        Self {
            transition,
            _state: PhantomData,
        }
    }

    pub fn present_state<'h>(&self, history: &'h HistoryState<S>) -> &'h S {
        history.present()
    }

    /// The state after each past entry except the latest, oldest first.
    ///
    /// States are folded forward incrementally, one entry at a time.
    pub fn past_states(&self, history: &HistoryState<S>) -> Result<Vec<S>, HistoryError> {
        let settled = history.past().len().saturating_sub(1);
        self.states_along(
            self.transition.initial(),
            0,
            &history.past()[..settled],
        )
    }

    /// The state reached after each future entry, applied on top of the
    /// present, nearest first.
    pub fn future_states(&self, history: &HistoryState<S>) -> Result<Vec<S>, HistoryError> {
        self.states_along(
            history.present().clone(),
            history.applied_len(),
            history.future(),
        )
    }

    pub fn past_commands<'h>(&self, history: &'h HistoryState<S>) -> Vec<&'h Command> {
        history.past_commands()
    }

    /// The most recently applied command, or the last member when the
    /// latest entry is a group.
    pub fn present_command<'h>(&self, history: &'h HistoryState<S>) -> Option<&'h Command> {
        history.present_command()
    }

    pub fn future_commands<'h>(&self, history: &'h HistoryState<S>) -> Vec<&'h Command> {
        history.future_commands()
    }

    fn states_along<'h, I>(
        &self,
        seed: S,
        offset: usize,
        entries: I,
    ) -> Result<Vec<S>, HistoryError>
    where
        I: IntoIterator<Item = &'h HistoryEntry>,
    {
        let mut states = Vec::new();
        let mut current = seed;
        let mut position = offset;

        for entry in entries {
            current = fold(self.transition, current, entry.commands(), position)?;
            position += entry.len();
            states.push(current.clone());
        }

        Ok(states)
    }
}
