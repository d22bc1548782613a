//! Navigable command history.
//!
//! A [`HistoryState`] is an immutable value: every engine operation returns
//! a new history instead of mutating the previous one.

use super::command::{Command, HistoryEntry};
use super::replay::{flat_len, flatten};
use super::state::State;
use serde::Serialize;
use std::collections::VecDeque;

/// The `{past, present, future}` structure tracked by a history engine.
///
/// - `past` is ordered oldest to newest and always starts with the
///   initializing command.
/// - `present` is the state obtained by replaying `past`.
/// - `future` is ordered nearest first: the entry a redo reapplies is at
///   the front.
///
/// Histories are created by [`HistoryEngine`](crate::HistoryEngine), which
/// keeps these invariants.
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
///         _ => *state,
///     })
/// }
///
/// let engine: HistoryEngine<i64, _> = HistoryEngine::new(counter);
/// let history = engine.initial_state().unwrap();
/// let history = engine.apply(&history, &Command::new("INC")).unwrap();
///
/// assert_eq!(*history.present(), 1);
/// assert_eq!(history.past().len(), 2);
/// assert!(history.can_undo());
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryState<S: State> {
    pub(crate) past: Vec<HistoryEntry>,
    pub(crate) present: S,
    pub(crate) future: VecDeque<HistoryEntry>,
}

impl<S: State> HistoryState<S> {
    pub(crate) fn from_parts(
        past: Vec<HistoryEntry>,
        present: S,
        future: VecDeque<HistoryEntry>,
    ) -> Self {
        debug_assert!(!past.is_empty(), "history past must not be empty");
        Self {
            past,
            present,
            future,
        }
    }

    /// Entries that produced the present, oldest first.
    pub fn past(&self) -> &[HistoryEntry] {
        &self.past
    }

    pub fn present(&self) -> &S {
        &self.present
    }

    /// Undone entries, nearest first.
    pub fn future(&self) -> &VecDeque<HistoryEntry> {
        &self.future
    }

    /// Consume the history, keeping only the present state.
    pub fn into_present(self) -> S {
        self.present
    }

    /// Whether an undo step would change anything.
    ///
    /// The initializing command can never be undone.
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Whether a redo step would change anything.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Past commands with groups flattened, oldest first.
    pub fn past_commands(&self) -> Vec<&Command> {
        flatten(&self.past).collect()
    }

    /// The most recently applied command.
    ///
    /// When the latest entry is a group this is the group's last member.
    pub fn present_command(&self) -> Option<&Command> {
        self.past.last().and_then(|entry| entry.commands().last())
    }

    /// Future commands with groups flattened, nearest first.
    pub fn future_commands(&self) -> Vec<&Command> {
        flatten(&self.future).collect()
    }

    /// Number of commands `past` replays; also the flattened position of
    /// the next command to be applied.
    pub(crate) fn applied_len(&self) -> usize {
        flat_len(&self.past)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CommandGroup;

    fn entry(kind: &str) -> HistoryEntry {
        Command::new(kind).into()
    }

    fn pair(first: &str, second: &str) -> HistoryEntry {
        CommandGroup::new(vec![Command::new(first), Command::new(second)])
            .unwrap()
            .into()
    }

    fn sample() -> HistoryState<i64> {
        HistoryState::from_parts(
            vec![entry("INIT"), entry("INC"), pair("INC", "DEC")],
            1,
            VecDeque::from(vec![pair("INC", "INC"), entry("DEC")]),
        )
    }

    #[test]
    fn accessors_expose_parts() {
        let history = sample();

        assert_eq!(history.past().len(), 3);
        assert_eq!(*history.present(), 1);
        assert_eq!(history.future().len(), 2);
        assert_eq!(history.applied_len(), 4);
    }

    #[test]
    fn travel_availability() {
        let history = sample();
        assert!(history.can_undo());
        assert!(history.can_redo());

        let fresh: HistoryState<i64> =
            HistoryState::from_parts(vec![entry("INIT")], 0, VecDeque::new());
        assert!(!fresh.can_undo());
        assert!(!fresh.can_redo());
    }

    #[test]
    fn past_commands_are_flattened() {
        let history = sample();
        let kinds: Vec<&str> = history.past_commands().into_iter().map(Command::kind).collect();

        assert_eq!(kinds, vec!["INIT", "INC", "INC", "DEC"]);
    }

    #[test]
    fn present_command_is_last_flattened_member() {
        let history = sample();
        assert_eq!(history.present_command(), Some(&Command::new("DEC")));
    }

    #[test]
    fn future_commands_are_nearest_first() {
        let history = sample();
        let kinds: Vec<&str> = history
            .future_commands()
            .into_iter()
            .map(Command::kind)
            .collect();

        assert_eq!(kinds, vec!["INC", "INC", "DEC"]);
    }

    #[test]
    fn history_serializes_as_plain_logs() {
        let history: HistoryState<i64> = HistoryState::from_parts(
            vec![entry("INIT"), pair("INC", "INC")],
            2,
            VecDeque::new(),
        );

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "past": [{ "kind": "INIT" }, [{ "kind": "INC" }, { "kind": "INC" }]],
                "present": 2,
                "future": []
            })
        );
    }

    #[test]
    fn into_present_returns_state() {
        assert_eq!(sample().into_present(), 1);
    }
}
