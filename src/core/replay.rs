//! Deterministic replay of command logs.
//!
//! A history never stores past states; it stores commands and derives any
//! state by folding the transition function over a flattened log.

use super::command::{Command, HistoryEntry};
use super::error::HistoryError;
use super::transition::TransitionFn;

/// Expand grouped entries in place, yielding every command in replay order.
///
/// # Example
///
/// ```rust
/// use undoable::core::{flatten, Command, CommandGroup, HistoryEntry};
///
/// let log = vec![
///     HistoryEntry::from(Command::new("INIT")),
///     HistoryEntry::from(CommandGroup::new(vec![Command::new("A"), Command::new("B")]).unwrap()),
///     HistoryEntry::from(Command::new("C")),
/// ];
///
/// let kinds: Vec<&str> = flatten(&log).map(Command::kind).collect();
/// assert_eq!(kinds, vec!["INIT", "A", "B", "C"]);
/// ```
pub fn flatten<'a, I>(log: I) -> impl Iterator<Item = &'a Command>
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    log.into_iter().flat_map(HistoryEntry::commands)
}

/// Number of commands a log replays.
pub(crate) fn flat_len<'a, I>(log: I) -> usize
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    log.into_iter().map(HistoryEntry::len).sum()
}

/// Recompute a state by folding `transition` over `log`.
///
/// Starts from `seed`, or from the transition function's own initial state
/// when no seed is given. Replay is pure: the log is not modified and the
/// same inputs always produce the same state.
///
/// # Errors
///
/// Returns [`HistoryError::Transition`] with the offending command and its
/// position in the flattened log if the transition function fails.
///
/// # Example
///
/// ```rust
/// use undoable::core::{replay, Command, HistoryEntry};
/// use std::convert::Infallible;
///
/// fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
///     Ok(if command.kind() == "INC" { state + 1 } else { *state })
/// }
///
/// let log: Vec<HistoryEntry> = ["INIT", "INC", "INC"]
///     .into_iter()
///     .map(|kind| Command::new(kind).into())
///     .collect();
///
/// assert_eq!(replay(&counter, &log, None).unwrap(), 2);
/// assert_eq!(replay(&counter, &log, Some(10)).unwrap(), 12);
/// ```
pub fn replay<S, T>(
    transition: &T,
    log: &[HistoryEntry],
    seed: Option<S>,
) -> Result<S, HistoryError>
where
    T: TransitionFn<S> + ?Sized,
{
    let seed = seed.unwrap_or_else(|| transition.initial());
    fold(transition, seed, flatten(log), 0)
}

/// Fold `commands` onto `seed`; `offset` is the flattened position of the
/// first command, used for error reporting.
pub(crate) fn fold<'a, S, T, I>(
    transition: &T,
    seed: S,
    commands: I,
    offset: usize,
) -> Result<S, HistoryError>
where
    T: TransitionFn<S> + ?Sized,
    I: IntoIterator<Item = &'a Command>,
{
    commands
        .into_iter()
        .enumerate()
        .try_fold(seed, |state, (index, command)| {
            transition
                .apply(&state, command)
                .map_err(|source| HistoryError::transition(command, offset + index, source))
        })
}
