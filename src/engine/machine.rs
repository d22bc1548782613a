//! History engine that makes a transition function undoable.

use crate::core::{
    flat_len, fold, replay, Command, CommandGroup, Comparator, HistoryEntry, HistoryError,
    HistoryState, State, TransitionFn, INIT,
};
use crate::engine::directive::Directive;
use crate::engine::selectors::Selectors;
use std::collections::VecDeque;
use std::fmt;

/// Direction of travel through history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Wraps a transition function with a navigable history.
///
/// Every operation is a pure function from an old [`HistoryState`] (plus a
/// command) to a new one; the engine itself holds only configuration.
pub struct HistoryEngine<S: State, T> {
    transition: T,
    init_command: Command,
    comparator: Comparator<S>,
    limit: Option<usize>,
}

impl<S: State + PartialEq, T: TransitionFn<S>> HistoryEngine<S, T> {
    /// Create an engine with the default initializing command, equality
    /// comparator and no history limit.
    pub fn new(transition: T) -> Self {
        Self::compared_by(transition, Comparator::equality())
    }
}

impl<S: State, T: TransitionFn<S>> HistoryEngine<S, T> {
    /// Create an engine that gates recording with `comparator`.
    ///
    /// This is the constructor for states without `PartialEq`.
    pub fn compared_by(transition: T, comparator: Comparator<S>) -> Self {
        Self::from_parts(transition, Command::new(INIT), comparator, None)
    }

    pub(crate) fn from_parts(
        transition: T,
        init_command: Command,
        comparator: Comparator<S>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            transition,
            init_command,
            comparator,
            limit,
        }
    }

    pub(crate) fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn transition(&self) -> &T {
        &self.transition
    }

    pub fn init_command(&self) -> &Command {
        &self.init_command
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Read-only projections bound to this engine's transition function.
    pub fn selectors(&self) -> Selectors<'_, S, T> {
        Selectors::new(&self.transition)
    }

    /// The history before any command: only the initializing command, whose
    /// result on the transition function's initial state is the present.
    pub fn initial_state(&self) -> Result<HistoryState<S>, HistoryError> {
        let past = vec![HistoryEntry::Single(self.init_command.clone())];
        let present = replay(&self.transition, &past, None)?;
        Ok(HistoryState::from_parts(past, present, VecDeque::new()))
    }

    /// Rebuild a history from command logs, recomputing the present.
    ///
    /// `future` is ordered nearest first. A configured limit is applied to
    /// `past` the same way appends apply it.
    pub fn restore(
        &self,
        mut past: Vec<HistoryEntry>,
        future: Vec<HistoryEntry>,
    ) -> Result<HistoryState<S>, HistoryError> {
        if past.is_empty() {
            return Err(HistoryError::EmptyHistory);
        }
        if let Some(limit) = self.limit {
            squash_oldest(&mut past, limit);
        }
        let present = replay(&self.transition, &past, None)?;
        Ok(HistoryState::from_parts(past, present, future.into()))
    }

    /// Apply a command.
    ///
    /// Reserved UNDO/REDO commands travel, GROUP records its members as one
    /// entry, and any other command goes through the append policy.
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
    /// let history = engine.initial_state().unwrap();
    ///
    /// let history = engine.apply(&history, &Command::new("INC")).unwrap();
    /// let history = engine.apply(&history, &Command::new("INC")).unwrap();
    /// assert_eq!(*history.present(), 2);
    ///
    /// let history = engine.apply(&history, &Command::undo(1)).unwrap();
    /// assert_eq!(*history.present(), 1);
    ///
    /// let history = engine.apply(&history, &Command::redo(1)).unwrap();
    /// assert_eq!(*history.present(), 2);
    /// ```
    pub fn apply(
        &self,
        state: &HistoryState<S>,
        command: &Command,
    ) -> Result<HistoryState<S>, HistoryError> {
        match Directive::parse(command)? {
            Directive::Undo(steps) => self.travel(Direction::Undo, state, steps),
            Directive::Redo(steps) => self.travel(Direction::Redo, state, steps),
            Directive::Group(group) => self.record_group(state, group),
            Directive::Record => self.record(state, command),
        }
    }

    /// Reducer-style entry point: a missing history starts from
    /// [`initial_state`](Self::initial_state).
    pub fn dispatch(
        &self,
        state: Option<&HistoryState<S>>,
        command: &Command,
    ) -> Result<HistoryState<S>, HistoryError> {
        match state {
            Some(state) => self.apply(state, command),
            None => self.apply(&self.initial_state()?, command),
        }
    }

    /// Append policy: record `command` unless the comparator judges the
    /// resulting state equivalent to the present.
    pub fn record(
        &self,
        state: &HistoryState<S>,
        command: &Command,
    ) -> Result<HistoryState<S>, HistoryError> {
        let position = state.applied_len();
        let present = self
            .transition
            .apply(state.present(), command)
            .map_err(|source| HistoryError::transition(command, position, source))?;

        Ok(self.commit(state, HistoryEntry::Single(command.clone()), present))
    }

    /// Record a batch of commands as a single history entry.
    pub fn record_group(
        &self,
        state: &HistoryState<S>,
        group: CommandGroup,
    ) -> Result<HistoryState<S>, HistoryError> {
        let present = fold(
            &self.transition,
            state.present().clone(),
            &group,
            state.applied_len(),
        )?;

        Ok(self.commit(state, HistoryEntry::Group(group), present))
    }

    pub fn undo(
        &self,
        state: &HistoryState<S>,
        steps: usize,
    ) -> Result<HistoryState<S>, HistoryError> {
        self.travel(Direction::Undo, state, steps)
    }

    pub fn redo(
        &self,
        state: &HistoryState<S>,
        steps: usize,
    ) -> Result<HistoryState<S>, HistoryError> {
        self.travel(Direction::Redo, state, steps)
    }

    pub fn undo_once(&self, state: &HistoryState<S>) -> Result<HistoryState<S>, HistoryError> {
        self.travel(Direction::Undo, state, 1)
    }

    pub fn redo_once(&self, state: &HistoryState<S>) -> Result<HistoryState<S>, HistoryError> {
        self.travel(Direction::Redo, state, 1)
    }

    /// Move through history by up to `steps` entries.
    ///
    /// Stops early once no further step is possible, so asking for more
    /// steps than exist clamps instead of failing.
    pub fn travel(
        &self,
        direction: Direction,
        state: &HistoryState<S>,
        steps: usize,
    ) -> Result<HistoryState<S>, HistoryError> {
        let mut next = state.clone();
        let performed = match direction {
            Direction::Undo => self.step_back(&mut next, steps)?,
            Direction::Redo => self.step_forward(&mut next, steps)?,
        };

        tracing::debug!(%direction, requested = steps, performed, "history travel");
        Ok(next)
    }

    /// Entries are moved one at a time; the present depends only on the
    /// final past, so it is replayed once at the end.
    fn step_back(
        &self,
        history: &mut HistoryState<S>,
        steps: usize,
    ) -> Result<usize, HistoryError> {
        let mut performed = 0;
        while performed < steps && history.can_undo() {
            let Some(entry) = history.past.pop() else {
                break;
            };
            history.future.push_front(entry);
            performed += 1;
        }

        if performed > 0 {
            history.present = replay(&self.transition, &history.past, None)?;
        }
        Ok(performed)
    }

    /// Each reinstated entry is folded onto the previous present.
    fn step_forward(
        &self,
        history: &mut HistoryState<S>,
        steps: usize,
    ) -> Result<usize, HistoryError> {
        let mut performed = 0;
        while performed < steps {
            let Some(entry) = history.future.pop_front() else {
                break;
            };
            let position = flat_len(&history.past);
            history.present = fold(
                &self.transition,
                history.present.clone(),
                entry.commands(),
                position,
            )?;
            history.past.push(entry);
            performed += 1;
        }
        Ok(performed)
    }

    fn commit(&self, state: &HistoryState<S>, entry: HistoryEntry, present: S) -> HistoryState<S> {
        if self.comparator.equivalent(state.present(), &present) {
            tracing::trace!(kind = first_kind(&entry), "command left state unchanged, discarded");
            return state.clone();
        }

        tracing::trace!(
            kind = first_kind(&entry),
            commands = entry.len(),
            "command recorded"
        );

        let mut past = Vec::with_capacity(state.past().len() + 1);
        past.extend_from_slice(state.past());
        past.push(entry);

        if let Some(limit) = self.limit {
            squash_oldest(&mut past, limit);
        }

        HistoryState::from_parts(past, present, VecDeque::new())
    }
}

impl<S: State, T: Clone> Clone for HistoryEngine<S, T> {
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
            init_command: self.init_command.clone(),
            comparator: self.comparator.clone(),
            limit: self.limit,
        }
    }
}

impl<S: State, T> fmt::Debug for HistoryEngine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEngine")
            .field("init_command", &self.init_command)
            .field("comparator", &self.comparator)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Keep at most `limit` undoable entries by merging the oldest undoable
/// entry into the first one. The flattened log is unchanged, so the
/// present still equals a replay of the past.
fn squash_oldest(past: &mut Vec<HistoryEntry>, limit: usize) {
    while past.len() > limit + 1 {
        past[0] = past[0].merge(&past[1]);
        past.remove(1);
        tracing::trace!(limit, "history limit reached, oldest entry squashed");
    }
}

fn first_kind(entry: &HistoryEntry) -> &str {
    entry.commands().first().map_or("", Command::kind)
}
