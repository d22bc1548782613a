//! Builder for constructing history engines.

use crate::builder::config::HistoryConfig;
use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::{Command, Comparator, State, TransitionFn, INIT};
use crate::engine::HistoryEngine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing history engines with a fluent API.
pub struct HistoryEngineBuilder<S: State, T> {
    transition: T,
    init_command: Option<Command>,
    comparator: Comparator<S>,
    limit: Option<usize>,
}

impl<S: State + PartialEq, T: TransitionFn<S>> HistoryEngineBuilder<S, T> {
    /// Create a new builder around a transition function, comparing states
    /// by equality.
    pub fn new(transition: T) -> Self {
        Self::compared_by(transition, Comparator::equality())
    }
}

impl<S: State, T: TransitionFn<S>> HistoryEngineBuilder<S, T> {
    /// Create a builder for states that cannot be compared with `==`.
    pub fn compared_by(transition: T, comparator: Comparator<S>) -> Self {
        Self {
            transition,
            init_command: None,
            comparator,
            limit: None,
        }
    }

    /// Set the initializing command (defaults to [`INIT`]).
    pub fn init_command(mut self, command: Command) -> Self {
        self.init_command = Some(command);
        self
    }

    /// Set the comparator used by the append policy.
    pub fn comparator(mut self, comparator: Comparator<S>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Set the comparator using a closure.
    pub fn compare_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S, &S) -> bool + Send + Sync + 'static,
    {
        self.comparator = Comparator::new(predicate);
        self
    }

    /// Cap the number of undoable entries.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply declarative settings. Fields left unset in `config` keep the
    /// builder's current values.
    pub fn config(mut self, config: HistoryConfig) -> Self {
        if let Some(init) = config.init {
            self.init_command = Some(init);
        }
        if let Some(limit) = config.limit {
            self.limit = Some(limit);
        }
        self
    }

    /// Build the engine.
    /// Returns every configuration violation at once if any check fails.
    pub fn build(self) -> Result<HistoryEngine<S, T>, BuildError> {
        let init_command = self.init_command.unwrap_or_else(|| Command::new(INIT));

        match validate(&init_command, self.limit) {
            Validation::Success(_) => {}
            Validation::Failure(errors) => {
                return Err(BuildError::InvalidConfig {
                    violations: errors.iter().cloned().collect(),
                });
            }
        }

        tracing::debug!(
            init = init_command.kind(),
            limit = ?self.limit,
            "history engine built"
        );

        Ok(HistoryEngine::from_parts(
            self.transition,
            init_command,
            self.comparator,
            self.limit,
        ))
    }
}

impl<S: State + PartialEq, T: TransitionFn<S>> HistoryEngine<S, T> {
    /// Start building an engine around `transition`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::{Command, HistoryEngine};
    /// use std::convert::Infallible;
    ///
    /// fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
    ///     Ok(if command.kind() == "INC" { state + 1 } else { *state })
    /// }
    ///
    /// let engine: HistoryEngine<i64, _> = HistoryEngine::builder(counter)
    ///     .init_command(Command::new("INIT"))
    ///     .compare_with(|_, _| false)
    ///     .limit(100)
    ///     .build()
    ///     .unwrap();
    ///
    /// let history = engine.initial_state().unwrap();
    /// let history = engine.apply(&history, &Command::new("INIT")).unwrap();
    /// assert_eq!(history.past().len(), 2);
    /// ```
    pub fn builder(transition: T) -> HistoryEngineBuilder<S, T> {
        HistoryEngineBuilder::new(transition)
    }
}

/// Check every rule, accumulating ALL violations.
fn validate(
    init_command: &Command,
    limit: Option<usize>,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    checks.push(if limit == Some(0) {
        Validation::fail(ConfigViolation::ZeroLimit)
    } else {
        Validation::success(())
    });

    checks.push(if init_command.kind().is_empty() {
        Validation::fail(ConfigViolation::EmptyInitKind)
    } else {
        Validation::success(())
    });

    checks.push(if init_command.is_reserved() {
        Validation::fail(ConfigViolation::ReservedInitCommand {
            kind: init_command.kind().to_string(),
        })
    } else {
        Validation::success(())
    });

    Validation::all_vec(checks).map(|_| ())
}
