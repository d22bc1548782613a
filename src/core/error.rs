//! History error types.

use super::command::Command;
use super::transition::BoxError;
use thiserror::Error;

/// Errors raised while applying commands to a history.
///
/// Undoing past the initializing command, redoing past the end of the
/// future and recording a command the comparator judges unchanged are not
/// errors; those return the history unchanged.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// An UNDO/REDO payload was not a non-negative integer.
    #[error("Invalid step count {value}: expected a non-negative integer")]
    InvalidStepCount { value: String },

    /// A GROUP payload was missing, not a list of commands, or empty.
    #[error("Invalid group: {reason}")]
    InvalidGroup { reason: String },

    /// The wrapped transition function rejected a command.
    #[error("Transition failed for command '{}' at position {}: {}", .command.kind(), .position, .source)]
    Transition {
        command: Command,
        position: usize,
        #[source]
        source: BoxError,
    },

    /// A history was restored from an empty past log.
    #[error("History past must contain at least the initializing command")]
    EmptyHistory,
}

impl HistoryError {
    pub(crate) fn transition(command: &Command, position: usize, source: BoxError) -> Self {
        Self::Transition {
            command: command.clone(),
            position,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_names_command_and_position() {
        let error = HistoryError::transition(&Command::new("FAIL"), 3, "counter overflow".into());

        assert_eq!(
            error.to_string(),
            "Transition failed for command 'FAIL' at position 3: counter overflow"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn step_count_error_shows_value() {
        let error = HistoryError::InvalidStepCount {
            value: "1.5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid step count 1.5: expected a non-negative integer"
        );
    }
}
