//! Interpretation of reserved commands.

use crate::core::{Command, CommandGroup, HistoryError, GROUP, REDO, UNDO};
use serde::Deserialize;
use serde_json::Value;

/// What the engine should do with an incoming command.
#[derive(Debug, PartialEq)]
pub(crate) enum Directive {
    Undo(usize),
    Redo(usize),
    Group(CommandGroup),
    /// An ordinary domain command, routed through the append policy.
    Record,
}

impl Directive {
    pub(crate) fn parse(command: &Command) -> Result<Self, HistoryError> {
        match command.kind() {
            UNDO => step_count(command.data()).map(Self::Undo),
            REDO => step_count(command.data()).map(Self::Redo),
            GROUP => group_payload(command.data()).map(Self::Group),
            _ => Ok(Self::Record),
        }
    }
}

/// Absent or null payloads mean one step. Integral floats such as `2.0`
/// are accepted and saturate at `usize::MAX`; anything fractional,
/// negative or non-numeric is not.
fn step_count(data: Option<&Value>) -> Result<usize, HistoryError> {
    let invalid = |value: &Value| HistoryError::InvalidStepCount {
        value: value.to_string(),
    };

    let number = match data {
        None | Some(Value::Null) => return Ok(1),
        Some(Value::Number(number)) => number,
        Some(other) => return Err(invalid(other)),
    };

    if let Some(steps) = number.as_u64() {
        return Ok(usize::try_from(steps).unwrap_or(usize::MAX));
    }

    match number.as_f64() {
        Some(steps) if steps >= 0.0 && steps.fract() == 0.0 => {
            Ok(steps.min(usize::MAX as f64) as usize)
        }
        _ => Err(invalid(&Value::Number(number.clone()))),
    }
}

fn group_payload(data: Option<&Value>) -> Result<CommandGroup, HistoryError> {
    let Some(Value::Array(members)) = data else {
        return Err(HistoryError::InvalidGroup {
            reason: "payload must be a list of commands".to_string(),
        });
    };

    let commands = members
        .iter()
        .map(Command::deserialize)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| HistoryError::InvalidGroup {
            reason: format!("malformed member: {e}"),
        })?;

    CommandGroup::new(commands)
}
