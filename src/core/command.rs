//! Commands and history log entries.
//!
//! A [`Command`] is an immutable, tagged request to transition state. The
//! history records commands rather than states; a [`HistoryEntry`] is one
//! slot in a command log and is either a single command or an atomic
//! [`CommandGroup`].

use super::error::HistoryError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved kind that moves the present backward through history.
pub const UNDO: &str = "undoable/UNDO";

/// Reserved kind that moves the present forward through history.
pub const REDO: &str = "undoable/REDO";

/// Reserved kind that records a batch of commands as one history entry.
pub const GROUP: &str = "undoable/GROUP";

/// Kind of the default initializing command.
pub const INIT: &str = "undoable/INIT";

/// An opaque tagged request to transition state.
///
/// # Example
///
/// ```rust
/// use undoable::core::Command;
/// use serde_json::json;
///
/// let increment = Command::new("INC");
/// assert_eq!(increment.kind(), "INC");
/// assert!(increment.data().is_none());
///
/// let add = Command::with_data("ADD", json!(5));
/// assert_eq!(add.data(), Some(&json!(5)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl Command {
    /// Create a command without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
        }
    }

    /// Create a command carrying a payload.
    pub fn with_data(kind: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            data: Some(data.into()),
        }
    }

    /// Undo `steps` history entries.
    ///
    /// ```rust
    /// use undoable::core::{Command, UNDO};
    ///
    /// let undo = Command::undo(3);
    /// assert_eq!(undo.kind(), UNDO);
    /// assert!(undo.is_reserved());
    /// ```
    pub fn undo(steps: usize) -> Self {
        Self::with_data(UNDO, steps)
    }

    /// Redo `steps` history entries.
    pub fn redo(steps: usize) -> Self {
        Self::with_data(REDO, steps)
    }

    /// Record `commands` as a single, atomic history entry.
    ///
    /// The payload is validated when the command is applied, so an empty
    /// group only fails at that point.
    pub fn group(commands: impl IntoIterator<Item = Command>) -> Self {
        let members = commands.into_iter().map(Command::into_value).collect();
        Self::with_data(GROUP, Value::Array(members))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Whether this command is one of the travel or grouping kinds
    /// interpreted by the engine itself.
    pub fn is_reserved(&self) -> bool {
        matches!(self.kind.as_str(), UNDO | REDO | GROUP)
    }

    fn into_value(self) -> Value {
        let mut object = Map::new();
        object.insert("kind".to_string(), Value::String(self.kind));
        if let Some(data) = self.data {
            object.insert("data".to_string(), data);
        }
        Value::Object(object)
    }
}

/// A non-empty, ordered batch of domain commands applied as one unit.
///
/// # Example
///
/// ```rust
/// use undoable::core::{Command, CommandGroup};
///
/// let group = CommandGroup::new(vec![Command::new("INC"), Command::new("INC")]).unwrap();
/// assert_eq!(group.len(), 2);
///
/// assert!(CommandGroup::new(Vec::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Command>", into = "Vec<Command>")]
pub struct CommandGroup(Vec<Command>);

impl CommandGroup {
    /// Validate and wrap a batch of commands.
    ///
    /// Fails with [`HistoryError::InvalidGroup`] when the batch is empty or
    /// contains a reserved command.
    pub fn new(commands: Vec<Command>) -> Result<Self, HistoryError> {
        if commands.is_empty() {
            return Err(HistoryError::InvalidGroup {
                reason: "a group needs at least one command".to_string(),
            });
        }

        if let Some(reserved) = commands.iter().find(|c| c.is_reserved()) {
            return Err(HistoryError::InvalidGroup {
                reason: format!("'{}' cannot be a group member", reserved.kind()),
            });
        }

        Ok(Self(commands))
    }

    /// Concatenate two non-empty runs of already validated commands.
    pub(crate) fn concat(first: &[Command], second: &[Command]) -> Self {
        Self(first.iter().chain(second).cloned().collect())
    }

    pub fn commands(&self) -> &[Command] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Command>> for CommandGroup {
    type Error = HistoryError;

    fn try_from(commands: Vec<Command>) -> Result<Self, Self::Error> {
        Self::new(commands)
    }
}

impl From<CommandGroup> for Vec<Command> {
    fn from(group: CommandGroup) -> Self {
        group.0
    }
}

impl<'a> IntoIterator for &'a CommandGroup {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One slot in a command log.
///
/// A group occupies a single slot, so one undo step reverts all of its
/// members and one redo step reapplies them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Single(Command),
    Group(CommandGroup),
}

impl HistoryEntry {
    /// The commands this entry replays, in application order.
    pub fn commands(&self) -> &[Command] {
        match self {
            Self::Single(command) => std::slice::from_ref(command),
            Self::Group(group) => group.commands(),
        }
    }

    /// Number of transition-function applications this entry replays.
    pub fn len(&self) -> usize {
        self.commands().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands().is_empty()
    }

    /// Fold `later` into this entry, producing a group that replays both.
    pub(crate) fn merge(&self, later: &HistoryEntry) -> Self {
        Self::Group(CommandGroup::concat(self.commands(), later.commands()))
    }
}

impl From<Command> for HistoryEntry {
    fn from(command: Command) -> Self {
        Self::Single(command)
    }
}

impl From<CommandGroup> for HistoryEntry {
    fn from(group: CommandGroup) -> Self {
        Self::Group(group)
    }
}
