//! Declarative engine configuration.

use crate::builder::error::BuildError;
use crate::core::Command;
use serde::{Deserialize, Serialize};

/// Serializable settings for a history engine.
///
/// Everything that is plain data can be configured here; the transition
/// function and comparator are code and are supplied to the builder.
///
/// # Example
///
/// ```rust
/// use undoable::builder::HistoryConfig;
///
/// let config = HistoryConfig::from_json(r#"{ "init": { "kind": "BOOT" }, "limit": 50 }"#).unwrap();
/// assert_eq!(config.limit, Some(50));
/// assert_eq!(config.init.unwrap().kind(), "BOOT");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// Initializing command; defaults to [`INIT`](crate::core::INIT).
    pub init: Option<Command>,

    /// Maximum number of undoable entries. `None` keeps everything.
    pub limit: Option<usize>,
}

impl HistoryConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}
