use std::fmt;

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Goal,
    Subject,
    Hypothesis,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Goal => "goal",
            EntityKind::Subject => "subject",
            EntityKind::Hypothesis => "hypothesis",
            EntityKind::Task => "task",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to parse hypothesis map: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid {kind} '{id}': {reason}")]
    InvalidEntity {
        kind: EntityKind,
        id: String,
        reason: String,
    },

    #[error("hypothesis map has {count} entities, limit is {limit}")]
    TooLarge { count: usize, limit: usize },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn invalid(kind: EntityKind, id: &str, reason: &str) -> Self {
        ConvertError::InvalidEntity {
            kind,
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Pipeline stage the error was raised in.
    pub fn stage(&self) -> &'static str {
        match self {
            ConvertError::Parse(_) => "parse",
            ConvertError::InvalidEntity { .. } | ConvertError::TooLarge { .. } => "validation",
            ConvertError::Serialize(_) => "serialize",
        }
    }

    pub fn entity_id(&self) -> Option<&str> {
        match self {
            ConvertError::InvalidEntity { id, .. } => Some(id),
            _ => None,
        }
    }
}
