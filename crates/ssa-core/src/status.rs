//! Publication status workflow shared by all content records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Publication state of a location, event, or route.
///
/// Records move `draft -> published -> archived`. A published record can be
/// pulled back to draft and an archived record can be restored to draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl RecordStatus {
    /// String representation as stored by the backend.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Whether the workflow permits moving from `self` to `next`.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Published)
                | (Self::Published, Self::Archived | Self::Draft)
                | (Self::Archived, Self::Draft)
        )
    }

    /// Returns `next` if the workflow permits the move.
    pub const fn transition(self, next: Self) -> Result<Self, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Error for unknown status strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record status: {0}")]
pub struct UnknownStatus(String);

/// A status change the workflow does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move record from {from} to {to}")]
pub struct InvalidTransition {
    pub from: RecordStatus,
    pub to: RecordStatus,
}
