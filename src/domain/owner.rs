//! The closed set of task owners.

use super::ParseOwnerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed users a task belongs to.
///
/// The list is shared by exactly these two people; making the set a closed
/// enum keeps the owner-to-sequence mapping in
/// [`TasksState`](super::TasksState) statically enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    /// Matheus's list.
    Matheus,
    /// Ana's list.
    Ana,
}

impl Owner {
    /// Both owners, in display order.
    pub const ALL: [Self; 2] = [Self::Matheus, Self::Ana];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matheus => "matheus",
            Self::Ana => "ana",
        }
    }

    /// Returns the name shown to users.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Matheus => "Matheus",
            Self::Ana => "Ana",
        }
    }
}

impl TryFrom<&str> for Owner {
    type Error = ParseOwnerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "matheus" => Ok(Self::Matheus),
            "ana" => Ok(Self::Ana),
            _ => Err(ParseOwnerError(value.to_owned())),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
