//! Navigation direction

use serde::{Deserialize, Serialize};

/// Direction of the most recent page change
///
/// Tags both the entering and exiting page animations so a transition
/// can play "down the stack" or "back up the stack".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher page indices
    #[default]
    Forward,
    /// Toward lower page indices
    Reverse,
}

impl Direction {
    /// Suffix appended to a transition class stem
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
