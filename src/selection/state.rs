//! Per-tag selection state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection state of a single tag
///
/// Cycles `none → include → exclude → none` on each toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    #[default]
    #[serde(rename = "none")]
    Unselected,
    Include,
    Exclude,
}

impl SelectionState {
    /// Next state in the toggle cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unselected => Self::Include,
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Unselected,
        }
    }

    #[must_use]
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::Unselected)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unselected => "none",
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start_after_three_steps() {
        for start in [
            SelectionState::Unselected,
            SelectionState::Include,
            SelectionState::Exclude,
        ] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(SelectionState::Unselected.next(), SelectionState::Include);
        assert_eq!(SelectionState::Include.next(), SelectionState::Exclude);
        assert_eq!(SelectionState::Exclude.next(), SelectionState::Unselected);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SelectionState::Unselected).unwrap();
        assert_eq!(json, r#""none""#);
        let state: SelectionState = serde_json::from_str(r#""exclude""#).unwrap();
        assert_eq!(state, SelectionState::Exclude);
    }
}
