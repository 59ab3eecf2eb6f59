//! Editing-session mode state machine.
//!
//! The schedule board is read-only in `View`, accepts drag moves in
//! `Preview`, and locks all interaction while a commit is in flight.
//! A failed commit lands in `CommitFailed`, which only permits retrying
//! the commit or reverting the whole edit set.

use serde::{Deserialize, Serialize};

/// Mode of a [`ScheduleSession`](crate::application::ScheduleSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    /// Read-only display of authoritative data.
    View,
    /// Edit overlay active; moves accumulate in the ledger.
    Preview,
    /// Commit in flight; interaction is locked.
    Committing,
    /// A commit attempt failed; ledger intact, awaiting retry or revert.
    CommitFailed,
}

impl Default for ScheduleMode {
    fn default() -> Self {
        Self::View
    }
}

impl ScheduleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Preview => "preview",
            Self::Committing => "committing",
            Self::CommitFailed => "commit_failed",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "view" => Some(Self::View),
            "preview" => Some(Self::Preview),
            "committing" => Some(Self::Committing),
            "commit_failed" | "commit-failed" => Some(Self::CommitFailed),
            _ => None,
        }
    }

    /// Whether drag/drop edits are accepted in this mode.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Preview)
    }

    /// Whether a commit may be started from this mode.
    pub fn can_commit(&self) -> bool {
        matches!(self, Self::Preview | Self::CommitFailed)
    }

    /// Valid transitions from this mode.
    ///
    /// `Preview` does not auto-exit when the ledger collapses back to
    /// empty; leaving edit mode is always an explicit user action.
    pub fn valid_transitions(&self) -> Vec<ScheduleMode> {
        match self {
            Self::View => vec![Self::Preview],
            Self::Preview => vec![Self::View, Self::Committing],
            Self::Committing => vec![Self::View, Self::CommitFailed],
            Self::CommitFailed => vec![Self::Committing, Self::View],
        }
    }

    pub fn can_transition_to(&self, new_mode: Self) -> bool {
        self.valid_transitions().contains(&new_mode)
    }
}

impl std::fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_view() {
        assert_eq!(ScheduleMode::default(), ScheduleMode::View);
    }

    #[test]
    fn test_edit_entry_and_exit() {
        assert!(ScheduleMode::View.can_transition_to(ScheduleMode::Preview));
        assert!(ScheduleMode::Preview.can_transition_to(ScheduleMode::View));
        assert!(!ScheduleMode::View.can_transition_to(ScheduleMode::Committing));
    }

    #[test]
    fn test_commit_paths() {
        assert!(ScheduleMode::Preview.can_transition_to(ScheduleMode::Committing));
        assert!(ScheduleMode::Committing.can_transition_to(ScheduleMode::View));
        assert!(ScheduleMode::Committing.can_transition_to(ScheduleMode::CommitFailed));
        assert!(ScheduleMode::CommitFailed.can_transition_to(ScheduleMode::Committing));
        assert!(ScheduleMode::CommitFailed.can_transition_to(ScheduleMode::View));
    }

    #[test]
    fn test_committing_locks_editing() {
        assert!(ScheduleMode::Preview.is_editable());
        assert!(!ScheduleMode::Committing.is_editable());
        assert!(!ScheduleMode::CommitFailed.is_editable());
        assert!(!ScheduleMode::View.is_editable());
    }

    #[test]
    fn test_commit_allowed_from_preview_and_failed() {
        assert!(ScheduleMode::Preview.can_commit());
        assert!(ScheduleMode::CommitFailed.can_commit());
        assert!(!ScheduleMode::View.can_commit());
        assert!(!ScheduleMode::Committing.can_commit());
    }

    #[test]
    fn test_mode_string_round_trip() {
        for mode in [
            ScheduleMode::View,
            ScheduleMode::Preview,
            ScheduleMode::Committing,
            ScheduleMode::CommitFailed,
        ] {
            assert_eq!(ScheduleMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ScheduleMode::from_str("bogus"), None);
    }
}
