//! Store actions.
//!
//! Every mutating operation the presentation layer can request, as data.
//! Export and import are not actions: export is a pure query and import
//! carries untrusted text that may fail to parse.

use serde::{Deserialize, Serialize};

use super::config::SettingsPatch;
use super::entity::{GameId, PlayerId};

/// A user-initiated store mutation.
///
/// ## Example
///
/// ```
/// use score_counter::core::{Action, SettingsPatch};
///
/// let add = Action::add_player("Ada");
/// let limit = Action::UpdateSettings(SettingsPatch::new().max_score(100));
/// assert!(add.is_undoable());
/// assert!(!limit.is_undoable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    AddPlayer { name: String },
    RemovePlayer { id: PlayerId },
    UpdateScore { id: PlayerId, delta: i64 },
    UpdateSettings(SettingsPatch),
    StartNewGame,
    ResumeGame { id: GameId },
    Undo,
    Redo,
}

impl Action {
    /// Add a player with the given display name.
    pub fn add_player(name: impl Into<String>) -> Self {
        Self::AddPlayer { name: name.into() }
    }

    /// Adjust a player's score by `delta`.
    #[must_use]
    pub fn update_score(id: PlayerId, delta: i64) -> Self {
        Self::UpdateScore { id, delta }
    }

    /// Does applying this action push an undo entry?
    #[must_use]
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Self::AddPlayer { .. } | Self::RemovePlayer { .. } | Self::UpdateScore { .. }
        )
    }

    /// Short name for log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer { .. } => "add_player",
            Self::RemovePlayer { .. } => "remove_player",
            Self::UpdateScore { .. } => "update_score",
            Self::UpdateSettings(_) => "update_settings",
            Self::StartNewGame => "start_new_game",
            Self::ResumeGame { .. } => "resume_game",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}
