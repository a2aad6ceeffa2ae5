//! Serialized forms of the store.
//!
//! ## Snapshot
//!
//! The export/import format: active game plus archive, as JSON with
//! camelCase field names. This is what users download and re-upload.
//!
//! ## StoreImage
//!
//! The local persistence format: everything in a `Snapshot` plus the undo
//! and redo stacks, encoded with `bincode`. Only ever read back by the same
//! device.
//!
//! Both are validated on decode; a decode either yields a value that upholds
//! the store invariants or an error.

mod image;

pub use image::StoreImage;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{now_millis, GameState};
use crate::error::SnapshotError;

/// Exportable record of the active game and the archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current_game: GameState,

    /// Archived games, most recent first.
    pub game_history: Vec<GameState>,
}

impl Snapshot {
    /// Encode as JSON text.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate JSON text.
    ///
    /// Rejects non-JSON input, input that does not match the schema, and
    /// input that breaks the id-uniqueness and settings invariants.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        validate_games(std::iter::once(&self.current_game).chain(&self.game_history))
    }
}

/// A snapshot ready to hand to a download prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name, unique per millisecond.
    pub filename: String,

    /// JSON text of the snapshot.
    pub contents: String,
}

impl ExportArtifact {
    /// Encode a snapshot, stamping the filename with the current time.
    pub fn new(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        Ok(Self {
            filename: export_filename(now_millis()),
            contents: snapshot.to_json()?,
        })
    }
}

/// File name for an export taken at `millis`.
#[must_use]
pub fn export_filename(millis: i64) -> String {
    format!("scores-{}.json", millis)
}

/// Validate a set of games that will coexist in one store.
///
/// - Game ids are unique across the set
/// - Player ids are unique within each game
/// - Increment steps are at least 1
pub(crate) fn validate_games<'a>(
    games: impl IntoIterator<Item = &'a GameState>,
) -> Result<(), SnapshotError> {
    let mut game_ids = FxHashSet::default();

    for game in games {
        if !game_ids.insert(game.id) {
            return Err(SnapshotError::Invalid(format!("duplicate game id {}", game.id)));
        }
        validate_game(game)?;
    }

    Ok(())
}

/// Validate a single game in isolation.
pub(crate) fn validate_game(game: &GameState) -> Result<(), SnapshotError> {
    let mut player_ids = FxHashSet::default();

    for player in &game.players {
        if !player_ids.insert(player.id) {
            return Err(SnapshotError::Invalid(format!(
                "duplicate player id {} in game {}",
                player.id, game.id
            )));
        }
    }

    if game.settings.increment_value == 0 {
        return Err(SnapshotError::Invalid(format!(
            "increment value must be at least 1 in game {}",
            game.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameId, Player, PlayerColor, PlayerId};
    use uuid::Uuid;

    fn game(n: u128) -> GameState {
        GameState::new(GameId(Uuid::from_u128(n)), 1_700_000_000_000)
    }

    fn player(n: u128) -> Player {
        Player::new(PlayerId(Uuid::from_u128(n)), "P", PlayerColor::Green)
    }

    #[test]
    fn test_json_shape() {
        let snapshot = Snapshot {
            current_game: game(1),
            game_history: vec![game(2)],
        };
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert!(value["currentGame"]["players"].is_array());
        assert_eq!(value["currentGame"]["settings"]["incrementValue"], 1);
        assert!(value["currentGame"]["winner"].is_null());
        assert_eq!(value["gameHistory"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_rejects_non_json() {
        let err = Snapshot::from_json("definitely not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn test_rejects_schema_violation() {
        let err = Snapshot::from_json(r#"{"currentGame": 5, "gameHistory": []}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));

        let err = Snapshot::from_json(r#"{"gameHistory": []}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn test_rejects_duplicate_player_ids() {
        let mut current = game(1);
        current.players.push_back(player(7));
        current.players.push_back(player(7));

        let snapshot = Snapshot {
            current_game: current,
            game_history: Vec::new(),
        };
        assert!(matches!(snapshot.validate(), Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_same_player_id_in_different_games_is_fine() {
        let mut current = game(1);
        current.players.push_back(player(7));
        let mut archived = game(2);
        archived.players.push_back(player(7));

        let snapshot = Snapshot {
            current_game: current,
            game_history: vec![archived],
        };
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_rejects_duplicate_game_ids() {
        let snapshot = Snapshot {
            current_game: game(1),
            game_history: vec![game(2), game(1)],
        };
        assert!(matches!(snapshot.validate(), Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_increment() {
        let mut current = game(1);
        current.settings.increment_value = 0;

        let snapshot = Snapshot {
            current_game: current,
            game_history: Vec::new(),
        };
        assert!(matches!(snapshot.validate(), Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(1234), "scores-1234.json");
    }

    #[test]
    fn test_export_artifact_contents_decode() {
        let snapshot = Snapshot {
            current_game: game(1),
            game_history: Vec::new(),
        };
        let artifact = ExportArtifact::new(&snapshot).unwrap();

        assert!(artifact.filename.starts_with("scores-"));
        assert!(artifact.filename.ends_with(".json"));
        assert_eq!(Snapshot::from_json(&artifact.contents).unwrap(), snapshot);
    }
}
