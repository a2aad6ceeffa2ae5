//! Binary image of the full store for local persistence.

use serde::{Deserialize, Serialize};

use super::validate_games;
use crate::core::GameState;
use crate::error::SnapshotError;

/// Everything the store needs to resume after a restart.
///
/// Stacks are stored oldest first, so the last element of `undo_stack` is
/// the snapshot the next undo restores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreImage {
    pub current_game: GameState,
    pub game_history: Vec<GameState>,
    pub undo_stack: Vec<GameState>,
    pub redo_stack: Vec<GameState>,
}

impl StoreImage {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode and validate.
    ///
    /// Stack entries are earlier versions of the active game, so they share
    /// its id; only the active game and archive are checked for id clashes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let image: Self = bincode::deserialize(bytes)?;

        validate_games(std::iter::once(&image.current_game).chain(&image.game_history))?;
        for game in image.undo_stack.iter().chain(&image.redo_stack) {
            super::validate_game(game)?;
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameId, Player, PlayerColor, PlayerId};
    use uuid::Uuid;

    fn image() -> StoreImage {
        let mut current = GameState::new(GameId(Uuid::from_u128(1)), 10);
        let before = current.clone();
        current
            .players
            .push_back(Player::new(PlayerId(Uuid::from_u128(2)), "Ada", PlayerColor::Blue));

        StoreImage {
            current_game: current,
            game_history: vec![GameState::new(GameId(Uuid::from_u128(3)), 5)],
            undo_stack: vec![before],
            redo_stack: Vec::new(),
        }
    }

    #[test]
    fn test_bytes_decode_to_same_image() {
        let original = image();
        let bytes = original.to_bytes().unwrap();

        assert_eq!(StoreImage::from_bytes(&bytes).unwrap(), original);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = image().to_bytes().unwrap();
        let err = StoreImage::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();

        assert!(matches!(err, SnapshotError::Binary(_)));
    }

    #[test]
    fn test_archive_clash_rejected() {
        let mut bad = image();
        bad.game_history.push(bad.current_game.clone());

        let bytes = bad.to_bytes().unwrap();
        assert!(matches!(
            StoreImage::from_bytes(&bytes),
            Err(SnapshotError::Invalid(_))
        ));
    }
}
