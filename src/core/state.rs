//! Game state.
//!
//! ## GameState
//!
//! One game session:
//! - Identity and creation time
//! - Players in join order
//! - The game's own settings
//! - The winner as of the last score change (a copy, not a reference)
//!
//! Uses `im` persistent data structures so a snapshot clone is O(1); the
//! store keeps many of them on its undo and redo stacks.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::config::{GameSettings, PlayerColor};
use super::entity::{GameId, PlayerId};
use super::player::Player;

/// A single game: players, settings and computed winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: GameId,

    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,

    /// Players in join order.
    pub players: Vector<Player>,

    pub settings: GameSettings,

    pub winner: Option<Player>,
}

impl GameState {
    /// Create an empty game with default settings.
    #[must_use]
    pub fn new(id: GameId, timestamp: i64) -> Self {
        Self {
            id,
            timestamp,
            players: Vector::new(),
            settings: GameSettings::default(),
            winner: None,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Find a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Position of a player in join order.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Color the next joining player receives.
    #[must_use]
    pub fn next_color(&self) -> PlayerColor {
        PlayerColor::for_index(self.players.len())
    }

    /// Summary line for the "previous games" list.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id,
            timestamp: self.timestamp,
            player_count: self.player_count(),
        }
    }
}

/// Lightweight description of an archived game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub timestamp: i64,
    pub player_count: usize,
}

/// Current wall-clock time in epoch milliseconds.
///
/// Clocks set before 1970 read as 0.
#[must_use]
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
