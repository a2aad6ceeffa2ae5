//! Configuration types.
//!
//! - `PlayerColor` / `PALETTE`: Display colors assigned round-robin to players
//! - `GameSettings`: Per-game rules (increment step, threshold, direction)
//! - `SettingsPatch`: Partial settings update from the settings panel
//! - `StoreConfig`: Store-wide limits and id seeding

use serde::{Deserialize, Serialize};

/// Display color tag for a player card.
///
/// Also reads the `bg-<color>-500` tags written by older exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    #[serde(alias = "bg-blue-500")]
    Blue,
    #[serde(alias = "bg-red-500")]
    Red,
    #[serde(alias = "bg-green-500")]
    Green,
    #[serde(alias = "bg-purple-500")]
    Purple,
    #[serde(alias = "bg-yellow-500")]
    Yellow,
    #[serde(alias = "bg-pink-500")]
    Pink,
}

/// Colors in assignment order.
pub const PALETTE: [PlayerColor; 6] = [
    PlayerColor::Blue,
    PlayerColor::Red,
    PlayerColor::Green,
    PlayerColor::Purple,
    PlayerColor::Yellow,
    PlayerColor::Pink,
];

impl PlayerColor {
    /// Color for the player joining at position `index` (0-based).
    ///
    /// ```
    /// use score_counter::core::PlayerColor;
    ///
    /// assert_eq!(PlayerColor::for_index(0), PlayerColor::Blue);
    /// assert_eq!(PlayerColor::for_index(6), PlayerColor::Blue);
    /// assert_eq!(PlayerColor::for_index(7), PlayerColor::Red);
    /// ```
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// Rules for a single game.
///
/// Every `GameState` owns its own copy, so archived games keep the settings
/// they were played with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Step used by the +/- buttons. Always at least 1.
    pub increment_value: u32,

    /// Winning threshold. `None` means no limit and therefore no winner.
    pub max_score: Option<i64>,

    /// Lower score wins; the threshold becomes a lower bound.
    pub is_reversed: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            increment_value: 1,
            max_score: None,
            is_reversed: false,
        }
    }
}

impl GameSettings {
    /// Merge a partial update into these settings.
    ///
    /// Fields left unset in the patch keep their current values.
    /// The increment step is clamped to at least 1.
    #[must_use]
    pub fn merged(self, patch: &SettingsPatch) -> Self {
        Self {
            increment_value: patch
                .increment_value
                .map_or(self.increment_value, |v| v.max(1)),
            max_score: patch.max_score.unwrap_or(self.max_score),
            is_reversed: patch.is_reversed.unwrap_or(self.is_reversed),
        }
    }

    /// Signed delta for one press of the increment button.
    #[must_use]
    pub fn step(&self) -> i64 {
        i64::from(self.increment_value)
    }
}

/// Partial settings update.
///
/// `max_score` is tri-state: `None` leaves the threshold alone,
/// `Some(None)` clears it, `Some(Some(n))` sets it.
///
/// ```
/// use score_counter::core::{GameSettings, SettingsPatch};
///
/// let settings = GameSettings::default()
///     .merged(&SettingsPatch::new().max_score(100).reversed(true));
///
/// assert_eq!(settings.max_score, Some(100));
/// assert!(settings.is_reversed);
/// assert_eq!(settings.increment_value, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub increment_value: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub max_score: Option<Option<i64>>,

    pub is_reversed: Option<bool>,
}

/// A field that is present (even as `null`) deserializes to `Some`.
/// Absence falls back to `None` via `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl SettingsPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the increment step.
    #[must_use]
    pub fn increment(mut self, value: u32) -> Self {
        self.increment_value = Some(value);
        self
    }

    /// Set the winning threshold.
    #[must_use]
    pub fn max_score(mut self, value: i64) -> Self {
        self.max_score = Some(Some(value));
        self
    }

    /// Remove the winning threshold.
    #[must_use]
    pub fn no_limit(mut self) -> Self {
        self.max_score = Some(None);
        self
    }

    /// Set the reversal flag.
    #[must_use]
    pub fn reversed(mut self, value: bool) -> Self {
        self.is_reversed = Some(value);
        self
    }

    /// Check if this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.increment_value.is_none() && self.max_score.is_none() && self.is_reversed.is_none()
    }
}

/// Store-wide configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum snapshots kept on the undo stack. `None` for unlimited.
    pub undo_limit: Option<usize>,

    /// Maximum entries kept in each player's score log. `None` for unlimited.
    pub player_log_limit: Option<usize>,

    /// Fixed seed for id generation. `None` seeds from OS entropy.
    pub id_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            undo_limit: Some(100),
            player_log_limit: None,
            id_seed: None,
        }
    }
}

impl StoreConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the undo stack limit.
    #[must_use]
    pub fn with_undo_limit(mut self, limit: Option<usize>) -> Self {
        self.undo_limit = limit;
        self
    }

    /// Cap each player's score log.
    #[must_use]
    pub fn with_player_log_limit(mut self, limit: usize) -> Self {
        self.player_log_limit = Some(limit);
        self
    }

    /// Use a fixed id seed.
    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }
}
