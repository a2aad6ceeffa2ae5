//! Players and their running totals.
//!
//! A `Player` is owned by exactly one `GameState`. Its score log records the
//! total *after* each adjustment, so the log reads like the score column on a
//! paper scoresheet.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::PlayerColor;
use super::entity::PlayerId;

/// A participant in a game.
///
/// Uses `im::Vector` for the score log so cloning a game snapshot for the
/// undo stack shares the log instead of copying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub color: PlayerColor,

    /// Post-adjustment totals, oldest first.
    pub history: Vector<i64>,
}

impl Player {
    /// Create a player with a zero score and an empty log.
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            color,
            history: Vector::new(),
        }
    }

    /// Set the score directly (builder style, for setup and tests).
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Add `delta` to the score and log the new total.
    ///
    /// With `log_limit` set, the oldest entries are dropped so at most
    /// `log_limit` remain. Returns the new score.
    pub fn adjust(&mut self, delta: i64, log_limit: Option<usize>) -> i64 {
        self.score = self.score.saturating_add(delta);
        self.history.push_back(self.score);

        if let Some(limit) = log_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }

        self.score
    }

    /// The newest `n` log entries, oldest first.
    #[must_use]
    pub fn recent_scores(&self, n: usize) -> Vec<i64> {
        let skip = self.history.len().saturating_sub(n);
        self.history.iter().skip(skip).copied().collect()
    }
}
