//! Win condition.
//!
//! A game has a winner once its leading player crosses the threshold:
//! - Normal games: highest score, wins at `score >= max_score`
//! - Reversed games: lowest score, wins at `score <= max_score`
//!
//! Ties for the lead go to whoever joined first.

use crate::core::{GameSettings, Player};

/// The player currently leading under the given direction.
///
/// Returns `None` only for an empty player list.
pub fn leader<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    reversed: bool,
) -> Option<&'a Player> {
    players.into_iter().fold(None, |best, p| match best {
        None => Some(p),
        // Strict comparison keeps the earliest player on ties.
        Some(b) if reversed && p.score < b.score => Some(p),
        Some(b) if !reversed && p.score > b.score => Some(p),
        keep => keep,
    })
}

/// Does `score` satisfy the threshold under the settings' direction?
#[must_use]
pub fn meets_threshold(score: i64, threshold: i64, reversed: bool) -> bool {
    if reversed {
        score <= threshold
    } else {
        score >= threshold
    }
}

/// Compute the winner of a game, if any.
///
/// Pure function of players and settings. Returns a copy of the winning
/// player so the result can be stored in a snapshot.
///
/// ```
/// use score_counter::core::{GameSettings, Player, PlayerColor, PlayerId};
/// use score_counter::rules::determine_winner;
/// use uuid::Uuid;
///
/// let settings = GameSettings { increment_value: 1, max_score: Some(10), is_reversed: true };
/// let players = vec![
///     Player::new(PlayerId(Uuid::from_u128(1)), "A", PlayerColor::Blue).with_score(20),
///     Player::new(PlayerId(Uuid::from_u128(2)), "B", PlayerColor::Red).with_score(5),
/// ];
///
/// let winner = determine_winner(&players, &settings).unwrap();
/// assert_eq!(winner.name, "B");
/// ```
pub fn determine_winner<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    settings: &GameSettings,
) -> Option<Player> {
    let threshold = settings.max_score?;
    let candidate = leader(players, settings.is_reversed)?;

    meets_threshold(candidate.score, threshold, settings.is_reversed).then(|| candidate.clone())
}
