//! Entity identification system.
//!
//! Every player and every game carries an opaque, globally unique id.
//! Ids are UUIDs so exported snapshots from different devices never collide
//! when merged into one archive.
//!
//! ## Usage
//!
//! ```
//! use score_counter::core::{GameRng, PlayerId};
//!
//! let mut rng = GameRng::new(42);
//! let a = PlayerId::generate(&mut rng);
//! let b = PlayerId::generate(&mut rng);
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rng::GameRng;

/// Unique identifier of a player within a game.
///
/// Uniqueness is only required within the owning `GameState`, but ids are
/// generated from a 122-bit random space so in practice they are unique
/// everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Draw a fresh id from the store's RNG.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        Self(rng.next_uuid())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a game (active or archived).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Draw a fresh id from the store's RNG.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        Self(rng.next_uuid())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for GameId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
