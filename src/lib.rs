//! # score-counter
//!
//! Scorekeeping core for multiplayer tabletop games.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not diffs**: Undo/redo store whole game states. Game state
//!    uses `im-rs` persistent collections, so a snapshot costs O(1).
//!
//! 2. **Explicit ownership**: The store is a plain value owned by a
//!    `ScoreKeeper`; persistence is an adapter the keeper calls after each
//!    change, not a global side effect.
//!
//! 3. **Atomic operations**: Every store operation applies completely or,
//!    for imports, fails without changing anything.
//!
//! ## Modules
//!
//! - `core`: Ids, players, game state, settings, actions, RNG
//! - `rules`: Win detection
//! - `store`: The state container with undo/redo
//! - `snapshot`: JSON export format and binary store image
//! - `persist`: Storage adapters and the `ScoreKeeper` composition root
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod store;
pub mod snapshot;
pub mod persist;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, GameId, GameRng, GameSettings, GameState, GameSummary, Player, PlayerColor,
    PlayerId, SettingsPatch, StoreConfig,
};

pub use crate::rules::determine_winner;

pub use crate::store::{SnapshotStack, Store};

pub use crate::snapshot::{ExportArtifact, Snapshot, StoreImage};

pub use crate::persist::{ActionOutcome, FileStorage, MemoryStorage, ScoreKeeper, StateStorage};

pub use crate::error::{KeeperError, SnapshotError, StorageError};
