//! The game state store.
//!
//! Holds the active game, the archive of past games, and the undo/redo
//! stacks. Every operation either applies completely or (import only)
//! fails without touching anything.
//!
//! ## Undo model
//!
//! Player and score changes push the previous active game onto the undo
//! stack and clear the redo stack. Settings edits, new games, resumes and
//! imports are not undoable; the last three also empty both stacks.

use log::{debug, info, warn};
use std::mem;

use im::Vector;

use super::history::SnapshotStack;
use crate::core::{
    now_millis, Action, GameId, GameRng, GameState, GameSummary, Player, PlayerId,
    SettingsPatch, StoreConfig,
};
use crate::error::SnapshotError;
use crate::rules::determine_winner;
use crate::snapshot::{Snapshot, StoreImage};

/// Single-device scorekeeping state container.
#[derive(Clone, Debug)]
pub struct Store {
    current: GameState,

    /// Most recent first.
    archive: Vector<GameState>,

    undo: SnapshotStack,
    redo: SnapshotStack,

    ids: GameRng,
    config: StoreConfig,
}

impl Store {
    /// Create a store with a fresh empty game.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let mut ids = GameRng::from_seed_or_entropy(config.id_seed);
        let current = GameState::new(GameId::generate(&mut ids), now_millis());

        Self {
            current,
            archive: Vector::new(),
            undo: SnapshotStack::new(config.undo_limit),
            redo: SnapshotStack::new(config.undo_limit),
            ids,
            config,
        }
    }

    /// Restore a store from its persisted image.
    ///
    /// Stacks longer than the configured limit lose their oldest entries.
    #[must_use]
    pub fn from_image(config: StoreConfig, image: StoreImage) -> Self {
        let ids = GameRng::from_seed_or_entropy(config.id_seed);

        Self {
            current: image.current_game,
            archive: image.game_history.into_iter().collect(),
            undo: SnapshotStack::from_entries(image.undo_stack, config.undo_limit),
            redo: SnapshotStack::from_entries(image.redo_stack, config.undo_limit),
            ids,
            config,
        }
    }

    /// Capture the full store for local persistence.
    #[must_use]
    pub fn to_image(&self) -> StoreImage {
        StoreImage {
            current_game: self.current.clone(),
            game_history: self.archive.iter().cloned().collect(),
            undo_stack: self.undo.to_vec(),
            redo_stack: self.redo.to_vec(),
        }
    }

    // === Queries ===

    /// The active game.
    #[must_use]
    pub fn current_game(&self) -> &GameState {
        &self.current
    }

    /// Archived games, most recent first.
    #[must_use]
    pub fn archive(&self) -> &Vector<GameState> {
        &self.archive
    }

    /// One summary per archived game, most recent first.
    #[must_use]
    pub fn archive_summaries(&self) -> Vec<GameSummary> {
        self.archive.iter().map(GameState::summary).collect()
    }

    /// Find a player in the active game.
    #[must_use]
    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.current.player(id)
    }

    /// The winner of the active game as of its last score change.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.current.winner.as_ref()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // === Undoable mutations ===

    /// Append a player with a zero score.
    ///
    /// Names need not be unique. Returns the new player's id.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.fresh_player_id();
        let mut next = self.current.clone();
        let color = next.next_color();

        next.players.push_back(Player::new(id, name, color));
        debug!("added player {} ({:?}) to game {}", id, color, next.id);

        self.commit(next);
        id
    }

    /// Remove a player from the active game.
    ///
    /// An unknown id still records an undo entry. Returns whether a player
    /// was removed.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let mut next = self.current.clone();
        let removed = match next.player_index(id) {
            Some(index) => {
                next.players.remove(index);
                debug!("removed player {} from game {}", id, next.id);
                true
            }
            None => {
                warn!("remove_player: no player {} in game {}", id, next.id);
                false
            }
        };

        self.commit(next);
        removed
    }

    /// Add `delta` to a player's score and recompute the winner.
    ///
    /// An unknown id leaves the game unchanged but still records an undo
    /// entry. Returns the player's new score.
    pub fn update_score(&mut self, id: PlayerId, delta: i64) -> Option<i64> {
        let mut next = self.current.clone();
        let log_limit = self.config.player_log_limit;

        let new_score = match next.player_index(id) {
            Some(index) => {
                let score = next.players[index].adjust(delta, log_limit);
                next.winner = determine_winner(&next.players, &next.settings);
                debug!(
                    "player {} score {:+} -> {} (winner: {:?})",
                    id,
                    delta,
                    score,
                    next.winner.as_ref().map(|w| w.id)
                );
                Some(score)
            }
            None => {
                warn!("update_score: no player {} in game {}", id, next.id);
                None
            }
        };

        self.commit(next);
        new_score
    }

    // === Non-undoable mutations ===

    /// Merge a partial settings update into the active game.
    ///
    /// Not undoable and does not recompute the winner.
    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.current.settings = self.current.settings.merged(patch);
        self.redo.clear();
        debug!("settings for game {} now {:?}", self.current.id, self.current.settings);
    }

    /// Archive the active game and start an empty one.
    ///
    /// Returns the new game's id.
    pub fn start_new_game(&mut self) -> GameId {
        let fresh = GameState::new(self.fresh_game_id(), now_millis());
        let previous = mem::replace(&mut self.current, fresh);

        info!(
            "archived game {} ({} players), started game {}",
            previous.id,
            previous.player_count(),
            self.current.id
        );

        self.archive.push_front(previous);
        self.clear_history();
        self.current.id
    }

    /// Make an archived game active again.
    ///
    /// The resumed game leaves the archive. The previously active game is
    /// replaced, not archived. Unknown ids are a no-op. Returns whether the
    /// game was found.
    pub fn resume_game(&mut self, id: GameId) -> bool {
        let Some(index) = self.archive.iter().position(|g| g.id == id) else {
            debug!("resume_game: game {} not in archive", id);
            return false;
        };

        let game = self.archive.remove(index);
        info!("resumed game {} (replacing {})", game.id, self.current.id);

        self.current = game;
        self.clear_history();
        true
    }

    // === History ===

    /// Step back one undoable change. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop() else {
            return false;
        };

        let current = mem::replace(&mut self.current, previous);
        self.redo.push(current);
        debug!("undo (undo: {}, redo: {})", self.undo.len(), self.redo.len());
        true
    }

    /// Re-apply the last undone change. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };

        let current = mem::replace(&mut self.current, next);
        self.undo.push(current);
        debug!("redo (undo: {}, redo: {})", self.undo.len(), self.redo.len());
        true
    }

    // === Import / Export ===

    /// The exportable part of the store.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_game: self.current.clone(),
            game_history: self.archive.iter().cloned().collect(),
        }
    }

    /// Serialize the active game and archive as JSON.
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        self.snapshot().to_json()
    }

    /// Replace the active game and archive from exported JSON.
    ///
    /// On error the store is left exactly as it was.
    pub fn import_snapshot(&mut self, text: &str) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::from_json(text).map_err(|err| {
            warn!("rejected snapshot import: {}", err);
            err
        })?;

        info!(
            "imported game {} with {} archived games",
            snapshot.current_game.id,
            snapshot.game_history.len()
        );

        self.current = snapshot.current_game;
        self.archive = snapshot.game_history.into_iter().collect();
        self.clear_history();
        Ok(())
    }

    // === Dispatch ===

    /// Apply an action.
    ///
    /// Returns whether the store changed. No-op undo/redo and resumes of
    /// unknown games report false; everything else reports true.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::AddPlayer { name } => {
                self.add_player(name.as_str());
                true
            }
            Action::RemovePlayer { id } => {
                self.remove_player(*id);
                true
            }
            Action::UpdateScore { id, delta } => {
                self.update_score(*id, *delta);
                true
            }
            Action::UpdateSettings(patch) => {
                self.update_settings(patch);
                true
            }
            Action::StartNewGame => {
                self.start_new_game();
                true
            }
            Action::ResumeGame { id } => self.resume_game(*id),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
        }
    }

    // === Internals ===

    /// Replace the active game with `next`, recording the old one for undo.
    fn commit(&mut self, next: GameState) {
        let previous = mem::replace(&mut self.current, next);
        self.undo.push(previous);
        self.redo.clear();
    }

    fn clear_history(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// A game id not used by the active game or any archived game.
    ///
    /// A restored store with a fixed seed replays ids it already handed out.
    fn fresh_game_id(&mut self) -> GameId {
        loop {
            let id = GameId::generate(&mut self.ids);
            if id != self.current.id && self.archive.iter().all(|g| g.id != id) {
                return id;
            }
        }
    }

    fn fresh_player_id(&mut self) -> PlayerId {
        loop {
            let id = PlayerId::generate(&mut self.ids);
            if self.current.player(id).is_none() {
                return id;
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
