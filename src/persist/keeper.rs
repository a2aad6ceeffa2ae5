//! Composition root: a store plus the adapter that persists it.
//!
//! The presentation layer talks to a `ScoreKeeper` only. Each successful
//! state replacement is followed by a synchronous save.

use log::{debug, info};

use super::storage::StateStorage;
use crate::core::{Action, Player, StoreConfig};
use crate::error::KeeperError;
use crate::snapshot::ExportArtifact;
use crate::store::Store;

/// What happened when an action was dispatched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// The store changed (and was saved).
    pub changed: bool,

    /// Set when the active game went from no winner to a winner.
    /// The UI uses this to celebrate exactly once.
    pub winner_declared: Option<Player>,
}

/// Owns the store and persists it after every change.
pub struct ScoreKeeper<S: StateStorage> {
    store: Store,
    storage: S,
}

impl<S: StateStorage> ScoreKeeper<S> {
    /// Open the keeper, restoring the last saved image if there is one.
    pub fn open(config: StoreConfig, storage: S) -> Result<Self, KeeperError> {
        let store = match storage.load()? {
            Some(image) => {
                info!(
                    "restored game {} with {} archived games",
                    image.current_game.id,
                    image.game_history.len()
                );
                Store::from_image(config, image)
            }
            None => {
                info!("no saved scores, starting fresh");
                Store::new(config)
            }
        };

        Ok(Self { store, storage })
    }

    /// Read-only view of the store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply an action and save if it changed anything.
    ///
    /// A failed save is reported, but the in-memory change stands.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, KeeperError> {
        let had_winner = self.store.winner().is_some();
        let changed = self.store.apply(&action);
        debug!("dispatched {} (changed: {})", action.name(), changed);

        if changed {
            self.persist()?;
        }

        let winner_declared = if had_winner {
            None
        } else {
            self.store.winner().cloned()
        };

        Ok(ActionOutcome {
            changed,
            winner_declared,
        })
    }

    /// Export the active game and archive as a downloadable artifact.
    pub fn export(&self) -> Result<ExportArtifact, KeeperError> {
        Ok(ExportArtifact::new(&self.store.snapshot())?)
    }

    /// Import exported JSON. On error nothing changes and nothing is saved.
    pub fn import(&mut self, text: &str) -> Result<(), KeeperError> {
        self.store.import_snapshot(text)?;
        self.persist()
    }

    /// Take the store and storage apart.
    pub fn into_parts(self) -> (Store, S) {
        (self.store, self.storage)
    }

    fn persist(&mut self) -> Result<(), KeeperError> {
        self.storage.save(&self.store.to_image())?;
        Ok(())
    }
}
