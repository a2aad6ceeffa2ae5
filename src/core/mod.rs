//! Core types: ids, players, game state, settings, actions, RNG.
//!
//! Everything here is plain data plus small helpers. The state transitions
//! live in `store`, the win condition in `rules`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{GameId, PlayerId};
pub use player::Player;
pub use rng::GameRng;
pub use config::{GameSettings, PlayerColor, SettingsPatch, StoreConfig, PALETTE};
pub use action::Action;
pub use state::{now_millis, GameState, GameSummary};
