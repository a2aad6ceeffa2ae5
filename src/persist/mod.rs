//! Persistence and the composition root.
//!
//! - `StateStorage`: adapter trait for the local store image
//! - `MemoryStorage`, `FileStorage`: the two adapters
//! - `ScoreKeeper`: store + storage, saving after each change

mod keeper;
mod storage;

pub use keeper::{ActionOutcome, ScoreKeeper};
pub use storage::{FileStorage, MemoryStorage, StateStorage};
