//! Game state store and its undo/redo history.
//!
//! ## Example Usage
//!
//! ```
//! use score_counter::core::{SettingsPatch, StoreConfig};
//! use score_counter::store::Store;
//!
//! let mut store = Store::new(StoreConfig::new().with_id_seed(42));
//! store.update_settings(&SettingsPatch::new().max_score(10));
//!
//! let ada = store.add_player("Ada");
//! store.update_score(ada, 12);
//! assert_eq!(store.winner().map(|w| w.id), Some(ada));
//!
//! store.undo();
//! assert!(store.winner().is_none());
//! ```

mod history;
#[allow(clippy::module_inception)]
mod store;

pub use history::SnapshotStack;
pub use store::Store;
