//! Game rules.
//!
//! - `winner`: threshold-based win detection

pub mod winner;

pub use winner::{determine_winner, leader, meets_threshold};
