//! Core engine types: configuration, errors and placed-card snapshots.
//!
//! These are shared by every other module and know nothing about set
//! grouping or play rules.

pub mod config;
pub mod error;
pub mod placed;

pub use config::{RulesConfig, DEFAULT_FULL_SETS_TO_WIN, DEFAULT_MAX_ACTIONS_PER_TURN};
pub use error::{RulesError, RulesResult};
pub use placed::{money_cards, property_cards, total_value, PlacedCards};
