//! # property-deal
//!
//! Rules engine for a property-trading card game: a shared card catalog,
//! property sets, and the decisions a game server asks of the rules.
//!
//! ## Design Principles
//!
//! 1. **Keys In, Decisions Out**: Callers hand over card keys and placed-card
//!    snapshots. Every operation is a pure computation over those values;
//!    the engine owns no game state.
//!
//! 2. **One Shared Catalog**: Card definitions live in a read-only
//!    `CardRegistry` passed by reference or `Arc`, never in a global, so
//!    tests can swap in a fixture catalog.
//!
//! 3. **Order Matters**: Grouping and merging are greedy first-fit passes.
//!    Inputs are ordered sequences and results are reproducible.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, placed-card snapshots
//! - `cards`: Card definitions, registry, the standard catalog
//! - `sets`: Property sets, grouping and merging
//! - `rules`: Play legality, payments, win checks, `RulesEngine`

pub mod core;
pub mod cards;
pub mod sets;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlacedCards, RulesConfig, RulesError, RulesResult,
    DEFAULT_FULL_SETS_TO_WIN, DEFAULT_MAX_ACTIONS_PER_TURN,
};

pub use crate::cards::{
    ActionKind, Card, CardKey, CardKind, CardRegistry, RentTarget,
    standard_deck, standard_registry,
};

pub use crate::sets::{
    CardSet, GroupedSet, Grouping, PropertySet, SerializedPropertySet, WildcardAllColourSet,
    group_properties, group_properties_into_sets, merge_serialized_property_sets,
};

pub use crate::rules::{
    GameResult, RulesEngine,
    can_flip_card, can_play_card, card_payment_amount, card_requires_payment, flip_card,
    has_enough_full_sets_to_win,
};
