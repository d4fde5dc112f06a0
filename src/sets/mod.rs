//! Property sets and the algorithms that build them.
//!
//! A player's placed properties are a flat list of keys. This module turns
//! that list into sets of one colour (plus improvements), and folds one
//! player's sets into another's when a whole set changes hands.
//!
//! ## Set kinds
//!
//! - [`PropertySet`]: cards of one colour, at most one house and one hotel
//! - [`WildcardAllColourSet`]: universal wildcards no colour set could take
//! - [`GroupedSet`]: either of the above, as returned by grouping
//!
//! ## Example Usage
//!
//! ```
//! use property_deal::cards::{keys, standard_registry, CardKey};
//! use property_deal::sets::{group_properties_into_sets, CardSet};
//!
//! let registry = standard_registry();
//! let pile: Vec<CardKey> = [keys::PROPERTY_BLUE, keys::PROPERTY_WILDCARD, keys::PROPERTY_BLUE]
//!     .into_iter()
//!     .map(CardKey::new)
//!     .collect();
//!
//! let sets = group_properties_into_sets(&registry, &pile).unwrap();
//!
//! // Two blues complete the blue set; the wildcard has nowhere to go.
//! assert_eq!(sets.len(), 2);
//! assert!(sets[0].is_full_set());
//! assert!(!sets[1].is_full_set());
//! ```

mod grouped;
mod grouping;
mod merge;
mod property_set;
mod wildcard_set;

pub use grouped::{GroupedSet, SerializedPropertySet};
pub use grouping::{group_properties, group_properties_into_sets, Grouping};
pub use merge::merge_serialized_property_sets;
pub use property_set::PropertySet;
pub use wildcard_set::WildcardAllColourSet;

use std::sync::Arc;

use crate::cards::{ActionKind, Card, CardKey};

/// Shared storage contract of every set.
///
/// Sets only grow, and only through [`CardSet::add_card`]. A rejected card
/// is an expected outcome reported as `false`, never an error.
pub trait CardSet {
    /// The card this set is organised around.
    fn identifier(&self) -> &Arc<Card>;

    /// Every card in insertion order, improvements included.
    fn cards(&self) -> &[Arc<Card>];

    /// Try to add a card. Returns `false` without mutating on rejection.
    fn add_card(&mut self, card: Arc<Card>) -> bool;

    /// Check if the set has reached its required number of properties.
    fn is_full_set(&self) -> bool;

    /// Cards that are not improvements.
    fn properties(&self) -> Vec<&Arc<Card>> {
        self.cards()
            .iter()
            .filter(|c| c.improvement().is_none())
            .collect()
    }

    /// Number of cards that are not improvements.
    fn property_count(&self) -> usize {
        self.cards()
            .iter()
            .filter(|c| c.improvement().is_none())
            .count()
    }

    /// Check if the set holds the given improvement.
    fn has_improvement(&self, improvement: ActionKind) -> bool {
        self.cards()
            .iter()
            .any(|c| c.improvement() == Some(improvement))
    }

    /// Keys of every card in insertion order.
    fn card_keys(&self) -> Vec<CardKey> {
        self.cards().iter().map(|c| c.key.clone()).collect()
    }

    /// Display order: coloured properties, house, hotel, then universal
    /// wildcards.
    fn to_array(&self) -> Vec<CardKey> {
        let cards = self.cards();
        let coloured = cards
            .iter()
            .filter(|c| c.improvement().is_none() && !c.is_universal_wildcard());
        let house = cards.iter().filter(|c| c.improvement() == Some(ActionKind::House));
        let hotel = cards.iter().filter(|c| c.improvement() == Some(ActionKind::Hotel));
        let wildcards = cards.iter().filter(|c| c.is_universal_wildcard());

        coloured
            .chain(house)
            .chain(hotel)
            .chain(wildcards)
            .map(|c| c.key.clone())
            .collect()
    }

    /// Wire shape of the set.
    fn serialize(&self) -> SerializedPropertySet {
        SerializedPropertySet {
            identifier: Card::clone(self.identifier()),
            cards: self.card_keys(),
        }
    }
}
