//! Grouping output and the serialized wire shape of a set.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{CardSet, PropertySet, WildcardAllColourSet};
use crate::cards::{Card, CardKey, CardRegistry};
use crate::core::error::RulesResult;

/// A set as it crosses the transport boundary.
///
/// `{identifier: Card, cards: [CardKey]}`. Restoring and re-serializing a
/// set reproduces this value exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPropertySet {
    pub identifier: Card,
    pub cards: Vec<CardKey>,
}

impl SerializedPropertySet {
    /// Create a serialized set from an identifier and card keys.
    #[must_use]
    pub fn new<I, K>(identifier: Card, cards: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<CardKey>,
    {
        Self {
            identifier,
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }
}

/// One set of a grouped property pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupedSet {
    Property(PropertySet),
    Wildcards(WildcardAllColourSet),
}

impl GroupedSet {
    /// Restore a set from its wire shape.
    ///
    /// The identifier is looked up by key, so the catalog's definition
    /// wins over whatever was serialized. Cards are restored as-is.
    pub fn from_serialized(
        registry: &CardRegistry,
        serialized: &SerializedPropertySet,
    ) -> RulesResult<Self> {
        let identifier = Arc::clone(registry.resolve(&serialized.identifier.key)?);
        let cards = registry.resolve_all(&serialized.cards)?;

        if identifier.is_universal_wildcard() {
            WildcardAllColourSet::restore(identifier, cards).map(GroupedSet::Wildcards)
        } else {
            PropertySet::restore(identifier, cards).map(GroupedSet::Property)
        }
    }

    /// Rent this set charges; wildcard-only sets charge none.
    #[must_use]
    pub fn rent_amount(&self) -> Option<u32> {
        match self {
            GroupedSet::Property(set) => set.rent_amount(),
            GroupedSet::Wildcards(_) => None,
        }
    }

    /// Check if `rent_card` can charge rent on this set.
    #[must_use]
    pub fn is_rentable(&self, rent_card: &Card) -> bool {
        match self {
            GroupedSet::Property(set) => set.is_rentable(rent_card),
            GroupedSet::Wildcards(_) => false,
        }
    }

    /// Get the colour set, if this is one.
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertySet> {
        match self {
            GroupedSet::Property(set) => Some(set),
            GroupedSet::Wildcards(_) => None,
        }
    }

    #[must_use]
    pub fn is_wildcards(&self) -> bool {
        matches!(self, GroupedSet::Wildcards(_))
    }
}

impl CardSet for GroupedSet {
    fn identifier(&self) -> &Arc<Card> {
        match self {
            GroupedSet::Property(set) => set.identifier(),
            GroupedSet::Wildcards(set) => set.identifier(),
        }
    }

    fn cards(&self) -> &[Arc<Card>] {
        match self {
            GroupedSet::Property(set) => set.cards(),
            GroupedSet::Wildcards(set) => set.cards(),
        }
    }

    fn add_card(&mut self, card: Arc<Card>) -> bool {
        match self {
            GroupedSet::Property(set) => set.add_card(card),
            GroupedSet::Wildcards(set) => set.add_card(card),
        }
    }

    fn is_full_set(&self) -> bool {
        match self {
            GroupedSet::Property(set) => set.is_full_set(),
            GroupedSet::Wildcards(set) => set.is_full_set(),
        }
    }
}

impl From<PropertySet> for GroupedSet {
    fn from(set: PropertySet) -> Self {
        GroupedSet::Property(set)
    }
}

impl From<WildcardAllColourSet> for GroupedSet {
    fn from(set: WildcardAllColourSet) -> Self {
        GroupedSet::Wildcards(set)
    }
}
