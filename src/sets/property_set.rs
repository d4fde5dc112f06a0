//! A set of one colour.

use std::sync::Arc;

use super::CardSet;
use crate::cards::{ActionKind, Card, CardKind};
use crate::core::error::{RulesError, RulesResult};

/// Properties of one colour plus at most one house and one hotel.
///
/// Every property is either the identifier card itself, a dual-colour
/// wildcard counting as it, or a universal wildcard. Improvements attach
/// only to a full set, the hotel only after the house. A full set takes no
/// further properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySet {
    identifier: Arc<Card>,
    needs: usize,
    cards: Vec<Arc<Card>>,
}

impl PropertySet {
    /// Create an empty set for the colour of `identifier`.
    ///
    /// Fails if `identifier` is not a colour-defining property card, or
    /// if its colour needs no properties at all.
    pub fn new(identifier: Arc<Card>) -> RulesResult<Self> {
        let needs = identifier
            .needs()
            .filter(|&needs| needs > 0)
            .ok_or_else(|| RulesError::InvalidIdentifier(identifier.key.clone()))?;

        Ok(Self {
            identifier,
            needs,
            cards: Vec::new(),
        })
    }

    /// Rebuild a set exactly as it was serialized, without re-checking
    /// the cards.
    pub(crate) fn restore(identifier: Arc<Card>, cards: Vec<Arc<Card>>) -> RulesResult<Self> {
        let mut set = Self::new(identifier)?;
        set.cards = cards;
        Ok(set)
    }

    /// Properties required to complete this colour.
    #[must_use]
    pub fn needs(&self) -> usize {
        self.needs
    }

    /// Rent this set currently charges.
    ///
    /// `None` for an empty set, or if the set somehow holds more
    /// properties than the rent table covers.
    #[must_use]
    pub fn rent_amount(&self) -> Option<u32> {
        let count = self.property_count();
        if count == 0 {
            return None;
        }
        self.identifier.rent_table().get(count - 1).copied()
    }

    /// Check if `rent_card` can charge rent on this colour.
    #[must_use]
    pub fn is_rentable(&self, rent_card: &Card) -> bool {
        match &rent_card.kind {
            CardKind::Rent { target } => target.applies_to(&self.identifier.key),
            _ => false,
        }
    }

    fn belongs(&self, card: &Card) -> bool {
        card.is_universal_wildcard() || card.colour() == Some(&self.identifier.key)
    }
}

impl CardSet for PropertySet {
    fn identifier(&self) -> &Arc<Card> {
        &self.identifier
    }

    fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    fn add_card(&mut self, card: Arc<Card>) -> bool {
        let accepted = match card.improvement() {
            Some(improvement) => {
                self.is_full_set()
                    && !self.has_improvement(improvement)
                    && (improvement != ActionKind::Hotel || self.has_improvement(ActionKind::House))
            }
            None => !self.is_full_set() && self.belongs(&card),
        };

        if accepted {
            self.cards.push(card);
        }
        accepted
    }

    fn is_full_set(&self) -> bool {
        self.property_count() == self.needs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::keys::*;
    use crate::cards::{standard_registry, CardKey, CardRegistry};

    fn card(registry: &CardRegistry, key: &str) -> Arc<Card> {
        Arc::clone(registry.resolve(&CardKey::new(key)).unwrap())
    }

    fn set_of(registry: &CardRegistry, colour: &str) -> PropertySet {
        PropertySet::new(card(registry, colour)).unwrap()
    }

    #[test]
    fn test_new_rejects_non_colour_identifier() {
        let registry = standard_registry();

        for key in [HOUSE, PROPERTY_WILDCARD, PROPERTY_BLUE_OR_GREEN, RENT_ALL_COLOUR] {
            let err = PropertySet::new(card(&registry, key)).unwrap_err();
            assert_eq!(err, RulesError::InvalidIdentifier(CardKey::new(key)));
        }
    }

    #[test]
    fn test_new_rejects_zero_needs() {
        let registry = CardRegistry::new().with_card(Card::property("PROPERTY_X", 1, 0, []));

        assert_eq!(
            PropertySet::new(card(&registry, "PROPERTY_X")),
            Err(RulesError::InvalidIdentifier(CardKey::new("PROPERTY_X")))
        );
    }

    #[test]
    fn test_fill_to_needs() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_RED);

        assert!(set.add_card(card(&registry, PROPERTY_RED)));
        assert!(set.add_card(card(&registry, PROPERTY_RED_OR_YELLOW)));
        assert!(!set.is_full_set());
        assert!(set.add_card(card(&registry, PROPERTY_RED)));
        assert!(set.is_full_set());

        // Full sets take no more properties
        assert!(!set.add_card(card(&registry, PROPERTY_RED)));
        assert!(!set.add_card(card(&registry, PROPERTY_WILDCARD)));
        assert_eq!(set.cards().len(), 3);
    }

    #[test]
    fn test_rejects_other_colours() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_RED);

        assert!(!set.add_card(card(&registry, PROPERTY_PINK)));
        assert!(!set.add_card(card(&registry, PROPERTY_YELLOW_OR_RED)));
        assert!(!set.add_card(card(&registry, MONEY_1)));
        assert!(set.cards().is_empty());
    }

    #[test]
    fn test_improvement_order() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_BLUE);

        // Not full yet
        assert!(!set.add_card(card(&registry, HOUSE)));
        set.add_card(card(&registry, PROPERTY_BLUE));
        set.add_card(card(&registry, PROPERTY_BLUE));

        // Hotel needs a house first
        assert!(!set.add_card(card(&registry, HOTEL)));
        assert!(set.add_card(card(&registry, HOUSE)));
        assert!(!set.add_card(card(&registry, HOUSE)));
        assert!(set.add_card(card(&registry, HOTEL)));
        assert!(!set.add_card(card(&registry, HOTEL)));

        assert!(set.is_full_set());
        assert_eq!(set.property_count(), 2);
        assert_eq!(set.cards().len(), 4);
    }

    #[test]
    fn test_properties_skip_improvements() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_GREEN);

        set.add_card(card(&registry, PROPERTY_WILDCARD));
        set.add_card(card(&registry, PROPERTY_GREEN));
        set.add_card(card(&registry, PROPERTY_GREEN_OR_RAILROAD));
        set.add_card(card(&registry, HOUSE));
        set.add_card(card(&registry, HOTEL));

        let properties: Vec<_> = set.properties().iter().map(|c| c.key.clone()).collect();
        let expected: Vec<_> = [PROPERTY_WILDCARD, PROPERTY_GREEN, PROPERTY_GREEN_OR_RAILROAD]
            .into_iter()
            .map(CardKey::new)
            .collect();
        assert_eq!(properties, expected);
        assert_eq!(set.property_count(), 3);
        assert_eq!(set.cards().len(), 5);
    }

    #[test]
    fn test_rent_amount() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_PINK);
        assert_eq!(set.rent_amount(), None);

        set.add_card(card(&registry, PROPERTY_PINK));
        assert_eq!(set.rent_amount(), Some(1));
        set.add_card(card(&registry, PROPERTY_WILDCARD));
        assert_eq!(set.rent_amount(), Some(2));
        set.add_card(card(&registry, PROPERTY_PINK_OR_ORANGE));
        set.add_card(card(&registry, HOUSE));
        assert_eq!(set.rent_amount(), Some(4));
    }

    #[test]
    fn test_is_rentable() {
        let registry = standard_registry();
        let set = set_of(&registry, PROPERTY_GREEN);

        assert!(set.is_rentable(&card(&registry, RENT_BLUE_OR_GREEN)));
        assert!(set.is_rentable(&card(&registry, RENT_ALL_COLOUR)));
        assert!(!set.is_rentable(&card(&registry, RENT_PINK_OR_ORANGE)));
        assert!(!set.is_rentable(&card(&registry, BIRTHDAY)));
    }

    #[test]
    fn test_to_array_order() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_ORANGE);

        set.add_card(card(&registry, PROPERTY_WILDCARD));
        set.add_card(card(&registry, PROPERTY_ORANGE));
        set.add_card(card(&registry, PROPERTY_ORANGE_OR_PINK));
        set.add_card(card(&registry, HOUSE));
        set.add_card(card(&registry, HOTEL));

        let expected: Vec<_> = [PROPERTY_ORANGE, PROPERTY_ORANGE_OR_PINK, HOUSE, HOTEL, PROPERTY_WILDCARD]
            .into_iter()
            .map(CardKey::new)
            .collect();
        assert_eq!(set.to_array(), expected);
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let registry = standard_registry();
        let mut set = set_of(&registry, PROPERTY_BROWN);
        set.add_card(card(&registry, PROPERTY_WILDCARD));
        set.add_card(card(&registry, PROPERTY_BROWN));

        let serialized = set.serialize();
        assert_eq!(serialized.identifier.key, PROPERTY_BROWN);
        assert_eq!(
            serialized.cards,
            vec![CardKey::new(PROPERTY_WILDCARD), CardKey::new(PROPERTY_BROWN)]
        );
    }
}
