//! The standard card catalog.
//!
//! 106 playable cards: money, actions, rent, ten property colours, the
//! dual-colour wildcards (each orientation is its own definition, linked by
//! `flip_to`) and the universal wildcard.

use smallvec::smallvec;

use super::definition::{ActionKind, Card, CardKey, RentTarget};
use super::registry::CardRegistry;

/// Well-known card keys of the standard catalog.
pub mod keys {
    pub const MONEY_1: &str = "MONEY_1";
    pub const MONEY_2: &str = "MONEY_2";
    pub const MONEY_3: &str = "MONEY_3";
    pub const MONEY_4: &str = "MONEY_4";
    pub const MONEY_5: &str = "MONEY_5";
    pub const MONEY_10: &str = "MONEY_10";

    pub const DEAL_BREAKER: &str = "DEAL_BREAKER";
    pub const JUST_SAY_NO: &str = "JUST_SAY_NO";
    pub const SLY_DEAL: &str = "SLY_DEAL";
    pub const FORCED_DEAL: &str = "FORCED_DEAL";
    pub const DEBT_COLLECTOR: &str = "DEBT_COLLECTOR";
    pub const BIRTHDAY: &str = "BIRTHDAY";
    pub const PASS_GO: &str = "PASS_GO";
    pub const HOUSE: &str = "HOUSE";
    pub const HOTEL: &str = "HOTEL";
    pub const DOUBLE_THE_RENT: &str = "DOUBLE_THE_RENT";

    pub const RENT_BROWN_OR_CYAN: &str = "RENT_BROWN_OR_CYAN";
    pub const RENT_PINK_OR_ORANGE: &str = "RENT_PINK_OR_ORANGE";
    pub const RENT_RED_OR_YELLOW: &str = "RENT_RED_OR_YELLOW";
    pub const RENT_BLUE_OR_GREEN: &str = "RENT_BLUE_OR_GREEN";
    pub const RENT_RAILROAD_OR_UTILITY: &str = "RENT_RAILROAD_OR_UTILITY";
    pub const RENT_ALL_COLOUR: &str = "RENT_ALL_COLOUR";

    pub const PROPERTY_BROWN: &str = "PROPERTY_BROWN";
    pub const PROPERTY_CYAN: &str = "PROPERTY_CYAN";
    pub const PROPERTY_PINK: &str = "PROPERTY_PINK";
    pub const PROPERTY_ORANGE: &str = "PROPERTY_ORANGE";
    pub const PROPERTY_RED: &str = "PROPERTY_RED";
    pub const PROPERTY_YELLOW: &str = "PROPERTY_YELLOW";
    pub const PROPERTY_GREEN: &str = "PROPERTY_GREEN";
    pub const PROPERTY_BLUE: &str = "PROPERTY_BLUE";
    pub const PROPERTY_RAILROAD: &str = "PROPERTY_RAILROAD";
    pub const PROPERTY_UTILITY: &str = "PROPERTY_UTILITY";

    pub const PROPERTY_BLUE_OR_GREEN: &str = "PROPERTY_BLUE_OR_GREEN";
    pub const PROPERTY_GREEN_OR_BLUE: &str = "PROPERTY_GREEN_OR_BLUE";
    pub const PROPERTY_CYAN_OR_BROWN: &str = "PROPERTY_CYAN_OR_BROWN";
    pub const PROPERTY_BROWN_OR_CYAN: &str = "PROPERTY_BROWN_OR_CYAN";
    pub const PROPERTY_PINK_OR_ORANGE: &str = "PROPERTY_PINK_OR_ORANGE";
    pub const PROPERTY_ORANGE_OR_PINK: &str = "PROPERTY_ORANGE_OR_PINK";
    pub const PROPERTY_GREEN_OR_RAILROAD: &str = "PROPERTY_GREEN_OR_RAILROAD";
    pub const PROPERTY_RAILROAD_OR_GREEN: &str = "PROPERTY_RAILROAD_OR_GREEN";
    pub const PROPERTY_CYAN_OR_RAILROAD: &str = "PROPERTY_CYAN_OR_RAILROAD";
    pub const PROPERTY_RAILROAD_OR_CYAN: &str = "PROPERTY_RAILROAD_OR_CYAN";
    pub const PROPERTY_UTILITY_OR_RAILROAD: &str = "PROPERTY_UTILITY_OR_RAILROAD";
    pub const PROPERTY_RAILROAD_OR_UTILITY: &str = "PROPERTY_RAILROAD_OR_UTILITY";
    pub const PROPERTY_RED_OR_YELLOW: &str = "PROPERTY_RED_OR_YELLOW";
    pub const PROPERTY_YELLOW_OR_RED: &str = "PROPERTY_YELLOW_OR_RED";

    pub const PROPERTY_WILDCARD: &str = "PROPERTY_WILDCARD";
}

use keys::*;

// (key, value, needs, rent)
const COLOURS: [(&str, u32, usize, &[u32]); 10] = [
    (PROPERTY_BROWN, 1, 2, &[1, 2]),
    (PROPERTY_CYAN, 1, 3, &[1, 2, 3]),
    (PROPERTY_PINK, 2, 3, &[1, 2, 4]),
    (PROPERTY_ORANGE, 2, 3, &[1, 3, 5]),
    (PROPERTY_RED, 3, 3, &[2, 3, 6]),
    (PROPERTY_YELLOW, 3, 3, &[2, 4, 6]),
    (PROPERTY_GREEN, 4, 3, &[2, 4, 7]),
    (PROPERTY_BLUE, 4, 2, &[3, 8]),
    (PROPERTY_RAILROAD, 2, 4, &[1, 2, 3, 4]),
    (PROPERTY_UTILITY, 2, 2, &[1, 2]),
];

// (key, flipped key, value, counts as, flipped counts as)
const DUAL_WILDCARDS: [(&str, &str, u32, &str, &str); 7] = [
    (PROPERTY_BLUE_OR_GREEN, PROPERTY_GREEN_OR_BLUE, 4, PROPERTY_BLUE, PROPERTY_GREEN),
    (PROPERTY_CYAN_OR_BROWN, PROPERTY_BROWN_OR_CYAN, 1, PROPERTY_CYAN, PROPERTY_BROWN),
    (PROPERTY_PINK_OR_ORANGE, PROPERTY_ORANGE_OR_PINK, 2, PROPERTY_PINK, PROPERTY_ORANGE),
    (PROPERTY_GREEN_OR_RAILROAD, PROPERTY_RAILROAD_OR_GREEN, 4, PROPERTY_GREEN, PROPERTY_RAILROAD),
    (PROPERTY_CYAN_OR_RAILROAD, PROPERTY_RAILROAD_OR_CYAN, 4, PROPERTY_CYAN, PROPERTY_RAILROAD),
    (PROPERTY_UTILITY_OR_RAILROAD, PROPERTY_RAILROAD_OR_UTILITY, 2, PROPERTY_UTILITY, PROPERTY_RAILROAD),
    (PROPERTY_RED_OR_YELLOW, PROPERTY_YELLOW_OR_RED, 3, PROPERTY_RED, PROPERTY_YELLOW),
];

// (key, value, colour, colour)
const DUAL_RENTS: [(&str, u32, &str, &str); 5] = [
    (RENT_BROWN_OR_CYAN, 1, PROPERTY_BROWN, PROPERTY_CYAN),
    (RENT_PINK_OR_ORANGE, 1, PROPERTY_PINK, PROPERTY_ORANGE),
    (RENT_RED_OR_YELLOW, 1, PROPERTY_RED, PROPERTY_YELLOW),
    (RENT_BLUE_OR_GREEN, 1, PROPERTY_BLUE, PROPERTY_GREEN),
    (RENT_RAILROAD_OR_UTILITY, 1, PROPERTY_RAILROAD, PROPERTY_UTILITY),
];

/// Copies of each card in a fresh deck. Wildcards list the printed
/// orientation only.
const DECK: [(&str, usize); 40] = [
    (MONEY_1, 6),
    (MONEY_2, 5),
    (MONEY_3, 3),
    (MONEY_4, 3),
    (MONEY_5, 2),
    (MONEY_10, 1),
    (DEAL_BREAKER, 2),
    (JUST_SAY_NO, 3),
    (SLY_DEAL, 3),
    (FORCED_DEAL, 3),
    (DEBT_COLLECTOR, 3),
    (BIRTHDAY, 3),
    (PASS_GO, 10),
    (HOUSE, 3),
    (HOTEL, 2),
    (DOUBLE_THE_RENT, 2),
    (RENT_BROWN_OR_CYAN, 2),
    (RENT_PINK_OR_ORANGE, 2),
    (RENT_RED_OR_YELLOW, 2),
    (RENT_BLUE_OR_GREEN, 2),
    (RENT_RAILROAD_OR_UTILITY, 2),
    (RENT_ALL_COLOUR, 3),
    (PROPERTY_BROWN, 2),
    (PROPERTY_CYAN, 3),
    (PROPERTY_PINK, 3),
    (PROPERTY_ORANGE, 3),
    (PROPERTY_RED, 3),
    (PROPERTY_YELLOW, 3),
    (PROPERTY_GREEN, 3),
    (PROPERTY_BLUE, 2),
    (PROPERTY_RAILROAD, 4),
    (PROPERTY_UTILITY, 2),
    (PROPERTY_BLUE_OR_GREEN, 1),
    (PROPERTY_CYAN_OR_BROWN, 1),
    (PROPERTY_PINK_OR_ORANGE, 2),
    (PROPERTY_GREEN_OR_RAILROAD, 1),
    (PROPERTY_CYAN_OR_RAILROAD, 1),
    (PROPERTY_UTILITY_OR_RAILROAD, 1),
    (PROPERTY_RED_OR_YELLOW, 2),
    (PROPERTY_WILDCARD, 2),
];

/// Build the registry holding every standard card definition.
#[must_use]
pub fn standard_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();

    for (key, value) in [
        (MONEY_1, 1),
        (MONEY_2, 2),
        (MONEY_3, 3),
        (MONEY_4, 4),
        (MONEY_5, 5),
        (MONEY_10, 10),
    ] {
        registry.register(Card::money(key, value));
    }

    registry.register(Card::action(DEAL_BREAKER, 5, ActionKind::DealBreaker));
    registry.register(Card::action(JUST_SAY_NO, 4, ActionKind::JustSayNo));
    registry.register(Card::action(SLY_DEAL, 3, ActionKind::SlyDeal));
    registry.register(Card::action(FORCED_DEAL, 3, ActionKind::ForcedDeal));
    registry.register(Card::action(DEBT_COLLECTOR, 3, ActionKind::DebtCollector).with_payment(5));
    registry.register(Card::action(BIRTHDAY, 2, ActionKind::Birthday).with_payment(2));
    registry.register(Card::action(PASS_GO, 1, ActionKind::PassGo));
    registry.register(Card::action(HOUSE, 3, ActionKind::House));
    registry.register(Card::action(HOTEL, 4, ActionKind::Hotel));
    registry.register(Card::action(DOUBLE_THE_RENT, 1, ActionKind::DoubleTheRent));

    for (key, value, first, second) in DUAL_RENTS {
        let target = RentTarget::Colours(smallvec![CardKey::new(first), CardKey::new(second)]);
        registry.register(Card::rent(key, value, target));
    }
    registry.register(Card::rent(RENT_ALL_COLOUR, 3, RentTarget::AllColours));

    for (key, value, needs, rent) in COLOURS {
        registry.register(Card::property(key, value, needs, rent.iter().copied()));
    }

    for (key, flipped, value, colour, flipped_colour) in DUAL_WILDCARDS {
        registry.register(Card::dual_wildcard(key, value, colour, flipped));
        registry.register(Card::dual_wildcard(flipped, value, flipped_colour, key));
    }

    registry.register(Card::universal_wildcard(PROPERTY_WILDCARD, 0));

    registry
}

/// Every card of a fresh deck, unshuffled, grouped by key.
#[must_use]
pub fn standard_deck() -> Vec<CardKey> {
    DECK.iter()
        .flat_map(|&(key, count)| std::iter::repeat(key).take(count))
        .map(CardKey::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_deck_size() {
        assert_eq!(standard_deck().len(), 106);
    }

    #[test]
    fn test_deck_cards_are_registered() {
        let registry = standard_registry();
        for key in standard_deck() {
            assert!(registry.contains(&key), "{} missing from catalog", key);
        }
    }

    #[test]
    fn test_wildcard_orientations_flip_back() {
        let registry = standard_registry();

        for card in registry.find(|c| c.flip_to().is_some()) {
            let flipped = registry.resolve(card.flip_to().unwrap()).unwrap();
            assert_eq!(flipped.flip_to(), Some(&card.key));
            assert_eq!(flipped.value, card.value);
            assert_ne!(flipped.colour(), card.colour());
        }
    }

    #[test]
    fn test_wildcards_count_as_registered_colours() {
        let registry = standard_registry();

        for card in registry.find(|c| matches!(c.kind, CardKind::PropertyWildcard { .. })) {
            if let Some(colour) = card.colour() {
                let colour_card = registry.resolve(colour).unwrap();
                assert!(colour_card.needs().is_some());
            }
        }
    }

    #[test]
    fn test_rent_tables_match_needs() {
        let registry = standard_registry();

        for card in registry.find(|c| c.needs().is_some()) {
            assert_eq!(card.rent_table().len(), card.needs().unwrap(), "{}", card.key);
        }
    }

    #[test]
    fn test_payment_actions() {
        let registry = standard_registry();
        let paying: Vec<_> = registry.find(|c| c.payment_amount().is_some()).collect();
        assert_eq!(paying.len(), 2);
        assert_eq!(
            registry.resolve(&CardKey::new(DEBT_COLLECTOR)).unwrap().payment_amount(),
            Some(5)
        );
        assert_eq!(
            registry.resolve(&CardKey::new(BIRTHDAY)).unwrap().payment_amount(),
            Some(2)
        );
    }
}
