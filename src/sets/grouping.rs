//! Greedy grouping of a property pile into sets.
//!
//! The algorithm is single-pass and first-fit, so input order matters:
//!
//! 1. Universal wildcards and improvements are held back.
//! 2. The remaining cards are partitioned by colour, in first-seen order.
//! 3. Each colour fills one set at a time; a card the current set rejects
//!    starts a new set of the same colour.
//! 4. Each held-back wildcard goes to the first set (in creation order)
//!    that accepts it.
//! 5. Houses, then hotels, go to the first set that accepts them.
//! 6. Wildcards nobody took form one trailing `WildcardAllColourSet`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{CardSet, GroupedSet, PropertySet, WildcardAllColourSet};
use crate::cards::{ActionKind, Card, CardKey, CardRegistry};
use crate::core::error::RulesResult;

/// Result of grouping a pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Colour sets in creation order, then the wildcard set if any.
    pub sets: Vec<GroupedSet>,

    /// Cards no set could hold: improvements without a full set to attach
    /// to, and anything that is not a property at all.
    pub unplaced: Vec<CardKey>,
}

/// Group a property pile into sets.
///
/// Fails only on keys missing from the registry.
pub fn group_properties_into_sets(
    registry: &CardRegistry,
    card_keys: &[CardKey],
) -> RulesResult<Vec<GroupedSet>> {
    group_properties(registry, card_keys).map(|grouping| grouping.sets)
}

/// Group a property pile, also reporting cards that found no set.
pub fn group_properties(registry: &CardRegistry, card_keys: &[CardKey]) -> RulesResult<Grouping> {
    let cards = registry.resolve_all(card_keys)?;

    let mut wildcards = Vec::new();
    let mut houses = Vec::new();
    let mut hotels = Vec::new();
    let mut unplaced = Vec::new();

    // Colour partitions in first-seen order
    let mut colours: Vec<(CardKey, Vec<Arc<Card>>)> = Vec::new();
    let mut colour_index: FxHashMap<CardKey, usize> = FxHashMap::default();

    for card in cards {
        if card.is_universal_wildcard() {
            wildcards.push(card);
            continue;
        }
        match card.improvement() {
            Some(ActionKind::House) => houses.push(card),
            Some(_) => hotels.push(card),
            None => match card.colour().cloned() {
                Some(colour) => {
                    let index = *colour_index.entry(colour.clone()).or_insert_with(|| {
                        colours.push((colour, Vec::new()));
                        colours.len() - 1
                    });
                    colours[index].1.push(card);
                }
                None => unplaced.push(card.key.clone()),
            },
        }
    }

    let mut sets: Vec<PropertySet> = Vec::new();
    for (colour, members) in colours {
        let identifier = Arc::clone(registry.resolve(&colour)?);
        fill_colour(&mut sets, identifier, members, &mut unplaced)?;
    }

    let mut leftover_wildcards = Vec::new();
    for wildcard in wildcards {
        if !place_first_fit(&mut sets, &wildcard) {
            tracing::trace!("wildcard found no open colour set");
            leftover_wildcards.push(wildcard);
        }
    }

    for improvement in houses.into_iter().chain(hotels) {
        if !place_first_fit(&mut sets, &improvement) {
            tracing::debug!(card = %improvement.key, "improvement has no full set to attach to");
            unplaced.push(improvement.key.clone());
        }
    }

    let mut grouped: Vec<GroupedSet> = sets.into_iter().map(GroupedSet::Property).collect();
    if let Some(first) = leftover_wildcards.first() {
        let identifier = Arc::clone(first);
        grouped.push(WildcardAllColourSet::with_cards(identifier, leftover_wildcards)?.into());
    }

    Ok(Grouping {
        sets: grouped,
        unplaced,
    })
}

/// Fill sets of one colour, starting a new set whenever the current one
/// refuses a card. A card even a fresh set refuses goes to `unplaced`.
fn fill_colour(
    sets: &mut Vec<PropertySet>,
    identifier: Arc<Card>,
    members: Vec<Arc<Card>>,
    unplaced: &mut Vec<CardKey>,
) -> RulesResult<()> {
    let mut current = PropertySet::new(Arc::clone(&identifier))?;

    for card in members {
        if current.add_card(Arc::clone(&card)) {
            continue;
        }
        let mut fresh = PropertySet::new(Arc::clone(&identifier))?;
        if !fresh.add_card(Arc::clone(&card)) {
            tracing::debug!(card = %card.key, "no set of its colour accepts card");
            unplaced.push(card.key.clone());
            continue;
        }
        tracing::trace!(colour = %identifier.key, "starting another set");
        sets.push(std::mem::replace(&mut current, fresh));
    }

    if !current.cards().is_empty() {
        sets.push(current);
    }
    Ok(())
}

/// Offer `card` to each set in creation order; the first to accept wins.
pub(crate) fn place_first_fit<S: CardSet>(sets: &mut [S], card: &Arc<Card>) -> bool {
    sets.iter_mut().any(|set| set.add_card(Arc::clone(card)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::keys::*;
    use crate::cards::standard_registry;
    use crate::core::RulesError;

    fn keys(list: &[&str]) -> Vec<CardKey> {
        list.iter().map(|k| CardKey::new(*k)).collect()
    }

    #[test]
    fn test_empty_pile() {
        let registry = standard_registry();
        let grouping = group_properties(&registry, &[]).unwrap();
        assert!(grouping.sets.is_empty());
        assert!(grouping.unplaced.is_empty());
    }

    #[test]
    fn test_overflow_starts_new_set() {
        let registry = standard_registry();
        let sets =
            group_properties_into_sets(&registry, &keys(&[PROPERTY_BLUE, PROPERTY_BLUE, PROPERTY_BLUE]))
                .unwrap();

        assert_eq!(sets.len(), 2);
        assert!(sets[0].is_full_set());
        assert_eq!(sets[1].property_count(), 1);
    }

    #[test]
    fn test_partition_keeps_first_seen_order() {
        let registry = standard_registry();
        let sets = group_properties_into_sets(
            &registry,
            &keys(&[PROPERTY_PINK, PROPERTY_RED, PROPERTY_PINK_OR_ORANGE, PROPERTY_RED]),
        )
        .unwrap();

        let identifiers: Vec<_> = sets.iter().map(|s| s.identifier().key.clone()).collect();
        assert_eq!(identifiers, keys(&[PROPERTY_PINK, PROPERTY_RED]));
        assert_eq!(sets[0].card_keys(), keys(&[PROPERTY_PINK, PROPERTY_PINK_OR_ORANGE]));
    }

    #[test]
    fn test_place_first_fit() {
        let registry = standard_registry();
        let wildcard = Arc::clone(registry.resolve(&CardKey::new(PROPERTY_WILDCARD)).unwrap());
        let brown = Arc::clone(registry.resolve(&CardKey::new(PROPERTY_BROWN)).unwrap());

        let mut sets = vec![
            PropertySet::new(Arc::clone(&brown)).unwrap(),
            PropertySet::new(Arc::clone(&brown)).unwrap(),
        ];
        assert!(place_first_fit(&mut sets, &wildcard));
        assert!(place_first_fit(&mut sets, &wildcard));
        assert!(place_first_fit(&mut sets, &wildcard));
        assert_eq!(sets[0].cards().len(), 2);
        assert_eq!(sets[1].cards().len(), 1);
    }

    #[test]
    fn test_colour_needing_nothing_fails() {
        let registry = CardRegistry::new().with_card(Card::property("PROPERTY_X", 1, 0, []));

        assert_eq!(
            group_properties(&registry, &keys(&["PROPERTY_X"])),
            Err(RulesError::InvalidIdentifier(CardKey::new("PROPERTY_X")))
        );
    }

    #[test]
    fn test_refused_colour_card_is_unplaced() {
        let registry = standard_registry();
        let red = Arc::clone(registry.resolve(&CardKey::new(PROPERTY_RED)).unwrap());
        let yellow = Arc::clone(registry.resolve(&CardKey::new(PROPERTY_YELLOW)).unwrap());

        // Yellow filed under red: no red set will ever take it
        let mut sets = Vec::new();
        let mut unplaced = Vec::new();
        fill_colour(&mut sets, Arc::clone(&red), vec![Arc::clone(&red), yellow], &mut unplaced).unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].card_keys(), keys(&[PROPERTY_RED]));
        assert_eq!(unplaced, keys(&[PROPERTY_YELLOW]));
    }

    #[test]
    fn test_non_property_cards_unplaced() {
        let registry = standard_registry();
        let grouping =
            group_properties(&registry, &keys(&[MONEY_1, PROPERTY_RED, RENT_ALL_COLOUR])).unwrap();

        assert_eq!(grouping.sets.len(), 1);
        assert_eq!(grouping.unplaced, keys(&[MONEY_1, RENT_ALL_COLOUR]));
    }
}
