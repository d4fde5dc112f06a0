//! Folding another player's sets into mine.
//!
//! Used when property sets change hands mid-trade. Every card goes through
//! the same `add_card` rules as grouping, so merged sets obey the same
//! invariants as freshly grouped ones.
//!
//! Policy per incoming set:
//!
//! - A full colour set moves over intact as a new set (properties first,
//!   then house, then hotel).
//! - An open colour set is poured card by card into my first open set of
//!   that colour; coloured cards that fit nowhere start a new set of that
//!   colour. Improvements go to my first full set of that colour that takes
//!   them.
//! - Universal wildcards, from a wildcard set or left over from pouring,
//!   go to my first colour set that takes them, else into my wildcard set.
//!   They never start a colour set on their own.
//!
//! New sets are inserted before my wildcard set so it stays last. Any card
//! no set accepts is returned as leftover, never dropped.

use std::sync::Arc;

use super::grouping::place_first_fit;
use super::{CardSet, GroupedSet, PropertySet, SerializedPropertySet, WildcardAllColourSet};
use crate::cards::{ActionKind, Card, CardKey, CardRegistry};
use crate::core::error::RulesResult;

/// Merge `theirs` into `mine` in place, returning the cards that could not
/// be placed.
///
/// `mine` is left untouched if any set fails to resolve.
pub fn merge_serialized_property_sets(
    registry: &CardRegistry,
    mine: &mut Vec<SerializedPropertySet>,
    theirs: &[SerializedPropertySet],
) -> RulesResult<Vec<CardKey>> {
    let mut merged = restore_all(registry, mine)?;
    let incoming = restore_all(registry, theirs)?;
    let mut leftover = Vec::new();

    for set in incoming {
        match set {
            GroupedSet::Property(set) if set.is_full_set() => {
                transplant(&mut merged, &set, &mut leftover)?;
            }
            GroupedSet::Property(set) => pour(&mut merged, &set, &mut leftover)?,
            GroupedSet::Wildcards(set) => {
                for wildcard in set.cards() {
                    place_wildcard(&mut merged, set.identifier(), wildcard)?;
                }
            }
        }
    }

    if !leftover.is_empty() {
        tracing::debug!(count = leftover.len(), "merge left cards unplaced");
    }

    *mine = merged.iter().map(CardSet::serialize).collect();
    Ok(leftover)
}

fn restore_all(
    registry: &CardRegistry,
    sets: &[SerializedPropertySet],
) -> RulesResult<Vec<GroupedSet>> {
    sets.iter()
        .map(|set| GroupedSet::from_serialized(registry, set))
        .collect()
}

/// Insert a colour set ahead of any wildcard set; returns its index.
fn insert_colour_set(merged: &mut Vec<GroupedSet>, set: PropertySet) -> usize {
    let index = merged
        .iter()
        .position(GroupedSet::is_wildcards)
        .unwrap_or(merged.len());
    merged.insert(index, GroupedSet::Property(set));
    index
}

fn transplant(
    merged: &mut Vec<GroupedSet>,
    incoming: &PropertySet,
    leftover: &mut Vec<CardKey>,
) -> RulesResult<()> {
    let mut set = PropertySet::new(Arc::clone(incoming.identifier()))?;

    for card in in_attach_order(incoming.cards()) {
        if !set.add_card(Arc::clone(card)) {
            leftover.push(card.key.clone());
        }
    }

    if !set.cards().is_empty() {
        insert_colour_set(merged, set);
    }
    Ok(())
}

fn pour(
    merged: &mut Vec<GroupedSet>,
    incoming: &PropertySet,
    leftover: &mut Vec<CardKey>,
) -> RulesResult<()> {
    let colour = &incoming.identifier().key;

    for card in in_attach_order(incoming.cards()) {
        let placed = merged
            .iter_mut()
            .filter(|set| !set.is_wildcards() && set.identifier().key == *colour)
            .any(|set| set.add_card(Arc::clone(card)));
        if placed {
            continue;
        }

        if card.improvement().is_some() {
            leftover.push(card.key.clone());
            continue;
        }
        if card.is_universal_wildcard() {
            place_wildcard(merged, card, card)?;
            continue;
        }

        let mut set = PropertySet::new(Arc::clone(incoming.identifier()))?;
        if set.add_card(Arc::clone(card)) {
            insert_colour_set(merged, set);
        } else {
            leftover.push(card.key.clone());
        }
    }
    Ok(())
}

fn place_wildcard(
    merged: &mut Vec<GroupedSet>,
    identifier: &Arc<Card>,
    wildcard: &Arc<Card>,
) -> RulesResult<()> {
    let colour_sets = merged
        .iter()
        .position(GroupedSet::is_wildcards)
        .unwrap_or(merged.len());

    if place_first_fit(&mut merged[..colour_sets], wildcard) {
        return Ok(());
    }

    if let Some(set) = merged.get_mut(colour_sets) {
        set.add_card(Arc::clone(wildcard));
        return Ok(());
    }

    let mut set = WildcardAllColourSet::new(Arc::clone(identifier))?;
    set.add_card(Arc::clone(wildcard));
    merged.push(set.into());
    Ok(())
}

/// Properties in their original order, then houses, then hotels.
fn in_attach_order(cards: &[Arc<Card>]) -> impl Iterator<Item = &Arc<Card>> {
    let properties = cards.iter().filter(|c| c.improvement().is_none());
    let houses = cards.iter().filter(|c| c.improvement() == Some(ActionKind::House));
    let hotels = cards.iter().filter(|c| c.improvement() == Some(ActionKind::Hotel));
    properties.chain(houses).chain(hotels)
}
