//! Cards a player has put down on the table.
//!
//! `PlacedCards` is the raw, ungrouped snapshot the game store keeps per
//! player. Properties are grouped into sets on demand.

use serde::{Deserialize, Serialize};

use super::error::RulesResult;
use crate::cards::{CardKey, CardRegistry};

/// A player's banked money and placed properties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCards {
    /// Cards banked as money (money and action cards).
    #[serde(default)]
    pub bank: Vec<CardKey>,

    /// Property cards in placement order, including improvements.
    #[serde(default)]
    pub properties: Vec<CardKey>,
}

impl PlacedCards {
    /// Create a snapshot from bank and property keys.
    #[must_use]
    pub fn new(bank: Vec<CardKey>, properties: Vec<CardKey>) -> Self {
        Self { bank, properties }
    }

    /// Create a snapshot holding only properties.
    #[must_use]
    pub fn with_properties<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<CardKey>,
    {
        Self {
            bank: Vec::new(),
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    /// Value of everything the player could pay with.
    pub fn total_money(&self, registry: &CardRegistry) -> RulesResult<u32> {
        Ok(total_value(registry, &self.bank)? + total_value(registry, &self.properties)?)
    }
}

/// Sum of the catalog values of `cards`.
pub fn total_value(registry: &CardRegistry, cards: &[CardKey]) -> RulesResult<u32> {
    cards
        .iter()
        .try_fold(0, |acc, key| Ok(acc + registry.resolve(key)?.value))
}

/// Cards that may be banked: money and actions.
pub fn money_cards(registry: &CardRegistry, cards: &[CardKey]) -> RulesResult<Vec<CardKey>> {
    partition(registry, cards, true)
}

/// Everything that cannot be banked.
pub fn property_cards(registry: &CardRegistry, cards: &[CardKey]) -> RulesResult<Vec<CardKey>> {
    partition(registry, cards, false)
}

fn partition(registry: &CardRegistry, cards: &[CardKey], bankable: bool) -> RulesResult<Vec<CardKey>> {
    let mut out = Vec::new();
    for key in cards {
        let card = registry.resolve(key)?;
        if (card.is_money() || card.is_action()) == bankable {
            out.push(key.clone());
        }
    }
    Ok(out)
}
