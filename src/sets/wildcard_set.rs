//! Universal wildcards that no colour set took.

use std::sync::Arc;

use super::CardSet;
use crate::cards::Card;
use crate::core::error::{RulesError, RulesResult};

/// Holds only universal wildcards.
///
/// Represents flexible value that has not claimed a colour: it never counts
/// as full and never charges rent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildcardAllColourSet {
    identifier: Arc<Card>,
    cards: Vec<Arc<Card>>,
}

impl WildcardAllColourSet {
    /// Create an empty set identified by the universal wildcard.
    pub fn new(identifier: Arc<Card>) -> RulesResult<Self> {
        if !identifier.is_universal_wildcard() {
            return Err(RulesError::InvalidIdentifier(identifier.key.clone()));
        }
        Ok(Self {
            identifier,
            cards: Vec::new(),
        })
    }

    pub(crate) fn restore(identifier: Arc<Card>, cards: Vec<Arc<Card>>) -> RulesResult<Self> {
        let mut set = Self::new(identifier)?;
        set.cards = cards;
        Ok(set)
    }

    /// Create a set holding the given wildcards.
    ///
    /// Cards that are not universal wildcards are skipped.
    pub fn with_cards(
        identifier: Arc<Card>,
        cards: impl IntoIterator<Item = Arc<Card>>,
    ) -> RulesResult<Self> {
        let mut set = Self::new(identifier)?;
        for card in cards {
            set.add_card(card);
        }
        Ok(set)
    }
}

impl CardSet for WildcardAllColourSet {
    fn identifier(&self) -> &Arc<Card> {
        &self.identifier
    }

    fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    fn add_card(&mut self, card: Arc<Card>) -> bool {
        if !card.is_universal_wildcard() {
            return false;
        }
        self.cards.push(card);
        true
    }

    fn is_full_set(&self) -> bool {
        false
    }
}
