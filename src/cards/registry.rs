//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition of a game. It is built
//! once and then only read; engine components share it behind an `Arc`.
//! Definitions are handed out as `Arc<Card>` so property sets can hold the
//! resolved cards without copying them.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardKey};
use crate::core::error::{RulesError, RulesResult};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use property_deal::cards::{Card, CardKey, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::money("MONEY_5", 5));
///
/// let found = registry.get(&CardKey::new("MONEY_5")).unwrap();
/// assert_eq!(found.value, 5);
/// assert!(registry.resolve(&CardKey::new("MONEY_6")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardKey, Arc<Card>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same key already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.key) {
            panic!("Card with key {} already registered", card.key);
        }
        self.cards.insert(card.key.clone(), Arc::new(card));
    }

    /// Register a card definition (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.register(card);
        self
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&Arc<Card>> {
        self.cards.get(key)
    }

    /// Get a card definition by key, failing on unknown keys.
    ///
    /// An unknown key is a data-integrity error, never a game condition.
    pub fn resolve(&self, key: &CardKey) -> RulesResult<&Arc<Card>> {
        self.cards.get(key).ok_or_else(|| {
            tracing::warn!(card = %key, "card key not in registry");
            RulesError::UnknownCard(key.clone())
        })
    }

    /// Resolve every key of a list, in order.
    pub fn resolve_all<'a, I>(&self, keys: I) -> RulesResult<Vec<Arc<Card>>>
    where
        I: IntoIterator<Item = &'a CardKey>,
    {
        keys.into_iter()
            .map(|key| self.resolve(key).map(Arc::clone))
            .collect()
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
