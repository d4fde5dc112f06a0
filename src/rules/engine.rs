//! The rules engine facade.
//!
//! `RulesEngine` bundles a shared card registry with the rules
//! configuration and exposes every rules operation as a method. The free
//! functions it wraps stay public for callers that bring their own
//! registry.

use std::sync::Arc;

use super::{legality, payment, win};
use crate::cards::{standard_registry, CardKey, CardRegistry};
use crate::core::config::RulesConfig;
use crate::core::error::RulesResult;
use crate::core::placed::{self, PlacedCards};
use crate::sets::{self, GroupedSet, Grouping, SerializedPropertySet};

/// Outcome of a win check across all players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult<P> {
    /// Single winner.
    Winner(P),
    /// Several players completed their sets on the same check.
    Winners(Vec<P>),
}

impl<P: PartialEq> GameResult<P> {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &P) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Winners(ps) => ps.contains(player),
        }
    }
}

/// Rules of the game over a fixed card catalog.
///
/// Cheap to clone; the registry is shared.
///
/// ## Example
///
/// ```
/// use property_deal::cards::{keys, CardKey};
/// use property_deal::core::PlacedCards;
/// use property_deal::rules::RulesEngine;
///
/// let engine = RulesEngine::standard();
/// let placed = PlacedCards::with_properties([keys::PROPERTY_BLUE]);
///
/// assert!(engine.can_play_card(&CardKey::new(keys::RENT_BLUE_OR_GREEN), &placed).unwrap());
/// assert!(!engine.can_play_card(&CardKey::new(keys::RENT_PINK_OR_ORANGE), &placed).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct RulesEngine {
    registry: Arc<CardRegistry>,
    config: RulesConfig,
}

impl RulesEngine {
    /// Create an engine over the given registry.
    #[must_use]
    pub fn new(registry: Arc<CardRegistry>, config: RulesConfig) -> Self {
        Self { registry, config }
    }

    /// Create an engine with the standard catalog and default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(standard_registry()), RulesConfig::default())
    }

    /// Replace the configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the shared card registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<CardRegistry> {
        &self.registry
    }

    /// Get the rules configuration.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    // === Cards ===

    /// Check if `card` may be played given what the player has placed.
    pub fn can_play_card(&self, card: &CardKey, placed: &PlacedCards) -> RulesResult<bool> {
        legality::can_play_card(&self.registry, card, placed)
    }

    /// Check if `card` is a dual-colour wildcard that can change colour.
    pub fn can_flip_card(&self, card: &CardKey) -> RulesResult<bool> {
        legality::can_flip_card(&self.registry, card)
    }

    /// Get the other orientation of a dual-colour wildcard.
    pub fn flip_card(&self, card: &CardKey) -> RulesResult<Option<CardKey>> {
        legality::flip_card(&self.registry, card)
    }

    /// Amount each target owes when `card` is played against `properties`.
    pub fn card_payment_amount(&self, card: &CardKey, properties: &[CardKey]) -> RulesResult<u32> {
        payment::card_payment_amount(&self.registry, card, properties)
    }

    /// Check if playing `card` makes other players pay.
    pub fn card_requires_payment(&self, card: &CardKey) -> RulesResult<bool> {
        payment::card_requires_payment(&self.registry, card)
    }

    /// Sum of the catalog values of `cards`.
    pub fn total_value(&self, cards: &[CardKey]) -> RulesResult<u32> {
        placed::total_value(&self.registry, cards)
    }

    /// Cards that may be banked: money and actions.
    pub fn money_cards(&self, cards: &[CardKey]) -> RulesResult<Vec<CardKey>> {
        placed::money_cards(&self.registry, cards)
    }

    /// Cards that cannot be banked.
    pub fn property_cards(&self, cards: &[CardKey]) -> RulesResult<Vec<CardKey>> {
        placed::property_cards(&self.registry, cards)
    }

    // === Sets ===

    /// Group a property pile into sets.
    pub fn group_properties_into_sets(&self, cards: &[CardKey]) -> RulesResult<Vec<GroupedSet>> {
        sets::group_properties_into_sets(&self.registry, cards)
    }

    /// Group a property pile, also reporting cards that found no set.
    pub fn group_properties(&self, cards: &[CardKey]) -> RulesResult<Grouping> {
        sets::group_properties(&self.registry, cards)
    }

    /// Merge `theirs` into `mine`, returning the cards no set accepted.
    pub fn merge_serialized_property_sets(
        &self,
        mine: &mut Vec<SerializedPropertySet>,
        theirs: &[SerializedPropertySet],
    ) -> RulesResult<Vec<CardKey>> {
        sets::merge_serialized_property_sets(&self.registry, mine, theirs)
    }

    // === Winning ===

    /// Check grouped sets against the configured win threshold.
    #[must_use]
    pub fn has_enough_full_sets_to_win(&self, sets: &[GroupedSet]) -> bool {
        win::has_full_sets(sets, self.config.full_sets_to_win())
    }

    /// Group a player's properties and check them for a win.
    pub fn player_has_won(&self, placed: &PlacedCards) -> RulesResult<bool> {
        let sets = self.group_properties_into_sets(&placed.properties)?;
        Ok(self.has_enough_full_sets_to_win(&sets))
    }

    /// Check every player for a win.
    ///
    /// Returns `None` while nobody has won. Simultaneous winners are listed
    /// in input order.
    pub fn game_result<'a, P, I>(&self, players: I) -> RulesResult<Option<GameResult<P>>>
    where
        I: IntoIterator<Item = (P, &'a PlacedCards)>,
    {
        let mut winners = Vec::new();
        for (player, placed) in players {
            if self.player_has_won(placed)? {
                winners.push(player);
            }
        }

        let result = match winners.len() {
            0 => None,
            1 => winners.pop().map(GameResult::Winner),
            _ => Some(GameResult::Winners(winners)),
        };
        if result.is_some() {
            tracing::debug!("game over");
        }
        Ok(result)
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::standard()
    }
}
