//! Whether a card may be played for its effect, and wildcard flipping.

use crate::cards::{ActionKind, Card, CardKey, CardKind, CardRegistry, RentTarget};
use crate::core::error::RulesResult;
use crate::core::placed::PlacedCards;

/// Check if `card` may be played given what the player has placed.
///
/// - Actions are always playable, except forced deal, which needs a
///   property to give away.
/// - Rent needs a property of a colour it charges for. Dual-colour
///   wildcards count as their current colour; the universal wildcard counts
///   only toward all-colour rent.
/// - Money and properties are placed, never played.
pub fn can_play_card(
    registry: &CardRegistry,
    card: &CardKey,
    placed: &PlacedCards,
) -> RulesResult<bool> {
    let card = registry.resolve(card)?;

    let playable = match &card.kind {
        CardKind::Action {
            action: ActionKind::ForcedDeal,
            ..
        } => any_placed(registry, placed, Card::is_property)?,
        CardKind::Action { .. } => true,
        CardKind::Rent {
            target: RentTarget::AllColours,
        } => any_placed(registry, placed, Card::is_property)?,
        CardKind::Rent { target } => any_placed(registry, placed, |property| {
            property
                .colour()
                .is_some_and(|colour| target.applies_to(colour))
        })?,
        CardKind::Money | CardKind::Property { .. } | CardKind::PropertyWildcard { .. } => false,
    };

    if !playable {
        tracing::debug!(card = %card.key, "card cannot be played");
    }
    Ok(playable)
}

/// Check if `card` is a dual-colour wildcard that can change colour.
pub fn can_flip_card(registry: &CardRegistry, card: &CardKey) -> RulesResult<bool> {
    Ok(registry.resolve(card)?.flip_to().is_some())
}

/// Key of the other orientation of a dual-colour wildcard.
///
/// `None` for any card that cannot flip.
pub fn flip_card(registry: &CardRegistry, card: &CardKey) -> RulesResult<Option<CardKey>> {
    Ok(registry.resolve(card)?.flip_to().cloned())
}

/// Check placed properties against `predicate`.
///
/// Improvements sit in the property pile too, so callers filter on the
/// card kind rather than the pile length.
fn any_placed<F>(registry: &CardRegistry, placed: &PlacedCards, mut predicate: F) -> RulesResult<bool>
where
    F: FnMut(&Card) -> bool,
{
    for key in &placed.properties {
        let card: &Card = registry.resolve(key)?;
        if predicate(card) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::keys::*;
    use crate::cards::standard_registry;
    use crate::core::RulesError;

    fn can_play(card: &str, properties: &[&str]) -> bool {
        let registry = standard_registry();
        let placed = PlacedCards::with_properties(properties.iter().copied());
        can_play_card(&registry, &CardKey::new(card), &placed).unwrap()
    }

    #[test]
    fn test_actions_always_playable() {
        for action in [DEAL_BREAKER, SLY_DEAL, BIRTHDAY, DEBT_COLLECTOR, PASS_GO, JUST_SAY_NO] {
            assert!(can_play(action, &[]), "{action} should be playable");
        }
    }

    #[test]
    fn test_forced_deal_needs_property() {
        assert!(!can_play(FORCED_DEAL, &[]));
        assert!(can_play(FORCED_DEAL, &[PROPERTY_RED]));
        assert!(can_play(FORCED_DEAL, &[PROPERTY_WILDCARD]));
    }

    #[test]
    fn test_rent_matches_colour() {
        assert!(can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_BLUE]));
        assert!(!can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_PINK]));
        assert!(can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_PINK, PROPERTY_GREEN]));
    }

    #[test]
    fn test_rent_uses_wildcard_colour() {
        assert!(can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_BLUE_OR_GREEN]));
        assert!(can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_GREEN_OR_RAILROAD]));
        assert!(!can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_PINK_OR_ORANGE]));
        assert!(!can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_RAILROAD_OR_GREEN]));
        assert!(!can_play(RENT_BLUE_OR_GREEN, &[PROPERTY_WILDCARD]));
    }

    #[test]
    fn test_all_colour_rent() {
        assert!(!can_play(RENT_ALL_COLOUR, &[]));
        assert!(can_play(RENT_ALL_COLOUR, &[PROPERTY_RED]));
        assert!(can_play(RENT_ALL_COLOUR, &[PROPERTY_WILDCARD]));
    }

    #[test]
    fn test_money_and_properties_not_playable() {
        assert!(!can_play(MONEY_5, &[PROPERTY_RED]));
        assert!(!can_play(PROPERTY_RED, &[PROPERTY_RED]));
        assert!(!can_play(PROPERTY_WILDCARD, &[]));
    }

    #[test]
    fn test_unknown_card_fails() {
        let registry = standard_registry();
        let placed = PlacedCards::with_properties(["PROPERTY_MAUVE"]);

        assert_eq!(
            can_play_card(&registry, &CardKey::new(RENT_ALL_COLOUR), &placed),
            Err(RulesError::UnknownCard(CardKey::new("PROPERTY_MAUVE")))
        );
    }

    #[test]
    fn test_flip() {
        let registry = standard_registry();
        let key = CardKey::new;

        assert!(can_flip_card(&registry, &key(PROPERTY_PINK_OR_ORANGE)).unwrap());
        assert_eq!(
            flip_card(&registry, &key(PROPERTY_PINK_OR_ORANGE)).unwrap(),
            Some(key(PROPERTY_ORANGE_OR_PINK))
        );
        assert_eq!(
            flip_card(&registry, &key(PROPERTY_ORANGE_OR_PINK)).unwrap(),
            Some(key(PROPERTY_PINK_OR_ORANGE))
        );

        assert!(!can_flip_card(&registry, &key(PROPERTY_WILDCARD)).unwrap());
        assert!(!can_flip_card(&registry, &key(PROPERTY_PINK)).unwrap());
        assert_eq!(flip_card(&registry, &key(MONEY_1)).unwrap(), None);
    }
}
