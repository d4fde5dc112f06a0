//! How much a card makes the other players pay.

use crate::cards::{CardKey, CardRegistry};
use crate::core::error::RulesResult;
use crate::sets::{group_properties_into_sets, GroupedSet};

/// Amount each target owes when `card` is played against them.
///
/// Rent groups the charging player's `properties` and takes the highest
/// rent among the sets the card can charge for, or 0 if none qualifies.
/// Other cards return their catalog payment amount, 0 if they have none.
pub fn card_payment_amount(
    registry: &CardRegistry,
    card: &CardKey,
    properties: &[CardKey],
) -> RulesResult<u32> {
    let card = registry.resolve(card)?;
    if !card.is_rent() {
        return Ok(card.payment_amount().unwrap_or(0));
    }

    let sets = group_properties_into_sets(registry, properties)?;
    let amount = highest_rent(&sets, |set| set.is_rentable(card));

    tracing::trace!(card = %card.key, amount, "rent charged");
    Ok(amount)
}

/// Check if playing `card` makes other players pay.
///
/// True for every rent card and for actions with a catalog payment.
pub fn card_requires_payment(registry: &CardRegistry, card: &CardKey) -> RulesResult<bool> {
    let card = registry.resolve(card)?;
    Ok(card.is_rent() || card.payment_amount().is_some())
}

fn highest_rent<F>(sets: &[GroupedSet], mut eligible: F) -> u32
where
    F: FnMut(&GroupedSet) -> bool,
{
    sets.iter()
        .filter(|&set| eligible(set))
        .filter_map(GroupedSet::rent_amount)
        .max()
        .unwrap_or(0)
}
