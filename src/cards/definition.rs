//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of one card face: what it is
//! worth when banked, and what it does when played or placed. The same key
//! appears many times in a deck (three red properties, ten pass-go cards);
//! all copies share one definition.
//!
//! The behaviour of a card is carried by `CardKind`, a tagged variant with
//! the fields that only make sense for that kind of card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Token naming a card definition.
///
/// Keys are plain strings on the wire (`"PROPERTY_BLUE"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(String);

impl CardKey {
    /// Create a new card key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for CardKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Rent amounts indexed by (properties in set - 1).
pub type RentTable = SmallVec<[u32; 4]>;

/// Colour keys a rent card can charge against.
pub type ColourList = SmallVec<[CardKey; 2]>;

/// Every action a card can perform when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    DealBreaker,
    JustSayNo,
    SlyDeal,
    /// Swap one of your properties for an opponent's; needs a property to give.
    ForcedDeal,
    DebtCollector,
    Birthday,
    PassGo,
    House,
    Hotel,
    DoubleTheRent,
}

impl ActionKind {
    /// House and hotel improve a full set rather than acting on their own.
    #[must_use]
    pub const fn is_improvement(self) -> bool {
        matches!(self, ActionKind::House | ActionKind::Hotel)
    }
}

/// Which colours a rent card charges for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RentTarget {
    /// Charges rent on any colour.
    AllColours,
    /// Charges rent on the listed colour keys only.
    Colours(ColourList),
}

impl RentTarget {
    /// Check if this rent applies to the given colour key.
    #[must_use]
    pub fn applies_to(&self, colour: &CardKey) -> bool {
        match self {
            RentTarget::AllColours => true,
            RentTarget::Colours(colours) => colours.contains(colour),
        }
    }
}

/// Card behaviour, one variant per card type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    /// Currency only.
    Money,

    /// An action played for its effect.
    Action {
        action: ActionKind,
        /// Amount each target pays, for actions that demand payment.
        payment_amount: Option<u32>,
    },

    /// Charges rent for the colours in `target`.
    Rent { target: RentTarget },

    /// A colour-defining property card.
    Property {
        /// Distinct properties needed to complete a set of this colour.
        needs: usize,
        rent: RentTable,
    },

    /// A property wildcard.
    ///
    /// Dual-colour wildcards count as `treat_as` and flip to the card with
    /// the other colour. The universal wildcard has neither.
    PropertyWildcard {
        treat_as: Option<CardKey>,
        flip_to: Option<CardKey>,
    },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use property_deal::cards::{Card, CardKind};
///
/// let blue = Card::property("PROPERTY_BLUE", 4, 2, [3, 8]);
///
/// assert_eq!(blue.needs(), Some(2));
/// assert_eq!(blue.colour().map(|c| c.as_str()), Some("PROPERTY_BLUE"));
/// assert!(matches!(blue.kind, CardKind::Property { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique key of this definition.
    pub key: CardKey,

    /// Worth when used as currency.
    pub value: u32,

    /// What the card does.
    pub kind: CardKind,
}

impl Card {
    /// Create a money card.
    #[must_use]
    pub fn money(key: impl Into<CardKey>, value: u32) -> Self {
        Self {
            key: key.into(),
            value,
            kind: CardKind::Money,
        }
    }

    /// Create an action card.
    #[must_use]
    pub fn action(key: impl Into<CardKey>, value: u32, action: ActionKind) -> Self {
        Self {
            key: key.into(),
            value,
            kind: CardKind::Action {
                action,
                payment_amount: None,
            },
        }
    }

    /// Create a rent card.
    #[must_use]
    pub fn rent(key: impl Into<CardKey>, value: u32, target: RentTarget) -> Self {
        Self {
            key: key.into(),
            value,
            kind: CardKind::Rent { target },
        }
    }

    /// Create a colour-defining property card.
    #[must_use]
    pub fn property(
        key: impl Into<CardKey>,
        value: u32,
        needs: usize,
        rent: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            key: key.into(),
            value,
            kind: CardKind::Property {
                needs,
                rent: rent.into_iter().collect(),
            },
        }
    }

    /// Create a dual-colour wildcard counting as `treat_as`.
    #[must_use]
    pub fn dual_wildcard(
        key: impl Into<CardKey>,
        value: u32,
        treat_as: impl Into<CardKey>,
        flip_to: impl Into<CardKey>,
    ) -> Self {
        Self {
            key: key.into(),
            value,
            kind: CardKind::PropertyWildcard {
                treat_as: Some(treat_as.into()),
                flip_to: Some(flip_to.into()),
            },
        }
    }

    /// Create the universal wildcard.
    #[must_use]
    pub fn universal_wildcard(key: impl Into<CardKey>, value: u32) -> Self {
        Self {
            key: key.into(),
            value,
            kind: CardKind::PropertyWildcard {
                treat_as: None,
                flip_to: None,
            },
        }
    }

    /// Set the payment an action demands (builder pattern).
    ///
    /// Has no effect on cards that are not actions.
    #[must_use]
    pub fn with_payment(mut self, amount: u32) -> Self {
        if let CardKind::Action { payment_amount, .. } = &mut self.kind {
            *payment_amount = Some(amount);
        }
        self
    }

    #[must_use]
    pub fn is_money(&self) -> bool {
        matches!(self.kind, CardKind::Money)
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.kind, CardKind::Action { .. })
    }

    #[must_use]
    pub fn is_rent(&self) -> bool {
        matches!(self.kind, CardKind::Rent { .. })
    }

    /// Property cards and property wildcards of every flavour.
    #[must_use]
    pub fn is_property(&self) -> bool {
        matches!(
            self.kind,
            CardKind::Property { .. } | CardKind::PropertyWildcard { .. }
        )
    }

    #[must_use]
    pub fn is_universal_wildcard(&self) -> bool {
        matches!(self.kind, CardKind::PropertyWildcard { treat_as: None, .. })
    }

    /// Get the action, if this is an action card.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action { action, .. } => Some(action),
            _ => None,
        }
    }

    /// Get the improvement this card represents (house or hotel).
    #[must_use]
    pub fn improvement(&self) -> Option<ActionKind> {
        self.action_kind().filter(|a| a.is_improvement())
    }

    /// The colour key this card counts as inside a property set.
    ///
    /// Property cards count as themselves, dual-colour wildcards as their
    /// `treat_as`. The universal wildcard and non-property cards have none.
    #[must_use]
    pub fn colour(&self) -> Option<&CardKey> {
        match &self.kind {
            CardKind::Property { .. } => Some(&self.key),
            CardKind::PropertyWildcard { treat_as, .. } => treat_as.as_ref(),
            _ => None,
        }
    }

    /// Number of properties that complete a set of this colour.
    #[must_use]
    pub fn needs(&self) -> Option<usize> {
        match self.kind {
            CardKind::Property { needs, .. } => Some(needs),
            _ => None,
        }
    }

    /// Rent table of a colour-defining card; empty for anything else.
    #[must_use]
    pub fn rent_table(&self) -> &[u32] {
        match &self.kind {
            CardKind::Property { rent, .. } => rent,
            _ => &[],
        }
    }

    /// Payment demanded by an action card, if any.
    #[must_use]
    pub fn payment_amount(&self) -> Option<u32> {
        match self.kind {
            CardKind::Action { payment_amount, .. } => payment_amount,
            _ => None,
        }
    }

    /// Get the flipped orientation of a dual-colour wildcard.
    #[must_use]
    pub fn flip_to(&self) -> Option<&CardKey> {
        match &self.kind {
            CardKind::PropertyWildcard { flip_to, .. } => flip_to.as_ref(),
            _ => None,
        }
    }
}
