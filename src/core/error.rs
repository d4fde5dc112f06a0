//! Engine errors.
//!
//! Only invalid input fails a call. Rule outcomes (a refused play, a
//! rejected card, a merge leftover) are ordinary return values.

use thiserror::Error;

use crate::cards::CardKey;

/// Errors raised for input the engine cannot interpret.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The key has no entry in the card registry.
    #[error("unknown card key `{0}`")]
    UnknownCard(CardKey),

    /// A set was organised around a card that cannot identify a set.
    #[error("card `{0}` cannot identify a property set")]
    InvalidIdentifier(CardKey),

    /// A rules configuration value is out of range.
    #[error("invalid rules config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the engine.
pub type RulesResult<T> = Result<T, RulesError>;
