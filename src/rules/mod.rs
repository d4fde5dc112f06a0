//! Rules of play over placed cards.
//!
//! Every check here is a pure decision: a refused play is `Ok(false)`, an
//! unplaceable card is a leftover. Only unknown card keys fail.
//!
//! ## Key Types
//!
//! - `RulesEngine`: registry plus configuration, exposing every operation
//! - `GameResult`: winner or winners of a finished game
//!
//! The operations also exist as free functions over a `&CardRegistry`:
//! [`can_play_card`], [`card_payment_amount`], [`has_enough_full_sets_to_win`]
//! and friends.

pub mod engine;
pub mod legality;
pub mod payment;
pub mod win;

pub use engine::{GameResult, RulesEngine};
pub use legality::{can_flip_card, can_play_card, flip_card};
pub use payment::{card_payment_amount, card_requires_payment};
pub use win::{count_full_colours, has_enough_full_sets_to_win, has_full_sets};
