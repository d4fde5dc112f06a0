//! Card system: definitions, registry and the standard catalog.
//!
//! ## Key Types
//!
//! - `CardKey`: String token naming a card definition
//! - `Card`: Static card data; behaviour lives in the `CardKind` variant
//! - `CardRegistry`: Read-only key to definition lookup
//!
//! The engine works on keys and resolves them through a registry on demand.
//! Duplicate keys in a player's cards are normal.

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::{keys, standard_deck, standard_registry};
pub use definition::{ActionKind, Card, CardKey, CardKind, ColourList, RentTable, RentTarget};
pub use registry::CardRegistry;
