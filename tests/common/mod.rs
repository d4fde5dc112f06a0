//! Shared helpers for integration tests.

#![allow(dead_code)]

use property_deal::{CardKey, CardRegistry, SerializedPropertySet};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test log subscriber.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Safe to call
/// from every test.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn keys(list: &[&str]) -> Vec<CardKey> {
    list.iter().map(|k| CardKey::new(*k)).collect()
}

/// Build a serialized set with the catalog's identifier card.
pub fn serialized(registry: &CardRegistry, identifier: &str, cards: &[&str]) -> SerializedPropertySet {
    let identifier = registry
        .get(&CardKey::new(identifier))
        .map(|card| card.as_ref().clone())
        .expect("identifier in catalog");
    SerializedPropertySet::new(identifier, cards.iter().copied())
}
