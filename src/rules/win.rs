//! Win detection over grouped sets.

use rustc_hash::FxHashSet;

use crate::cards::CardKey;
use crate::core::config::DEFAULT_FULL_SETS_TO_WIN;
use crate::sets::{CardSet, GroupedSet};

/// Distinct colours among the full sets.
///
/// Two full sets of the same colour count once. Wildcard sets are never
/// full, so they never count.
#[must_use]
pub fn count_full_colours(sets: &[GroupedSet]) -> usize {
    sets.iter()
        .filter(|set| set.is_full_set())
        .map(|set| &set.identifier().key)
        .collect::<FxHashSet<&CardKey>>()
        .len()
}

/// Check if the sets hold full sets of at least `threshold` colours.
#[must_use]
pub fn has_full_sets(sets: &[GroupedSet], threshold: usize) -> bool {
    count_full_colours(sets) >= threshold
}

/// Check the standard win condition: three full colours.
#[must_use]
pub fn has_enough_full_sets_to_win(sets: &[GroupedSet]) -> bool {
    has_full_sets(sets, DEFAULT_FULL_SETS_TO_WIN)
}
