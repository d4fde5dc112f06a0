//! Rules configuration.
//!
//! Tunables the engine reads instead of hardcoding. The defaults are the
//! standard game. Both values are at least 1 however the config is built,
//! including when it is deserialized.

use serde::{Deserialize, Serialize};

use super::error::{RulesError, RulesResult};

/// Full sets of distinct colours needed to win.
pub const DEFAULT_FULL_SETS_TO_WIN: usize = 3;

/// Cards a player may play in one turn.
pub const DEFAULT_MAX_ACTIONS_PER_TURN: usize = 3;

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRulesConfig")]
pub struct RulesConfig {
    full_sets_to_win: usize,
    max_actions_per_turn: usize,
}

/// Unchecked wire shape; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawRulesConfig {
    full_sets_to_win: usize,
    max_actions_per_turn: usize,
}

impl Default for RawRulesConfig {
    fn default() -> Self {
        Self {
            full_sets_to_win: DEFAULT_FULL_SETS_TO_WIN,
            max_actions_per_turn: DEFAULT_MAX_ACTIONS_PER_TURN,
        }
    }
}

impl TryFrom<RawRulesConfig> for RulesConfig {
    type Error = RulesError;

    fn try_from(raw: RawRulesConfig) -> RulesResult<Self> {
        Self::new(raw.full_sets_to_win, raw.max_actions_per_turn)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            full_sets_to_win: DEFAULT_FULL_SETS_TO_WIN,
            max_actions_per_turn: DEFAULT_MAX_ACTIONS_PER_TURN,
        }
    }
}

impl RulesConfig {
    /// Create a config, rejecting zero for either value.
    pub fn new(full_sets_to_win: usize, max_actions_per_turn: usize) -> RulesResult<Self> {
        if full_sets_to_win == 0 {
            return Err(RulesError::InvalidConfig(
                "full_sets_to_win must be at least 1".into(),
            ));
        }
        if max_actions_per_turn == 0 {
            return Err(RulesError::InvalidConfig(
                "max_actions_per_turn must be at least 1".into(),
            ));
        }
        Ok(Self {
            full_sets_to_win,
            max_actions_per_turn,
        })
    }

    /// Distinct full colour sets a player needs to win.
    #[must_use]
    pub fn full_sets_to_win(&self) -> usize {
        self.full_sets_to_win
    }

    /// Cards a player may play per turn. Enforced by the turn layer; the
    /// engine only carries the value.
    #[must_use]
    pub fn max_actions_per_turn(&self) -> usize {
        self.max_actions_per_turn
    }

    /// Set the number of full sets needed to win.
    #[must_use]
    pub fn with_full_sets_to_win(mut self, count: usize) -> Self {
        assert!(count > 0, "Must need at least 1 full set to win");
        self.full_sets_to_win = count;
        self
    }

    /// Set the number of cards playable per turn.
    #[must_use]
    pub fn with_max_actions_per_turn(mut self, count: usize) -> Self {
        assert!(count > 0, "Must allow at least 1 action per turn");
        self.max_actions_per_turn = count;
        self
    }
}
