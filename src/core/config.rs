//! Match configuration and setup.
//!
//! ```
//! use bang_rules::core::{MatchConfig, Phase};
//!
//! let state = MatchConfig::new()
//!     .player_count(5)
//!     .seed(42)
//!     .auto_select_characters(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(state.player_count(), 5);
//! assert_eq!(state.phase, Phase::Play);
//! ```

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{EngineError, Result};
use super::player::PlayerMap;
use super::rng::GameRng;
use super::state::{GameState, PlayerState};
use crate::cards::{CardId, CardRegistry};
use crate::characters;
use crate::roles::{self, MAX_PLAYERS, MIN_PLAYERS};

/// Settings for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Table size, 4-7.
    pub player_count: usize,
    /// Seed for every random decision of the match.
    pub seed: u64,
    /// Skip character selection: every seat keeps its first offered
    /// character and play starts immediately.
    pub auto_select_characters: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: 0,
            auto_select_characters: false,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::IllegalState(format!("bad match config: {e}")))
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn auto_select_characters(mut self, auto: bool) -> Self {
        self.auto_select_characters = auto;
        self
    }

    /// Check the settings without building anything.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(EngineError::IllegalState(format!(
                "invalid player count: {} (must be {MIN_PLAYERS}-{MAX_PLAYERS})",
                self.player_count
            )));
        }
        Ok(())
    }

    /// Deal a new match: shuffle the deck, assign roles (Sheriff at seat 0),
    /// offer two characters per seat and deal each hand up to max health.
    pub fn build(&self) -> Result<GameState> {
        self.validate()?;
        let n = self.player_count;
        let rng = GameRng::new(self.seed);

        let roles = roles::assign(&mut rng.for_context("roles"), n)
            .ok_or_else(|| EngineError::IllegalState(format!("no role table for {n} players")))?;
        let choices = characters::deal_choices(&mut rng.for_context("characters"), n)
            .ok_or_else(|| EngineError::IllegalState(format!("not enough characters for {n}")))?;

        let registry = Arc::new(CardRegistry::standard());
        let mut cards: Vec<CardId> = registry.ids();
        rng.for_context("deck").shuffle(&mut cards);
        let mut deck: Vector<CardId> = cards.into_iter().collect();

        let mut seats = Vec::with_capacity(n);
        for (role, offered) in roles.into_iter().zip(choices) {
            let mut seat = PlayerState::new(role, offered);
            for _ in 0..seat.max_health {
                let card = deck.pop_back().ok_or(EngineError::EmptyResource)?;
                seat.hand.push(card);
            }
            seats.push(seat);
        }

        let mut state = GameState::new(PlayerMap::from_vec(seats), deck, registry, rng);
        info!(
            players = n,
            seed = self.seed,
            sheriff = %state.sheriff,
            "match dealt"
        );

        if self.auto_select_characters {
            for (_, seat) in state.players.iter_mut() {
                seat.has_selected_character = true;
            }
            crate::turn::start_play(&mut state)?;
            state.take_events();
        }

        state.validate()?;
        Ok(state)
    }
}
