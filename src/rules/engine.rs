//! Rules engine trait.
//!
//! Drivers (a UI, a bot loop, a server) talk to a match through
//! `RulesEngine`:
//! - What moves are legal
//! - How moves modify state
//! - Win conditions

use crate::core::{GameState, Move, Phase, PlayerId, Result};
use crate::moves;
use crate::triggers::GameEvent;

use super::victory::{check_victory, VictoryResult};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty vec if the player can't act
/// - `apply_move`: Must be deterministic given the state's rng
/// - `check_victory`: Pure; `is_terminal` reads the recorded outcome
pub trait RulesEngine {
    /// Moves `player` may send right now.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move>;

    /// Apply a move. On error the state is unchanged.
    fn apply_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: Move,
    ) -> Result<Vec<GameEvent>>;

    /// Evaluate the victory rules against the current state.
    fn check_victory(&self, state: &GameState) -> Option<VictoryResult>;

    /// Returns `Some(result)` once the match has ended.
    fn is_terminal(&self, state: &GameState) -> Option<VictoryResult> {
        match &state.phase {
            Phase::GameOver(result) => Some(result.clone()),
            _ => None,
        }
    }

    /// Whether `mv` is among `player`'s legal moves.
    fn is_legal(&self, state: &GameState, player: PlayerId, mv: &Move) -> bool {
        self.legal_moves(state, player).contains(mv)
    }
}

/// The standard Bang! rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct BangRules;

impl RulesEngine for BangRules {
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        moves::legal_moves(state, player)
    }

    fn apply_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: Move,
    ) -> Result<Vec<GameEvent>> {
        moves::apply(state, player, mv)
    }

    fn check_victory(&self, state: &GameState) -> Option<VictoryResult> {
        check_victory(state)
    }
}
