//! Victory evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};
use crate::roles::Role;

/// Winning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// Sheriff and Deputies.
    Sheriff,
    Outlaws,
    Renegade,
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryResult {
    pub winner: Winner,
    /// Living players when the match ended, in turn order.
    pub survivors: Vec<PlayerId>,
}

impl VictoryResult {
    /// Check if a player's role is on the winning side.
    #[must_use]
    pub fn is_winner(&self, role: Role) -> bool {
        matches!(
            (self.winner, role),
            (Winner::Sheriff, Role::Sheriff | Role::Deputy)
                | (Winner::Outlaws, Role::Outlaw)
                | (Winner::Renegade, Role::Renegade)
        )
    }
}

/// `None` while the match continues.
#[must_use]
pub fn check_victory(state: &GameState) -> Option<VictoryResult> {
    let alive = state.alive_players();
    let has = |role: Role| alive.iter().any(|&p| state.players[p].role == role);
    let sheriff_alive = has(Role::Sheriff);
    let outlaws_alive = has(Role::Outlaw);
    let renegade_alive = has(Role::Renegade);
    let result = |winner| {
        Some(VictoryResult {
            winner,
            survivors: alive.clone(),
        })
    };

    if !sheriff_alive {
        if alive.len() == 1 && renegade_alive {
            return result(Winner::Renegade);
        }
        return result(Winner::Outlaws);
    }
    if !outlaws_alive && !renegade_alive {
        return result(Winner::Sheriff);
    }
    if alive.len() == 2 && sheriff_alive && renegade_alive {
        return None;
    }
    // unreachable while the Sheriff lives; kept with the rule order above
    if alive.len() == 1 && renegade_alive {
        return result(Winner::Renegade);
    }
    None
}
