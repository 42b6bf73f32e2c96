//! Seating distance and weapon range.

use crate::characters::Ability;
use crate::core::{GameState, PlayerId};

/// Returned when either player is not seated among the living.
pub const UNREACHABLE: u32 = u32::MAX;

/// Range without a weapon (the Colt .45).
pub const DEFAULT_RANGE: u32 = 1;

/// Hop count between two living players around the table, shorter way.
#[must_use]
pub fn base_distance(state: &GameState, from: PlayerId, to: PlayerId) -> u32 {
    if from == to {
        return 0;
    }
    let alive = state.alive_players();
    let (Some(i), Some(j)) = (
        alive.iter().position(|&p| p == from),
        alive.iter().position(|&p| p == to),
    ) else {
        return UNREACHABLE;
    };
    let n = alive.len();
    let clockwise = (j + n - i) % n;
    let counter = (i + n - j) % n;
    clockwise.min(counter) as u32
}

/// Distance from `from` to `to` with every modifier applied, in order:
/// target Mustang, attacker Scope, Paul Regret, Rose Doolan. Never below 1
/// between distinct players.
#[must_use]
pub fn distance(state: &GameState, from: PlayerId, to: PlayerId) -> u32 {
    let mut d = base_distance(state, from, to);
    if d == 0 || d == UNREACHABLE {
        return d;
    }
    let attacker = &state.players[from];
    let target = &state.players[to];

    if target.mustang {
        d += 1;
    }
    if attacker.scope {
        d = d.saturating_sub(1).max(1);
    }
    if target.character.ability() == Ability::DistancePlusOne {
        d += 1;
    }
    if attacker.character.ability() == Ability::DistanceMinusOne {
        d = d.saturating_sub(1).max(1);
    }
    d.max(1)
}

/// Weapon range of a player.
#[must_use]
pub fn attack_range(state: &GameState, player: PlayerId) -> u32 {
    state.players[player]
        .weapon
        .and_then(|id| state.card_type(id))
        .and_then(|t| t.range())
        .unwrap_or(DEFAULT_RANGE)
}

#[must_use]
pub fn is_in_range(state: &GameState, attacker: PlayerId, target: PlayerId) -> bool {
    distance(state, attacker, target) <= attack_range(state, attacker)
}

/// Living players `attacker` can reach with a Bang!, in turn order.
#[must_use]
pub fn players_in_range(state: &GameState, attacker: PlayerId) -> Vec<PlayerId> {
    state
        .alive_players()
        .into_iter()
        .filter(|&p| p != attacker && is_in_range(state, attacker, p))
        .collect()
}
