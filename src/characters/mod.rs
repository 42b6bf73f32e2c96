//! Character roster and the passive-ability queries.
//!
//! Event-driven abilities (draw phase, damage, death, empty hand) go through
//! the dispatcher in `triggers`. Passive abilities are plain predicates read
//! wherever the affected rule is checked.

pub mod roster;

pub use roster::{Ability, Character, CharacterDef, Timing};

use crate::core::{GameRng, GameState, PlayerId};

/// Willy the Kid, or anyone holding a Volcanic.
#[must_use]
pub fn has_unlimited_bangs(state: &GameState, player: PlayerId) -> bool {
    let p = &state.players[player];
    if p.character.ability() == Ability::UnlimitedBangs {
        return true;
    }
    p.weapon
        .and_then(|id| state.card_map.card_type(id))
        .is_some_and(|t| t == crate::cards::CardType::Volcanic)
}

/// Slab the Killer's Bangs need two Missed! to cancel.
#[must_use]
pub fn requires_double_missed(state: &GameState, attacker: PlayerId) -> bool {
    state.players[attacker].character.ability() == Ability::DoubleMissedRequired
}

/// Calamity Janet plays Bang! and Missed! interchangeably.
#[must_use]
pub fn can_swap_bang_missed(state: &GameState, player: PlayerId) -> bool {
    state.players[player].character.ability() == Ability::BangMissedSwap
}

/// Jourdonnais always counts as having a Barrel.
#[must_use]
pub fn has_virtual_barrel(state: &GameState, player: PlayerId) -> bool {
    state.players[player].character.ability() == Ability::VirtualBarrel
}

/// Lucky Duke flips two cards on every draw! check.
#[must_use]
pub fn flips_two_on_draw_check(state: &GameState, player: PlayerId) -> bool {
    state.players[player].character.ability() == Ability::DoubleDrawFlip
}

/// Deal two distinct characters to every seat from a shuffled roster.
///
/// Returns `None` if the roster cannot cover `player_count` seats.
pub fn deal_choices(rng: &mut GameRng, player_count: usize) -> Option<Vec<[Character; 2]>> {
    if player_count * 2 > Character::ALL.len() {
        return None;
    }
    let mut roster = Character::ALL.to_vec();
    rng.shuffle(&mut roster);
    Some(
        roster
            .chunks_exact(2)
            .take(player_count)
            .map(|pair| [pair[0], pair[1]])
            .collect(),
    )
}
