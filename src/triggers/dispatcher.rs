//! Character ability dispatcher.
//!
//! Each character maps to a small table of hooks, one slot per trigger.
//! The table is built by an exhaustive match over [`Character`], so adding a
//! character without deciding its hooks does not compile.

use tracing::debug;

use crate::characters::Character;
use crate::core::{GameState, PlayerId, Result};
use crate::zones;

use super::event::GameEvent;

/// Event points at which abilities may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityTrigger {
    OnDrawPhase,
    OnDamage {
        amount: u8,
        attacker: Option<PlayerId>,
    },
    /// Fired for every living player when `dead` is eliminated, before the
    /// dead player's cards are discarded.
    OnDeath {
        dead: PlayerId,
    },
    OnHandEmpty,
}

/// Returned by draw-phase hooks to replace the ordinary two-card draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawHint {
    UseSpecialDraw,
    CanDrawFromPlayer,
    CanDrawFromDiscard,
}

pub type Hook = fn(&mut GameState, PlayerId, AbilityTrigger) -> Result<Option<DrawHint>>;

/// Hook slots of one character.
#[derive(Clone, Copy, Default)]
pub struct AbilityHooks {
    pub on_draw_phase: Option<Hook>,
    pub on_damage: Option<Hook>,
    pub on_death: Option<Hook>,
    pub on_hand_empty: Option<Hook>,
}

impl std::fmt::Debug for AbilityHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbilityHooks")
            .field("on_draw_phase", &self.on_draw_phase.is_some())
            .field("on_damage", &self.on_damage.is_some())
            .field("on_death", &self.on_death.is_some())
            .field("on_hand_empty", &self.on_hand_empty.is_some())
            .finish()
    }
}

/// Hook table for a character. Passive abilities have no hooks; they are
/// read where the rule they modify is checked.
#[must_use]
pub fn hooks(character: Character) -> AbilityHooks {
    let none = AbilityHooks::default();
    match character {
        Character::BartCassidy => AbilityHooks {
            on_damage: Some(draw_per_damage),
            ..none
        },
        Character::ElGringo => AbilityHooks {
            on_damage: Some(take_from_attacker),
            ..none
        },
        Character::BlackJack | Character::KitCarlson => AbilityHooks {
            on_draw_phase: Some(special_draw),
            ..none
        },
        Character::JesseJones => AbilityHooks {
            on_draw_phase: Some(draw_from_player),
            ..none
        },
        Character::PedroRamirez => AbilityHooks {
            on_draw_phase: Some(draw_from_discard),
            ..none
        },
        Character::SuzyLafayette => AbilityHooks {
            on_hand_empty: Some(draw_when_empty),
            ..none
        },
        Character::VultureSam => AbilityHooks {
            on_death: Some(take_dead_cards),
            ..none
        },
        Character::CalamityJanet
        | Character::Jourdonnais
        | Character::LuckyDuke
        | Character::PaulRegret
        | Character::RoseDoolan
        | Character::SidKetchum
        | Character::SlabTheKiller
        | Character::WillyTheKid => none,
    }
}

/// Run `player`'s hook for `trigger`, if their character has one.
pub fn trigger(
    state: &mut GameState,
    player: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    let table = hooks(state.players[player].character);
    let hook = match trigger {
        AbilityTrigger::OnDrawPhase => table.on_draw_phase,
        AbilityTrigger::OnDamage { .. } => table.on_damage,
        AbilityTrigger::OnDeath { .. } => table.on_death,
        AbilityTrigger::OnHandEmpty => table.on_hand_empty,
    };
    match hook {
        Some(hook) => hook(state, player, trigger),
        None => Ok(None),
    }
}

/// Fire `OnHandEmpty` for every living player.
pub fn fire_hand_empty(state: &mut GameState) -> Result<()> {
    for player in state.alive_players() {
        trigger(state, player, AbilityTrigger::OnHandEmpty)?;
    }
    Ok(())
}

/// Fire `OnDeath` for every living player.
pub fn fire_death(state: &mut GameState, dead: PlayerId) -> Result<()> {
    for player in state.alive_players() {
        trigger(state, player, AbilityTrigger::OnDeath { dead })?;
    }
    Ok(())
}

fn draw_per_damage(
    state: &mut GameState,
    player: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    if let AbilityTrigger::OnDamage { amount, .. } = trigger {
        debug!(%player, amount, "Bart Cassidy draws for damage");
        zones::draw_cards(state, player, usize::from(amount))?;
        state.note_ability_use(player);
    }
    Ok(None)
}

fn take_from_attacker(
    state: &mut GameState,
    player: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    let AbilityTrigger::OnDamage {
        attacker: Some(attacker),
        ..
    } = trigger
    else {
        return Ok(None);
    };
    if attacker == player || !state.is_alive(attacker) {
        return Ok(None);
    }
    let hand_len = state.players[attacker].hand.len();
    if let Some(index) = state.rng.pick_index(hand_len) {
        let card = state.players[attacker].hand.remove(index);
        state.players[player].hand.push(card);
        state.note_ability_use(player);
        debug!(%player, %attacker, "El Gringo takes a card");
        state.emit(GameEvent::CardTaken {
            from: attacker,
            to: player,
            card,
        });
    }
    Ok(None)
}

fn special_draw(
    _: &mut GameState,
    _: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    Ok((trigger == AbilityTrigger::OnDrawPhase).then_some(DrawHint::UseSpecialDraw))
}

fn draw_from_player(
    _: &mut GameState,
    _: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    Ok((trigger == AbilityTrigger::OnDrawPhase).then_some(DrawHint::CanDrawFromPlayer))
}

fn draw_from_discard(
    _: &mut GameState,
    _: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    Ok((trigger == AbilityTrigger::OnDrawPhase).then_some(DrawHint::CanDrawFromDiscard))
}

fn draw_when_empty(
    state: &mut GameState,
    player: PlayerId,
    _: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    if state.players[player].hand.is_empty() {
        debug!(%player, "Suzy Lafayette draws on empty hand");
        zones::draw_cards(state, player, 1)?;
        state.note_ability_use(player);
    }
    Ok(None)
}

fn take_dead_cards(
    state: &mut GameState,
    player: PlayerId,
    trigger: AbilityTrigger,
) -> Result<Option<DrawHint>> {
    let AbilityTrigger::OnDeath { dead } = trigger else {
        return Ok(None);
    };
    let estate = {
        let victim = &mut state.players[dead];
        let mut cards = std::mem::take(&mut victim.hand);
        cards.append(&mut victim.in_play);
        cards
    };
    let registry = state.card_map.clone();
    state.players[dead].refresh_equipment(&registry);

    debug!(%player, %dead, cards = estate.len(), "Vulture Sam takes the estate");
    for &card in &estate {
        state.emit(GameEvent::CardTaken {
            from: dead,
            to: player,
            card,
        });
    }
    state.players[player].hand.extend(estate);
    state.note_ability_use(player);
    Ok(None)
}
