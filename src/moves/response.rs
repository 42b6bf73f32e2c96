//! Answers to a pending action. Only its current target may send these.

use tracing::debug;

use crate::cards::{CardId, CardType};
use crate::characters;
use crate::core::{GameState, PlayerId, Rejection, Result};
use crate::stack::{self, PendingKind, ResponseStage};
use crate::triggers::{CheckKind, GameEvent};
use crate::zones;

use super::{apply_damage, play_response, require_responder};

/// Damage dealt by a failed response.
const HIT: u8 = 1;

pub(super) fn play_missed(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    require_responder(state, actor, ResponseStage::RespondToBang)?;
    play_response(state, actor, card, CardType::Missed)?;

    let remaining = match state.pending_action.as_mut() {
        Some(pending) => {
            pending.requires_missed = pending.requires_missed.saturating_sub(1);
            pending.requires_missed
        }
        None => 0,
    };
    if remaining == 0 {
        dodge(state, actor);
    }
    Ok(())
}

/// One draw! per attack: a heart cancels it outright.
pub(super) fn use_barrel(state: &mut GameState, actor: PlayerId) -> Result<()> {
    require_responder(state, actor, ResponseStage::RespondToBang)?;
    let virtual_barrel = characters::has_virtual_barrel(state, actor);
    if !state.players[actor].barrel && !virtual_barrel {
        return Err(Rejection::AbilityUnavailable.into());
    }
    if let Some(pending) = state.pending_action.as_mut() {
        if pending.barrel_used {
            return Err(Rejection::BarrelAlreadyUsed.into());
        }
        pending.barrel_used = true;
    }
    if virtual_barrel {
        state.note_ability_use(actor);
    }

    let (_, success) = zones::draw_check(state, actor, CheckKind::Barrel, zones::is_hearts)?;
    if success {
        dodge(state, actor);
    }
    Ok(())
}

/// Accept one hit from a Bang!, Gatling or Indians.
pub(super) fn take_damage(state: &mut GameState, actor: PlayerId, amount: u8) -> Result<()> {
    let pending = state
        .pending_action
        .as_ref()
        .ok_or(Rejection::NoPendingAction)?;
    if pending.target != actor {
        return Err(Rejection::NotYourTurn(actor).into());
    }
    if !matches!(
        pending.kind,
        PendingKind::Bang | PendingKind::Gatling | PendingKind::Indians
    ) {
        return Err(Rejection::WrongStage.into());
    }
    if amount != HIT {
        return Err(Rejection::WrongDamageAmount {
            expected: HIT,
            got: amount,
        }
        .into());
    }

    let source = pending.source;
    apply_damage(state, actor, HIT, Some(source))?;
    stack::advance_or_clear(state);
    Ok(())
}

/// Discard a Bang! or take a hit.
pub(super) fn respond_to_indians(
    state: &mut GameState,
    actor: PlayerId,
    card: Option<CardId>,
) -> Result<()> {
    require_responder(state, actor, ResponseStage::RespondToIndians)?;
    match card {
        Some(card) => play_response(state, actor, card, CardType::Bang)?,
        None => {
            let source = state.pending_action.as_ref().map(|p| p.source);
            apply_damage(state, actor, HIT, source)?;
        }
    }
    stack::advance_or_clear(state);
    Ok(())
}

/// Answer with a Bang! and hand the duel back, or lose it.
pub(super) fn respond_to_duel(
    state: &mut GameState,
    actor: PlayerId,
    card: Option<CardId>,
) -> Result<()> {
    require_responder(state, actor, ResponseStage::RespondToDuel)?;
    if let Some(card) = card {
        play_response(state, actor, card, CardType::Bang)?;
        if let Some(pending) = state.pending_action.as_mut() {
            pending.swap_duelists();
            debug!(player = %actor, exchanges = pending.bang_count, "duel continues");
        }
        return Ok(());
    }

    let winner = state
        .pending_action
        .take()
        .map(|p| p.source)
        .ok_or(Rejection::NoPendingAction)?;
    debug!(loser = %actor, %winner, "duel lost");
    apply_damage(state, actor, HIT, Some(winner))
}

/// Take one card from the General Store pool.
pub(super) fn respond_to_general_store(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
) -> Result<()> {
    require_responder(state, actor, ResponseStage::RespondToGeneralStore)?;
    let pending = state
        .pending_action
        .as_mut()
        .ok_or(Rejection::NoPendingAction)?;
    let index = pending
        .revealed_cards
        .iter()
        .position(|&c| c == card)
        .ok_or(Rejection::InvalidSelection)?;
    pending.revealed_cards.remove(index);

    state.players[actor].hand.push(card);
    state.emit(GameEvent::CardsDrawn {
        player: actor,
        count: 1,
    });
    stack::advance_or_clear(state);
    Ok(())
}

fn dodge(state: &mut GameState, player: PlayerId) {
    debug!(%player, "attack cancelled");
    state.emit(GameEvent::Dodged { player });
    stack::advance_or_clear(state);
}
