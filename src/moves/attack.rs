//! Cards that open a pending action: Bang!, Gatling, Indians, Duel and
//! General Store.

use tracing::debug;

use crate::cards::{CardId, CardType};
use crate::characters;
use crate::core::{GameState, PlayerId, Result};
use crate::stack::{PendingAction, PendingKind};
use crate::triggers::GameEvent;
use crate::zones;

use super::{play_from_hand, require_own_turn};

pub(super) fn play_bang(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    target: PlayerId,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, CardType::Bang, Some(target))?;
    state.players[actor].bangs_played_this_turn += 1;

    let requires_missed = if characters::requires_double_missed(state, actor) {
        2
    } else {
        1
    };
    debug!(attacker = %actor, %target, requires_missed, "Bang! opened");
    state.pending_action = Some(PendingAction::bang(actor, target, card, requires_missed));
    Ok(())
}

pub(super) fn play_gatling(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    open_multi(state, actor, card, CardType::Gatling, PendingKind::Gatling)
}

pub(super) fn play_indians(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    open_multi(state, actor, card, CardType::Indians, PendingKind::Indians)
}

/// Every other living player must answer in turn, in seat order from the
/// Sheriff.
fn open_multi(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    card_type: CardType,
    kind: PendingKind,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, card_type, None)?;
    let targets: Vec<PlayerId> = state
        .alive_players()
        .into_iter()
        .filter(|&p| p != actor)
        .collect();
    debug!(attacker = %actor, ?kind, targets = targets.len(), "multi-target attack opened");
    state.pending_action = PendingAction::multi(kind, actor, card, &targets);
    Ok(())
}

pub(super) fn play_duel(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    target: PlayerId,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, CardType::Duel, Some(target))?;
    debug!(challenger = %actor, %target, "Duel opened");
    state.pending_action = Some(PendingAction::duel(actor, target, card));
    Ok(())
}

/// Reveal one card per living player; each picks one in seat order from the
/// Sheriff, whoever opened the store.
pub(super) fn play_general_store(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, CardType::GeneralStore, None)?;

    let pickers = state.alive_players();
    let mut revealed = Vec::with_capacity(pickers.len());
    for _ in 0..pickers.len() {
        let shown = zones::draw_card(state)?;
        state.emit(GameEvent::CardRevealed {
            player: actor,
            card: shown,
        });
        revealed.push(shown);
    }
    debug!(player = %actor, cards = revealed.len(), "General Store opened");
    state.pending_action = PendingAction::general_store(actor, card, &pickers, revealed);
    Ok(())
}
