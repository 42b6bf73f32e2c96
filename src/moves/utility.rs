//! Brown cards that resolve at once, and Sid Ketchum's ability.

use tracing::debug;

use crate::cards::{CardId, CardType};
use crate::characters::Ability;
use crate::core::{GameState, PlayerId, Rejection, Result, TurnStage};
use crate::triggers::GameEvent;
use crate::turn;
use crate::zones;

use super::{play_from_hand, require_own_turn};

pub(super) fn play_beer(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    require_own_turn(state, actor)?;
    let p = &state.players[actor];
    if p.health >= p.max_health {
        return Err(Rejection::FullHealth.into());
    }
    if state.alive_count() <= 2 {
        return Err(Rejection::TooFewPlayers.into());
    }
    play_from_hand(state, actor, card, CardType::Beer, None)?;
    heal(state, actor, 1);
    Ok(())
}

/// Every living player regains one life point.
pub(super) fn play_saloon(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, CardType::Saloon, None)?;
    for player in state.alive_players() {
        heal(state, player, 1);
    }
    Ok(())
}

/// Stagecoach draws two, Wells Fargo three.
pub(super) fn play_draw_card(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    card_type: CardType,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, card_type, None)?;
    let count = if card_type == CardType::WellsFargo { 3 } else { 2 };
    zones::draw_cards(state, actor, count)?;
    Ok(())
}

/// Steal a card from a player at distance 1.
pub(super) fn play_panic(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    target: PlayerId,
    target_card: Option<CardId>,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, CardType::Panic, Some(target))?;
    let taken = take_card(state, target, target_card)?;
    state.players[actor].hand.push(taken);
    debug!(player = %actor, %target, card = %taken, "Panic! steals");
    state.emit(GameEvent::CardTaken {
        from: target,
        to: actor,
        card: taken,
    });
    Ok(())
}

/// Force any player to discard a card.
pub(super) fn play_cat_balou(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    target: PlayerId,
    target_card: Option<CardId>,
) -> Result<()> {
    require_own_turn(state, actor)?;
    play_from_hand(state, actor, card, CardType::CatBalou, Some(target))?;
    let taken = take_card(state, target, target_card)?;
    zones::discard(state, taken);
    state.emit(GameEvent::CardDiscarded {
        player: target,
        card: taken,
    });
    Ok(())
}

/// Discard two cards to regain one life point. Usable whenever Sid is the
/// player expected to act. In the discard stage the turn ends as soon as the
/// hand fits.
pub(super) fn sid_ketchum_heal(
    state: &mut GameState,
    actor: PlayerId,
    cards: [CardId; 2],
) -> Result<()> {
    if state.expected_actor() != Some(actor) {
        return Err(Rejection::NotYourTurn(actor).into());
    }
    let p = &state.players[actor];
    if p.character.ability() != Ability::DiscardForHealth {
        return Err(Rejection::AbilityUnavailable.into());
    }
    if cards[0] == cards[1] {
        return Err(Rejection::InvalidSelection.into());
    }
    if let Some(&missing) = cards.iter().find(|&&c| !p.has_in_hand(c)) {
        return Err(Rejection::CardNotOwned(missing).into());
    }
    if p.health >= p.max_health {
        return Err(Rejection::FullHealth.into());
    }

    for card in cards {
        zones::discard_from_hand(state, actor, card);
    }
    state.note_ability_use(actor);
    heal(state, actor, 1);

    let p = &state.players[actor];
    if state.turn_stage == TurnStage::Discard && p.hand.len() <= usize::from(p.health) {
        debug!(player = %actor, "hand fits after heal, discard stage over");
        turn::end_turn(state)?;
    }
    Ok(())
}

/// Remove a card from `target`: the named in-play card, or one at random
/// from hand and play together.
fn take_card(state: &mut GameState, target: PlayerId, named: Option<CardId>) -> Result<CardId> {
    let card = match named {
        Some(card) => {
            if !state.players[target].take_from_play(card) {
                return Err(Rejection::InvalidSelection.into());
            }
            card
        }
        None => {
            let hand_len = state.players[target].hand.len();
            let total = state.players[target].card_count();
            let index = state.rng.pick_index(total).ok_or(Rejection::IllegalTarget(target))?;
            let p = &mut state.players[target];
            if index < hand_len {
                p.hand.remove(index)
            } else {
                p.in_play.remove(index - hand_len)
            }
        }
    };
    let registry = state.card_map.clone();
    state.players[target].refresh_equipment(&registry);
    Ok(card)
}

fn heal(state: &mut GameState, player: PlayerId, amount: u8) {
    let gained = state.players[player].heal(amount);
    if gained > 0 {
        state.emit(GameEvent::Healed {
            player,
            amount: gained,
        });
    }
}
