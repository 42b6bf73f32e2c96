//! Move handlers and the transactional entry point.
//!
//! [`apply`] is the only way a move reaches the state. It snapshots the
//! state, runs the handler, and restores the snapshot if the handler rejects
//! the move at any point, so a rejected move never leaves a trace. Accepted
//! moves are appended to the history and return the events they caused.
//!
//! ## Key Functions
//!
//! - [`apply`]: Validate and apply one move
//! - [`legal_moves`]: Enumerate the moves a player could send right now

mod attack;
mod death;
mod draw;
mod equipment;
mod legal;
mod response;
mod selection;
mod utility;

pub(crate) use death::apply_damage;
pub use legal::legal_moves;

use tracing::debug;

use crate::cards::{CardId, CardType};
use crate::core::{
    ActionRecord, EngineError, GameState, Move, Phase, PlayerId, Rejection, Result, TurnStage,
};
use crate::rules::validation::{can_play_card, effective_type};
use crate::stack::ResponseStage;
use crate::triggers::{self, GameEvent};
use crate::turn;
use crate::zones;

type Check = std::result::Result<(), Rejection>;

/// Apply `mv` on behalf of `actor`.
///
/// On success the returned events describe everything the move caused, in
/// order, including turn changes and the end of the match. On error the
/// state is exactly as it was before the call.
pub fn apply(state: &mut GameState, actor: PlayerId, mv: Move) -> Result<Vec<GameEvent>> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }
    if !state.player(actor)?.is_alive() {
        return Err(Rejection::DeadPlayer(actor).into());
    }

    let snapshot = state.clone();
    let (turn, sequence) = (state.turn_number, state.action_sequence);

    if let Err(err) = dispatch(state, actor, &mv).and_then(|()| settle(state)) {
        debug!(%actor, action = %mv, error = %err, "move rejected");
        *state = snapshot;
        return Err(err);
    }

    debug!(%actor, action = %mv, turn, sequence, "move applied");
    state
        .history
        .push_back(ActionRecord::new(actor, mv, turn, sequence));
    if state.turn_number == turn {
        state.action_sequence += 1;
    }
    Ok(state.take_events())
}

fn dispatch(state: &mut GameState, actor: PlayerId, mv: &Move) -> Result<()> {
    match *mv {
        Move::SelectCharacter { character } => selection::select_character(state, actor, character),
        Move::StandardDraw { choice } => draw::standard_draw(state, actor, choice),
        Move::PlayBang { card, target } => attack::play_bang(state, actor, card, target),
        Move::PlayGatling { card } => attack::play_gatling(state, actor, card),
        Move::PlayIndians { card } => attack::play_indians(state, actor, card),
        Move::PlayDuel { card, target } => attack::play_duel(state, actor, card, target),
        Move::PlayGeneralStore { card } => attack::play_general_store(state, actor, card),
        Move::PlayMissed { card } => response::play_missed(state, actor, card),
        Move::UseBarrel => response::use_barrel(state, actor),
        Move::TakeDamage { amount } => response::take_damage(state, actor, amount),
        Move::RespondToIndians { card } => response::respond_to_indians(state, actor, card),
        Move::RespondToDuel { card } => response::respond_to_duel(state, actor, card),
        Move::RespondToGeneralStore { card } => {
            response::respond_to_general_store(state, actor, card)
        }
        Move::PlayBeer { card } => utility::play_beer(state, actor, card),
        Move::PlaySaloon { card } => utility::play_saloon(state, actor, card),
        Move::PlayStagecoach { card } => {
            utility::play_draw_card(state, actor, card, CardType::Stagecoach)
        }
        Move::PlayWellsFargo { card } => {
            utility::play_draw_card(state, actor, card, CardType::WellsFargo)
        }
        Move::PlayPanic {
            card,
            target,
            target_card,
        } => utility::play_panic(state, actor, card, target, target_card),
        Move::PlayCatBalou {
            card,
            target,
            target_card,
        } => utility::play_cat_balou(state, actor, card, target, target_card),
        Move::SidKetchumHeal { cards } => utility::sid_ketchum_heal(state, actor, cards),
        Move::PlayDynamite { card } => equipment::play_dynamite(state, actor, card),
        Move::PlayJail { card, target } => equipment::play_jail(state, actor, card, target),
        Move::EquipCard { card } => equipment::equip_card(state, actor, card),
        Move::PassTurn => turn::pass_turn(state, actor),
        Move::DiscardCards { ref cards } => turn::discard_cards(state, actor, cards),
    }
}

/// Post-move bookkeeping shared by every handler.
fn settle(state: &mut GameState) -> Result<()> {
    if state.phase == Phase::Play {
        triggers::fire_hand_empty(state)?;
    }
    if turn::conclude(state) {
        return Ok(());
    }
    turn::advance_if_current_dead(state)
}

/// `actor` must be the current player in the main part of their turn with
/// nothing pending.
pub(crate) fn require_own_turn(state: &GameState, actor: PlayerId) -> Check {
    if state.phase == Phase::CharacterSelection {
        return Err(Rejection::WrongPhase("character selection"));
    }
    if actor != state.current {
        return Err(Rejection::NotYourTurn(actor));
    }
    if state.pending_action.is_some() {
        return Err(Rejection::PendingActionUnresolved);
    }
    if state.turn_stage == TurnStage::Discard {
        return Err(Rejection::WrongStage);
    }
    Ok(())
}

/// `actor` must be the target of a pending action in `stage`.
fn require_responder(state: &GameState, actor: PlayerId, stage: ResponseStage) -> Check {
    if state.phase == Phase::CharacterSelection {
        return Err(Rejection::WrongPhase("character selection"));
    }
    let pending = state
        .pending_action
        .as_ref()
        .ok_or(Rejection::NoPendingAction)?;
    if pending.target != actor {
        return Err(Rejection::NotYourTurn(actor));
    }
    if pending.response_stage() != stage {
        return Err(Rejection::WrongStage);
    }
    Ok(())
}

/// Validate and play `card` from `actor`'s hand as a `wanted` card: the card
/// goes to the discard pile.
fn play_from_hand(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    wanted: CardType,
    target: Option<PlayerId>,
) -> Result<()> {
    can_play_card(state, actor, card, wanted, target)?;
    state.players[actor].take_from_hand(card);
    zones::discard(state, card);
    debug!(player = %actor, %card, ?wanted, target = ?target, "card played");
    state.emit(GameEvent::CardPlayed {
        player: actor,
        card,
        target,
    });
    Ok(())
}

/// Discard a response card from hand. Unlike cards played on one's own turn,
/// responses need no draw first and have no target.
fn play_response(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    wanted: CardType,
) -> Result<()> {
    if !state.players[actor].has_in_hand(card) {
        return Err(Rejection::CardNotOwned(card).into());
    }
    let found = state.card(card)?.card_type;
    effective_type(state, actor, found, wanted).ok_or(Rejection::WrongCardType { found })?;
    state.players[actor].take_from_hand(card);
    zones::discard(state, card);
    state.emit(GameEvent::CardPlayed {
        player: actor,
        card,
        target: None,
    });
    Ok(())
}
