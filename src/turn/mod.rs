//! Turn and phase state machine.
//!
//! `CharacterSelection` ends when every seat has chosen; play then starts at
//! the Sheriff and rotates clockwise over living players. Each turn begins
//! by resolving Dynamite, then Jail, before the player may draw.
//!
//! ## Key Functions
//!
//! - [`start_play`]: Leave character selection and begin the Sheriff's turn
//! - [`begin_turn`]: Start-of-turn resets and draw! checks
//! - [`end_turn`]: Hand the turn to the next living player
//! - [`conclude`]: End the match if a side has won

use tracing::{debug, info};

use crate::cards::{CardId, CardType};
use crate::core::{EngineError, GameState, Phase, PlayerId, Rejection, Result, TurnStage};
use crate::moves::{apply_damage, require_own_turn};
use crate::rules::victory::check_victory;
use crate::triggers::{CheckKind, GameEvent};
use crate::zones;

/// Damage of an exploding Dynamite.
const DYNAMITE_DAMAGE: u8 = 3;

/// Switch to the play phase and begin the Sheriff's first turn.
pub fn start_play(state: &mut GameState) -> Result<()> {
    state.phase = Phase::Play;
    let sheriff = state.sheriff;
    info!(%sheriff, players = state.player_count(), "play started");
    state.emit(GameEvent::PlayStarted { sheriff });
    begin_turn(state, sheriff)
}

/// Begin `player`'s turn.
///
/// Dynamite may kill the player and Jail may skip the turn; either way the
/// turn passes on until someone gets to play or the match ends.
pub fn begin_turn(state: &mut GameState, mut player: PlayerId) -> Result<()> {
    loop {
        reset_turn(state, player);

        if state.players[player].dynamite {
            resolve_dynamite(state, player)?;
            if conclude(state) {
                return Ok(());
            }
            if !state.is_alive(player) {
                player = next_player(state, player)?;
                continue;
            }
        }

        if state.players[player].in_jail && !resolve_jail(state, player)? {
            debug!(%player, "turn skipped in jail");
            state.emit(GameEvent::TurnSkipped { player });
            player = next_player(state, player)?;
            continue;
        }
        return Ok(());
    }
}

/// Hand the turn to the next living player.
pub fn end_turn(state: &mut GameState) -> Result<()> {
    let next = next_player(state, state.current)?;
    begin_turn(state, next)
}

/// Move on if the current player died on their own turn and nothing is left
/// to resolve.
pub fn advance_if_current_dead(state: &mut GameState) -> Result<()> {
    if state.phase == Phase::Play
        && !state.is_alive(state.current)
        && state.pending_action.is_none()
    {
        return end_turn(state);
    }
    Ok(())
}

/// End the match if a side has won. Returns `true` once the match is over.
pub fn conclude(state: &mut GameState) -> bool {
    if state.is_over() {
        return true;
    }
    if state.phase != Phase::Play {
        return false;
    }
    let Some(result) = check_victory(state) else {
        return false;
    };

    if let Some(pending) = state.pending_action.take() {
        state.discard_pile.extend(pending.revealed_cards);
    }
    info!(winner = ?result.winner, survivors = result.survivors.len(), "match over");
    state.phase = Phase::GameOver(result.clone());
    state.emit(GameEvent::GameOver { result });
    true
}

/// End the turn, or enter the discard stage if the hand exceeds health.
pub(crate) fn pass_turn(state: &mut GameState, actor: PlayerId) -> Result<()> {
    if state.turn_stage == TurnStage::Discard && actor == state.current {
        return Err(Rejection::TooManyCards.into());
    }
    require_own_turn(state, actor)?;
    let p = &state.players[actor];
    if !p.has_drawn {
        return Err(Rejection::NotDrawn.into());
    }

    if p.hand.len() > usize::from(p.health) {
        debug!(player = %actor, hand = p.hand.len(), health = p.health, "discard stage");
        state.turn_stage = TurnStage::Discard;
        state.emit(GameEvent::DiscardStageStarted { player: actor });
        return Ok(());
    }
    end_turn(state)
}

/// Discard down to the hand limit. The turn ends once the hand fits.
pub(crate) fn discard_cards(
    state: &mut GameState,
    actor: PlayerId,
    cards: &[CardId],
) -> Result<()> {
    if state.phase != Phase::Play || state.turn_stage != TurnStage::Discard {
        return Err(Rejection::WrongStage.into());
    }
    if actor != state.current {
        return Err(Rejection::NotYourTurn(actor).into());
    }
    let p = &state.players[actor];
    let excess = p.hand.len().saturating_sub(usize::from(p.health));
    if cards.is_empty() || cards.len() > excess {
        return Err(Rejection::InvalidSelection.into());
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(Rejection::InvalidSelection.into());
        }
        if !p.has_in_hand(*card) {
            return Err(Rejection::CardNotOwned(*card).into());
        }
    }

    for &card in cards {
        zones::discard_from_hand(state, actor, card);
    }
    if cards.len() == excess {
        end_turn(state)?;
    }
    Ok(())
}

fn reset_turn(state: &mut GameState, player: PlayerId) {
    state.current = player;
    state.turn_number += 1;
    state.action_sequence = 0;
    state.turn_stage = TurnStage::Main;
    state.pending_action = None;
    state.character_abilities_used.clear();
    let p = &mut state.players[player];
    p.bangs_played_this_turn = 0;
    p.has_drawn = false;

    debug!(%player, turn = state.turn_number, "turn started");
    state.emit(GameEvent::TurnStarted {
        player,
        turn: state.turn_number,
    });
}

fn next_player(state: &GameState, after: PlayerId) -> Result<PlayerId> {
    state
        .next_alive_after(after)
        .ok_or_else(|| EngineError::IllegalState(format!("no living player after {after}")))
}

fn find_in_play(state: &GameState, player: PlayerId, card_type: CardType) -> Result<CardId> {
    state.players[player]
        .in_play
        .iter()
        .copied()
        .find(|&id| state.card_type(id) == Some(card_type))
        .ok_or_else(|| {
            EngineError::IllegalState(format!("{player} flagged with {card_type:?} but holds none"))
        })
}

/// Explode on a spade from 2 to 9, else pass the Dynamite on.
fn resolve_dynamite(state: &mut GameState, player: PlayerId) -> Result<()> {
    let dynamite = find_in_play(state, player, CardType::Dynamite)?;
    let (_, spared) =
        zones::draw_check(state, player, CheckKind::Dynamite, zones::dynamite_spared)?;
    let registry = state.card_map.clone();

    state.players[player].take_from_play(dynamite);
    state.players[player].refresh_equipment(&registry);
    if !spared {
        info!(%player, "dynamite exploded");
        zones::discard(state, dynamite);
        return apply_damage(state, player, DYNAMITE_DAMAGE, None);
    }

    let next = next_player(state, player)?;
    state.players[next].in_play.push(dynamite);
    state.players[next].refresh_equipment(&registry);
    debug!(from = %player, to = %next, "dynamite passed");
    state.emit(GameEvent::DynamitePassed {
        from: player,
        to: next,
    });
    Ok(())
}

/// Returns `true` if the player escapes. The Jail is discarded either way.
fn resolve_jail(state: &mut GameState, player: PlayerId) -> Result<bool> {
    let jail = find_in_play(state, player, CardType::Jail)?;
    let (_, escaped) = zones::draw_check(state, player, CheckKind::Jail, zones::is_hearts)?;

    state.players[player].take_from_play(jail);
    let registry = state.card_map.clone();
    state.players[player].refresh_equipment(&registry);
    zones::discard(state, jail);
    Ok(escaped)
}
