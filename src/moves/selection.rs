//! Character selection, seat by seat.

use std::cmp::Ordering;

use tracing::debug;

use crate::characters::Character;
use crate::core::{max_health_for, GameState, Phase, PlayerId, Rejection, Result};
use crate::triggers::GameEvent;
use crate::turn;
use crate::zones;

pub(super) fn select_character(
    state: &mut GameState,
    actor: PlayerId,
    character: Character,
) -> Result<()> {
    match state.phase {
        Phase::CharacterSelection => {}
        Phase::Play => return Err(Rejection::WrongPhase("play").into()),
        Phase::GameOver(_) => return Err(Rejection::WrongPhase("game over").into()),
    }
    let p = state.player(actor)?;
    if p.has_selected_character {
        return Err(Rejection::AlreadySelected.into());
    }
    if state.expected_actor() != Some(actor) {
        return Err(Rejection::NotYourTurn(actor).into());
    }
    if !p.character_choices.contains(&character) {
        return Err(Rejection::NotAChoice(character.name().to_string()).into());
    }

    let health = max_health_for(character, p.role);
    {
        let p = &mut state.players[actor];
        p.character = character;
        p.max_health = health;
        p.health = health;
    }

    // the hand was dealt for the first offered character
    let held = state.players[actor].hand.len();
    let wanted = usize::from(health);
    match held.cmp(&wanted) {
        Ordering::Less => {
            zones::draw_cards(state, actor, wanted - held)?;
        }
        Ordering::Greater => {
            for _ in wanted..held {
                if let Some(card) = state.players[actor].hand.last().copied() {
                    zones::discard_from_hand(state, actor, card);
                }
            }
        }
        Ordering::Equal => {}
    }

    state.players[actor].has_selected_character = true;
    debug!(player = %actor, %character, "character selected");
    state.emit(GameEvent::CharacterSelected {
        player: actor,
        character,
    });

    if state.players.values().all(|p| p.has_selected_character) {
        turn::start_play(state)?;
    }
    Ok(())
}
