//! The draw phase and the characters that replace it.

use tracing::debug;

use crate::cards::CardId;
use crate::characters::{Ability, Character};
use crate::core::{DrawChoice, GameState, PlayerId, Rejection, Result};
use crate::triggers::{self, AbilityTrigger, DrawHint, GameEvent};
use crate::zones;

use super::require_own_turn;

/// Ordinary draw size.
const DRAW_COUNT: usize = 2;

pub(super) fn standard_draw(
    state: &mut GameState,
    actor: PlayerId,
    choice: DrawChoice,
) -> Result<()> {
    require_own_turn(state, actor)?;
    if state.players[actor].has_drawn {
        return Err(Rejection::AlreadyDrawn.into());
    }

    let hint = triggers::trigger(state, actor, AbilityTrigger::OnDrawPhase)?;
    let character = state.players[actor].character;
    match (choice, hint) {
        (DrawChoice::Default, Some(DrawHint::UseSpecialDraw))
            if character == Character::BlackJack =>
        {
            black_jack(state, actor)?;
        }
        (DrawChoice::Default, Some(DrawHint::UseSpecialDraw)) => kit_carlson(state, actor, None)?,
        (DrawChoice::Default, _) => {
            zones::draw_cards(state, actor, DRAW_COUNT)?;
        }
        (DrawChoice::FromPlayer(target), Some(DrawHint::CanDrawFromPlayer)) => {
            jesse_jones(state, actor, target)?;
        }
        (DrawChoice::FromDiscard, Some(DrawHint::CanDrawFromDiscard)) => {
            pedro_ramirez(state, actor)?;
        }
        (DrawChoice::ReturnCard(card), Some(DrawHint::UseSpecialDraw))
            if character.ability() == Ability::LookTopThree =>
        {
            kit_carlson(state, actor, Some(card))?;
        }
        _ => return Err(Rejection::AbilityUnavailable.into()),
    }

    state.players[actor].has_drawn = true;
    Ok(())
}

/// Look at the top three, keep two, put `returned` (default: the third)
/// back on top of the deck.
fn kit_carlson(state: &mut GameState, actor: PlayerId, returned: Option<CardId>) -> Result<()> {
    let mut seen = Vec::with_capacity(3);
    for _ in 0..3 {
        seen.push(zones::draw_card(state)?);
    }
    let back = returned.unwrap_or(seen[2]);
    let index = seen
        .iter()
        .position(|&c| c == back)
        .ok_or(Rejection::InvalidSelection)?;
    seen.remove(index);
    state.deck.push_back(back);

    debug!(player = %actor, kept = ?seen, "Kit Carlson draws");
    state.players[actor].hand.extend(seen);
    state.note_ability_use(actor);
    state.emit(GameEvent::CardsDrawn {
        player: actor,
        count: DRAW_COUNT,
    });
    Ok(())
}

/// The second card is shown; a heart or diamond earns a third.
fn black_jack(state: &mut GameState, actor: PlayerId) -> Result<()> {
    let drawn = zones::draw_cards(state, actor, DRAW_COUNT)?;
    let second = drawn[1];
    state.emit(GameEvent::CardRevealed {
        player: actor,
        card: second,
    });
    if state.card(second)?.suit.is_red() {
        debug!(player = %actor, card = %second, "Black Jack reveals red, draws again");
        zones::draw_cards(state, actor, 1)?;
        state.note_ability_use(actor);
    }
    Ok(())
}

/// First card at random from `target`'s hand, second from the deck.
fn jesse_jones(state: &mut GameState, actor: PlayerId, target: PlayerId) -> Result<()> {
    state.player(target)?;
    if target == actor || !state.is_alive(target) {
        return Err(Rejection::IllegalTarget(target).into());
    }

    let hand_len = state.players[target].hand.len();
    let Some(index) = state.rng.pick_index(hand_len) else {
        zones::draw_cards(state, actor, DRAW_COUNT)?;
        return Ok(());
    };
    let card = state.players[target].hand.remove(index);
    state.players[actor].hand.push(card);
    state.note_ability_use(actor);
    state.emit(GameEvent::CardTaken {
        from: target,
        to: actor,
        card,
    });
    zones::draw_cards(state, actor, 1)?;
    Ok(())
}

/// First card from the top of the discard pile, second from the deck.
fn pedro_ramirez(state: &mut GameState, actor: PlayerId) -> Result<()> {
    let Some(card) = state.discard_pile.pop_back() else {
        zones::draw_cards(state, actor, DRAW_COUNT)?;
        return Ok(());
    };
    debug!(player = %actor, %card, "Pedro Ramirez draws from the discard pile");
    state.players[actor].hand.push(card);
    state.note_ability_use(actor);
    state.emit(GameEvent::CardsDrawn {
        player: actor,
        count: 1,
    });
    zones::draw_cards(state, actor, 1)?;
    Ok(())
}
