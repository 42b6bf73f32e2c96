//! Blue cards: equipment on oneself, Jail on someone else.

use tracing::debug;

use crate::cards::{CardId, CardType};
use crate::core::{GameState, PlayerId, Rejection, Result};
use crate::rules::validation::{can_equip, can_play_card};
use crate::triggers::GameEvent;
use crate::zones;

use super::require_own_turn;

/// Put a card from hand into play. A new weapon replaces the old one.
pub(super) fn equip_card(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    require_own_turn(state, actor)?;
    can_equip(state, actor, card)?;
    let card_type = state.card(card)?.card_type;

    state.players[actor].take_from_hand(card);
    if card_type.is_weapon() {
        if let Some(old) = state.players[actor].weapon {
            state.players[actor].take_from_play(old);
            zones::discard(state, old);
            state.emit(GameEvent::CardDiscarded {
                player: actor,
                card: old,
            });
        }
    }
    state.players[actor].in_play.push(card);
    let registry = state.card_map.clone();
    state.players[actor].refresh_equipment(&registry);

    debug!(player = %actor, %card, ?card_type, "equipped");
    state.emit(GameEvent::Equipped {
        player: actor,
        card,
    });
    Ok(())
}

pub(super) fn play_dynamite(state: &mut GameState, actor: PlayerId, card: CardId) -> Result<()> {
    let found = state.card(card)?.card_type;
    if found != CardType::Dynamite {
        return Err(Rejection::WrongCardType { found }.into());
    }
    equip_card(state, actor, card)
}

/// Jail another player; the sheriff cannot be jailed.
pub(super) fn play_jail(
    state: &mut GameState,
    actor: PlayerId,
    card: CardId,
    target: PlayerId,
) -> Result<()> {
    require_own_turn(state, actor)?;
    can_play_card(state, actor, card, CardType::Jail, Some(target))?;

    state.players[actor].take_from_hand(card);
    state.players[target].in_play.push(card);
    let registry = state.card_map.clone();
    state.players[target].refresh_equipment(&registry);

    debug!(player = %actor, %target, "jailed");
    state.emit(GameEvent::CardPlayed {
        player: actor,
        card,
        target: Some(target),
    });
    state.emit(GameEvent::Equipped {
        player: target,
        card,
    });
    Ok(())
}
