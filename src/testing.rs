//! Helpers shared by the unit tests.

use crate::cards::{Card, CardId, CardType};
use crate::core::{GameState, PlayerId};

/// Put a card of `card_type` into `player`'s hand, keeping all 80 cards
/// accounted for. The card comes from the deck if possible, else from the
/// discard pile or another player's hand (who gets the deck top instead).
/// Falls back to a matching card the player already holds.
pub(crate) fn give(state: &mut GameState, player: PlayerId, card_type: CardType) -> CardId {
    let candidates = state.card_map.find_by_type(card_type);
    let held = |state: &GameState, card: CardId| {
        state
            .players
            .values()
            .any(|p| p.in_play.contains(&card))
            || state.players[player].hand.contains(&card)
    };
    let card = candidates
        .iter()
        .copied()
        .find(|c| state.deck.contains(c))
        .or_else(|| candidates.iter().copied().find(|&c| !held(state, c)));
    let Some(card) = card else {
        // the only free copy is already in the player's hand
        return candidates
            .into_iter()
            .find(|c| state.players[player].hand.contains(c))
            .expect("no free card of that type");
    };

    if let Some(index) = state.deck.index_of(&card) {
        state.deck.remove(index);
    } else if let Some(index) = state.discard_pile.index_of(&card) {
        state.discard_pile.remove(index);
    } else {
        let owner = state
            .players
            .iter()
            .find(|(_, p)| p.hand.contains(&card))
            .map(|(id, _)| id)
            .expect("card is somewhere");
        state.players[owner].take_from_hand(card);
        let replacement = state.deck.pop_front().expect("deck not empty");
        state.players[owner].hand.push(replacement);
    }
    state.players[player].hand.push(card);
    card
}

/// Move a card matching `wanted` to the top of the deck, from wherever it
/// is outside play areas.
pub(crate) fn stack_top(state: &mut GameState, wanted: impl Fn(&Card) -> bool) -> CardId {
    let in_play = |state: &GameState, card: CardId| {
        state.players.values().any(|p| p.in_play.contains(&card))
    };
    let card = state
        .card_map
        .ids()
        .into_iter()
        .find(|&c| !in_play(state, c) && state.card(c).is_ok_and(|card| wanted(card)))
        .expect("no matching card outside play");

    if let Some(index) = state.deck.index_of(&card) {
        state.deck.remove(index);
    } else if let Some(index) = state.discard_pile.index_of(&card) {
        state.discard_pile.remove(index);
    } else {
        let owner = state
            .players
            .iter()
            .find(|(_, p)| p.hand.contains(&card))
            .map(|(id, _)| id)
            .expect("card is somewhere");
        state.players[owner].take_from_hand(card);
        let replacement = state.deck.pop_front().expect("deck not empty");
        state.players[owner].hand.push(replacement);
    }
    state.deck.push_back(card);
    card
}
