//! Deck service: drawing, reshuffling, discarding and draw! checks.

use tracing::debug;

use crate::cards::{Card, CardId, Rank, Suit};
use crate::core::{EngineError, GameState, PlayerId, Result};
use crate::triggers::{CheckKind, GameEvent};

/// Shuffle the discard pile back into the deck.
pub fn reshuffle(state: &mut GameState) {
    let mut cards: Vec<CardId> = std::mem::take(&mut state.discard_pile).into_iter().collect();
    state.rng.shuffle(&mut cards);
    let count = cards.len();
    state.deck.extend(cards);
    debug!(cards = count, "discard pile reshuffled into deck");
    state.emit(GameEvent::DeckReshuffled { cards: count });
}

/// Take the top card of the deck, reshuffling the discard pile first if the
/// deck is empty.
pub fn draw_card(state: &mut GameState) -> Result<CardId> {
    if state.deck.is_empty() {
        reshuffle(state);
    }
    state.deck.pop_back().ok_or(EngineError::EmptyResource)
}

/// Draw `count` cards into a player's hand.
pub fn draw_cards(state: &mut GameState, player: PlayerId, count: usize) -> Result<Vec<CardId>> {
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let card = draw_card(state)?;
        state.players[player].hand.push(card);
        drawn.push(card);
    }
    if count > 0 {
        state.emit(GameEvent::CardsDrawn { player, count });
    }
    Ok(drawn)
}

/// Put a card on top of the discard pile.
pub fn discard(state: &mut GameState, card: CardId) {
    state.discard_pile.push_back(card);
}

/// Discard a card from a player's hand.
pub fn discard_from_hand(state: &mut GameState, player: PlayerId, card: CardId) -> bool {
    if !state.players[player].take_from_hand(card) {
        return false;
    }
    discard(state, card);
    state.emit(GameEvent::CardDiscarded { player, card });
    true
}

/// Top `n` cards of the deck, top first, without drawing them.
#[must_use]
pub fn peek(state: &GameState, n: usize) -> Vec<CardId> {
    state.deck.iter().rev().take(n).copied().collect()
}

/// Resolve a draw! for `player`: reveal the top card and discard it.
///
/// Lucky Duke reveals two and keeps the first favourable one. Returns the
/// card that applies and whether it was favourable.
pub fn draw_check(
    state: &mut GameState,
    player: PlayerId,
    check: CheckKind,
    favourable: fn(&Card) -> bool,
) -> Result<(CardId, bool)> {
    let first = draw_card(state)?;
    let mut flipped = vec![first];
    if crate::characters::flips_two_on_draw_check(state, player) {
        // a lone card still resolves the check
        if let Ok(second) = draw_card(state) {
            flipped.push(second);
        }
        state.note_ability_use(player);
    }

    let chosen = flipped
        .iter()
        .copied()
        .find(|&id| state.card(id).is_ok_and(favourable))
        .unwrap_or(first);
    let success = state.card(chosen).is_ok_and(favourable);

    for card in flipped {
        discard(state, card);
    }
    debug!(%player, ?check, card = %chosen, success, "draw! check");
    state.emit(GameEvent::DrawCheck {
        player,
        check,
        card: chosen,
        success,
    });
    Ok((chosen, success))
}

/// Barrel and Jail succeed on hearts.
#[must_use]
pub fn is_hearts(card: &Card) -> bool {
    card.suit == Suit::Hearts
}

/// Dynamite explodes on a spade from 2 to 9.
#[must_use]
pub fn is_dynamite_explosion(card: &Card) -> bool {
    card.suit == Suit::Spades && (Rank::Two..=Rank::Nine).contains(&card.rank)
}

/// Favourable outcome of a Dynamite check: no explosion.
#[must_use]
pub fn dynamite_spared(card: &Card) -> bool {
    !is_dynamite_explosion(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;
    use crate::core::MatchConfig;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(CardId::new(1), CardType::Bang, suit, rank)
    }

    #[test]
    fn test_explosion_predicate() {
        assert!(is_dynamite_explosion(&card(Suit::Spades, Rank::Seven)));
        assert!(is_dynamite_explosion(&card(Suit::Spades, Rank::Two)));
        assert!(is_dynamite_explosion(&card(Suit::Spades, Rank::Nine)));
        assert!(!is_dynamite_explosion(&card(Suit::Spades, Rank::Ten)));
        assert!(!is_dynamite_explosion(&card(Suit::Hearts, Rank::Seven)));
    }

    #[test]
    fn test_draw_reshuffles_when_empty() {
        let mut state = MatchConfig::new().seed(2).build().unwrap();
        let deck: Vec<CardId> = state.deck.iter().copied().collect();
        state.deck.clear();
        state.discard_pile.extend(deck);
        let before = state.total_cards();

        let drawn = draw_cards(&mut state, PlayerId::new(0), 2).unwrap();
        assert_eq!(drawn.len(), 2);
        assert!(state.discard_pile.is_empty());
        assert_eq!(state.total_cards(), before);
    }

    #[test]
    fn test_empty_supply_is_an_error() {
        let mut state = MatchConfig::new().seed(2).build().unwrap();
        state.deck.clear();
        assert_eq!(draw_card(&mut state), Err(EngineError::EmptyResource));
    }

    #[test]
    fn test_draw_check_discards_revealed_card() {
        let mut state = MatchConfig::new().seed(4).build().unwrap();
        state.players[PlayerId::new(1)].character = crate::characters::Character::BartCassidy;
        let top = *state.deck.back().unwrap();
        let (seen, _) =
            draw_check(&mut state, PlayerId::new(1), CheckKind::Jail, is_hearts).unwrap();

        assert_eq!(seen, top);
        assert_eq!(state.discard_pile.back(), Some(&top));
    }

    #[test]
    fn test_peek_is_top_first() {
        let state = MatchConfig::new().seed(4).build().unwrap();
        let top = peek(&state, 3);
        assert_eq!(top[0], *state.deck.back().unwrap());
        assert_eq!(top.len(), 3);
    }
}
