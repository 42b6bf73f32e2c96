//! Shared helpers for the integration tests.

#![allow(dead_code)]

use bang_rules::{Card, CardId, CardType, Character, GameState, MatchConfig, PlayerId};

/// Install a subscriber once so `RUST_LOG=debug` shows engine logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// A match already in play, every seat playing `character`.
pub fn table(players: usize, seed: u64, character: Character) -> GameState {
    init_tracing();
    let mut state = MatchConfig::new()
        .player_count(players)
        .seed(seed)
        .auto_select_characters(true)
        .build()
        .unwrap();
    for (_, seat) in state.players.iter_mut() {
        seat.character = character;
    }
    state
}

fn pull(state: &mut GameState, card: CardId) {
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
            .unwrap();
        state.players[owner].take_from_hand(card);
        let replacement = state.deck.pop_front().unwrap();
        state.players[owner].hand.push(replacement);
    }
}

fn in_play_anywhere(state: &GameState, card: CardId) -> bool {
    state.players.values().any(|p| p.in_play.contains(&card))
}

/// Put a card of `card_type` into `player`'s hand without breaking card
/// conservation.
pub fn give(state: &mut GameState, player: PlayerId, card_type: CardType) -> CardId {
    let candidates = state.card_map.find_by_type(card_type);
    let card = candidates
        .iter()
        .copied()
        .find(|c| state.deck.contains(c))
        .or_else(|| {
            candidates.iter().copied().find(|&c| {
                !in_play_anywhere(state, c) && !state.players[player].hand.contains(&c)
            })
        })
        .unwrap();
    pull(state, card);
    state.players[player].hand.push(card);
    card
}

/// Put a card of `card_type` straight into `player`'s play area.
pub fn equip(state: &mut GameState, player: PlayerId, card_type: CardType) -> CardId {
    let card = give(state, player, card_type);
    state.players[player].take_from_hand(card);
    state.players[player].in_play.push(card);
    let registry = state.card_map.clone();
    state.players[player].refresh_equipment(&registry);
    card
}

/// Move the first card matching `wanted` outside play areas to the top of
/// the deck.
pub fn stack_top(state: &mut GameState, wanted: impl Fn(&Card) -> bool) -> CardId {
    let card = state
        .card_map
        .ids()
        .into_iter()
        .find(|&c| !in_play_anywhere(state, c) && wanted(state.card(c).unwrap()))
        .unwrap();
    pull(state, card);
    state.deck.push_back(card);
    card
}
