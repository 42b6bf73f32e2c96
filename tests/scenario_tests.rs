//! End-to-end scenarios driven through `apply`.

mod common;

use bang_rules::core::Phase;
use bang_rules::{
    apply, check_victory, CardType, Character, DrawChoice, EngineError, GameEvent, GameState,
    Move, PendingKind, PlayerId, Rank, Role, Suit, Winner, DECK_SIZE,
};
use common::{equip, give, p, stack_top, table};

fn draw(state: &mut GameState, player: PlayerId) {
    apply(
        state,
        player,
        Move::StandardDraw {
            choice: DrawChoice::Default,
        },
    )
    .unwrap();
}

/// Pass, discarding down to health first if needed.
fn finish_turn(state: &mut GameState, player: PlayerId) {
    apply(state, player, Move::PassTurn).unwrap();
    while state.current == player
        && state.players[player].hand.len() > usize::from(state.players[player].health)
    {
        let card = state.players[player].hand[0];
        apply(state, player, Move::DiscardCards { cards: vec![card] }).unwrap();
    }
}

fn full_health(state: &mut GameState, player: PlayerId, health: u8) {
    state.players[player].max_health = health;
    state.players[player].health = health;
}

/// Sheriff shoots the adjacent seat, which takes the hit.
#[test]
fn test_bang_then_take_damage() {
    let mut state = table(4, 1, Character::BartCassidy);
    assert_eq!(state.sheriff, p(0));
    full_health(&mut state, p(1), 4);

    draw(&mut state, p(0));
    let bang = give(&mut state, p(0), CardType::Bang);
    apply(
        &mut state,
        p(0),
        Move::PlayBang {
            card: bang,
            target: p(1),
        },
    )
    .unwrap();

    let pending = state.pending_action.as_ref().unwrap();
    assert_eq!(pending.kind, PendingKind::Bang);
    assert_eq!(pending.target, p(1));

    apply(&mut state, p(1), Move::TakeDamage { amount: 1 }).unwrap();
    assert_eq!(state.players[p(1)].health, 3);
    assert!(state.pending_action.is_none());
    assert_eq!(state.current, p(0));
    state.validate().unwrap();
}

/// Willy the Kid has no Bang! budget.
#[test]
fn test_willy_the_kid_plays_two_bangs() {
    let mut state = table(4, 2, Character::BartCassidy);
    state.players[p(0)].character = Character::WillyTheKid;
    full_health(&mut state, p(1), 4);

    draw(&mut state, p(0));
    for _ in 0..2 {
        let bang = give(&mut state, p(0), CardType::Bang);
        apply(
            &mut state,
            p(0),
            Move::PlayBang {
                card: bang,
                target: p(1),
            },
        )
        .unwrap();
        apply(&mut state, p(1), Move::TakeDamage { amount: 1 }).unwrap();
    }
    assert_eq!(state.players[p(0)].bangs_played_this_turn, 2);
    assert_eq!(state.players[p(1)].health, 2);
}

/// Without Willy the second Bang! is refused and nothing changes.
#[test]
fn test_second_bang_refused() {
    let mut state = table(4, 2, Character::BartCassidy);
    draw(&mut state, p(0));
    let first = give(&mut state, p(0), CardType::Bang);
    let second = give(&mut state, p(0), CardType::Bang);
    apply(
        &mut state,
        p(0),
        Move::PlayBang {
            card: first,
            target: p(1),
        },
    )
    .unwrap();
    apply(&mut state, p(1), Move::TakeDamage { amount: 1 }).unwrap();

    let hand = state.players[p(0)].hand.clone();
    let err = apply(
        &mut state,
        p(0),
        Move::PlayBang {
            card: second,
            target: p(1),
        },
    )
    .unwrap_err();
    assert_eq!(err, bang_rules::Rejection::BangLimitReached.into());
    assert_eq!(state.players[p(0)].hand, hand);
    assert_eq!(state.players[p(0)].bangs_played_this_turn, 1);
}

/// Four living players: four cards revealed, one each, in turn order.
#[test]
fn test_general_store_with_four_players() {
    let mut state = table(4, 3, Character::BartCassidy);
    draw(&mut state, p(0));
    let store = give(&mut state, p(0), CardType::GeneralStore);
    apply(&mut state, p(0), Move::PlayGeneralStore { card: store }).unwrap();

    let revealed = state.pending_action.as_ref().unwrap().revealed_cards.clone();
    assert_eq!(revealed.len(), 4);
    let before: Vec<usize> = (0..4).map(|i| state.players[p(i)].hand.len()).collect();

    for i in 0..4 {
        let pending = state.pending_action.as_ref().unwrap();
        assert_eq!(pending.target, p(i));
        let card = pending.revealed_cards[0];
        apply(&mut state, p(i), Move::RespondToGeneralStore { card }).unwrap();
    }

    assert!(state.pending_action.is_none());
    for i in 0..4 {
        assert_eq!(state.players[p(i)].hand.len(), before[i as usize] + 1);
    }
    assert_eq!(state.total_cards(), DECK_SIZE);
}

/// A spade in the explosion range kills a player on one life point.
#[test]
fn test_dynamite_kills_at_one_health() {
    let mut state = table(4, 4, Character::BartCassidy);
    let dynamite = equip(&mut state, p(1), CardType::Dynamite);
    state.players[p(1)].health = 1;

    draw(&mut state, p(0));
    // revealed as p1's turn begins
    let top = stack_top(&mut state, |c| c.suit == Suit::Spades && c.rank == Rank::Eight);
    finish_turn(&mut state, p(0));

    let victim = &state.players[p(1)];
    assert!(victim.is_dead);
    assert_eq!(victim.health, 0);
    assert_eq!(victim.card_count(), 0);
    assert!(state.discard_pile.contains(&dynamite));
    assert!(state.discard_pile.contains(&top));
    assert_eq!(state.current, p(2));
    assert_eq!(state.total_cards(), DECK_SIZE);
}

/// The Sheriff loses a Duel on his last life point; the Outlaws win.
#[test]
fn test_sheriff_death_outlaws_win() {
    let mut state = table(4, 5, Character::BartCassidy);
    let outlaw = state
        .players
        .iter()
        .find(|(_, seat)| seat.role == Role::Outlaw)
        .map(|(id, _)| id)
        .unwrap();
    state.players[p(0)].health = 1;

    draw(&mut state, p(0));
    let duel = give(&mut state, p(0), CardType::Duel);
    let bang = give(&mut state, outlaw, CardType::Bang);
    apply(
        &mut state,
        p(0),
        Move::PlayDuel {
            card: duel,
            target: outlaw,
        },
    )
    .unwrap();
    apply(&mut state, outlaw, Move::RespondToDuel { card: Some(bang) }).unwrap();
    let events = apply(&mut state, p(0), Move::RespondToDuel { card: None }).unwrap();

    let result = check_victory(&state).unwrap();
    assert_eq!(result.winner, Winner::Outlaws);
    assert_eq!(result.survivors.len(), 3);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { result } if result.winner == Winner::Outlaws)));
    assert!(matches!(state.phase, Phase::GameOver(_)));
    assert_eq!(
        apply(&mut state, outlaw, Move::PassTurn),
        Err(EngineError::GameOver)
    );
}
