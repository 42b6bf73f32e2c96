//! Pending actions: who may answer, and how.

mod common;

use bang_rules::{
    apply, CardType, Character, DrawChoice, EngineError, GameState, Move, PendingKind, PlayerId,
    Rejection, ResponseStage, Stage, Suit, DECK_SIZE,
};
use common::{equip, give, p, stack_top, table};

fn drawn_table(players: usize, seed: u64) -> GameState {
    let mut state = table(players, seed, Character::BartCassidy);
    apply(
        &mut state,
        p(0),
        Move::StandardDraw {
            choice: DrawChoice::Default,
        },
    )
    .unwrap();
    state
}

fn bang(state: &mut GameState, from: PlayerId, to: PlayerId) {
    let card = give(state, from, CardType::Bang);
    apply(state, from, Move::PlayBang { card, target: to }).unwrap();
}

/// Only the target may move while a Bang! is pending.
#[test]
fn test_pending_action_exclusivity() {
    let mut state = drawn_table(4, 10);
    bang(&mut state, p(0), p(1));
    assert_eq!(state.stage(), Stage::Respond(ResponseStage::RespondToBang));
    assert_eq!(state.expected_actor(), Some(p(1)));

    assert_eq!(
        apply(&mut state, p(0), Move::PassTurn),
        Err(Rejection::PendingActionUnresolved.into())
    );
    assert_eq!(
        apply(&mut state, p(2), Move::TakeDamage { amount: 1 }),
        Err(Rejection::NotYourTurn(p(2)).into())
    );
    let stagecoach = give(&mut state, p(0), CardType::Stagecoach);
    assert_eq!(
        apply(&mut state, p(0), Move::PlayStagecoach { card: stagecoach }),
        Err(Rejection::PendingActionUnresolved.into())
    );
}

/// A rejected move leaves every part of the state as it was.
#[test]
fn test_rejection_is_transactional() {
    let mut state = drawn_table(4, 11);
    let missed = give(&mut state, p(1), CardType::Missed);
    let wrong = give(&mut state, p(1), CardType::Beer);
    bang(&mut state, p(0), p(1));

    let players = state.players.clone();
    let deck = state.deck.clone();
    let history = state.history.len();
    let pending = state.pending_action.clone();

    assert!(apply(&mut state, p(1), Move::PlayMissed { card: wrong }).is_err());
    assert!(apply(&mut state, p(1), Move::TakeDamage { amount: 3 }).is_err());

    assert_eq!(state.players, players);
    assert_eq!(state.deck, deck);
    assert_eq!(state.history.len(), history);
    assert_eq!(state.pending_action, pending);

    apply(&mut state, p(1), Move::PlayMissed { card: missed }).unwrap();
    assert!(state.pending_action.is_none());
}

/// Slab the Killer needs two Missed!, but a Barrel heart cancels outright.
#[test]
fn test_barrel_beats_slab_the_killer() {
    let mut state = drawn_table(4, 12);
    state.players[p(0)].character = Character::SlabTheKiller;
    equip(&mut state, p(1), CardType::Barrel);
    bang(&mut state, p(0), p(1));
    assert_eq!(state.pending_action.as_ref().unwrap().requires_missed, 2);

    stack_top(&mut state, |c| c.suit == Suit::Hearts);
    apply(&mut state, p(1), Move::UseBarrel).unwrap();
    assert!(state.pending_action.is_none());
}

/// A failed Barrel still leaves Missed! and damage open, but not a second
/// Barrel.
#[test]
fn test_failed_barrel() {
    let mut state = drawn_table(4, 13);
    equip(&mut state, p(1), CardType::Barrel);
    bang(&mut state, p(0), p(1));

    stack_top(&mut state, |c| c.suit == Suit::Spades);
    apply(&mut state, p(1), Move::UseBarrel).unwrap();
    assert!(state.pending_action.is_some());
    assert_eq!(
        apply(&mut state, p(1), Move::UseBarrel),
        Err(Rejection::BarrelAlreadyUsed.into())
    );
    apply(&mut state, p(1), Move::TakeDamage { amount: 1 }).unwrap();
    assert!(state.pending_action.is_none());
}

/// Calamity Janet answers a Bang! with a Bang!.
#[test]
fn test_calamity_janet_dodges_with_bang() {
    let mut state = drawn_table(4, 14);
    state.players[p(1)].character = Character::CalamityJanet;
    let answer = give(&mut state, p(1), CardType::Bang);
    bang(&mut state, p(0), p(1));

    apply(&mut state, p(1), Move::PlayMissed { card: answer }).unwrap();
    assert!(state.pending_action.is_none());
}

/// Gatling hits everyone else in turn; each answers for themselves.
#[test]
fn test_gatling_round() {
    let mut state = drawn_table(5, 15);
    let gatling = give(&mut state, p(0), CardType::Gatling);
    let missed = give(&mut state, p(2), CardType::Missed);
    apply(&mut state, p(0), Move::PlayGatling { card: gatling }).unwrap();
    let health: Vec<u8> = (0..5).map(|i| state.players[p(i)].health).collect();

    apply(&mut state, p(1), Move::TakeDamage { amount: 1 }).unwrap();
    apply(&mut state, p(2), Move::PlayMissed { card: missed }).unwrap();
    apply(&mut state, p(3), Move::TakeDamage { amount: 1 }).unwrap();
    assert_eq!(state.pending_action.as_ref().unwrap().target, p(4));
    apply(&mut state, p(4), Move::TakeDamage { amount: 1 }).unwrap();

    assert!(state.pending_action.is_none());
    assert_eq!(state.players[p(1)].health, health[1] - 1);
    assert_eq!(state.players[p(2)].health, health[2]);
    assert_eq!(state.players[p(0)].health, health[0]);
    assert_eq!(state.total_cards(), DECK_SIZE);
}

/// Indians: discard a Bang! or lose a life point.
#[test]
fn test_indians_round() {
    let mut state = drawn_table(4, 16);
    let indians = give(&mut state, p(0), CardType::Indians);
    let answer = give(&mut state, p(1), CardType::Bang);
    apply(&mut state, p(0), Move::PlayIndians { card: indians }).unwrap();
    assert_eq!(state.pending_action.as_ref().unwrap().kind, PendingKind::Indians);

    let missed = give(&mut state, p(1), CardType::Missed);
    assert_eq!(
        apply(&mut state, p(1), Move::RespondToIndians { card: Some(missed) }),
        Err(Rejection::WrongCardType {
            found: CardType::Missed
        }
        .into())
    );
    apply(&mut state, p(1), Move::RespondToIndians { card: Some(answer) }).unwrap();
    let health = state.players[p(2)].health;
    apply(&mut state, p(2), Move::RespondToIndians { card: None }).unwrap();
    assert_eq!(state.players[p(2)].health, health - 1);
    apply(&mut state, p(3), Move::RespondToIndians { card: None }).unwrap();
    assert!(state.pending_action.is_none());
}

/// Duelists alternate Bang!s until one passes.
#[test]
fn test_duel_exchange() {
    let mut state = drawn_table(4, 17);
    let duel = give(&mut state, p(0), CardType::Duel);
    let first = give(&mut state, p(2), CardType::Bang);
    let second = give(&mut state, p(0), CardType::Bang);
    apply(
        &mut state,
        p(0),
        Move::PlayDuel {
            card: duel,
            target: p(2),
        },
    )
    .unwrap();

    apply(&mut state, p(2), Move::RespondToDuel { card: Some(first) }).unwrap();
    assert_eq!(state.expected_actor(), Some(p(0)));
    apply(&mut state, p(0), Move::RespondToDuel { card: Some(second) }).unwrap();
    assert_eq!(state.expected_actor(), Some(p(2)));

    let health = state.players[p(2)].health;
    apply(&mut state, p(2), Move::RespondToDuel { card: None }).unwrap();
    assert_eq!(state.players[p(2)].health, health - 1);
    assert!(state.pending_action.is_none());
    assert_eq!(state.expected_actor(), Some(p(0)));
    // the duel's Bang!s do not count against the budget
    assert_eq!(state.players[p(0)].bangs_played_this_turn, 0);
}

/// Responses are only accepted in their own stage.
#[test]
fn test_wrong_response_stage() {
    let mut state = drawn_table(4, 18);
    assert_eq!(
        apply(&mut state, p(0), Move::RespondToDuel { card: None }),
        Err(EngineError::InvalidMove(Rejection::NoPendingAction))
    );
    bang(&mut state, p(0), p(1));
    assert_eq!(
        apply(&mut state, p(1), Move::RespondToIndians { card: None }),
        Err(Rejection::WrongStage.into())
    );
}
