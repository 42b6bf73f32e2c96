//! Legal move enumeration.
//!
//! Lists the moves `apply` would accept from a player right now. Discards
//! are offered one card at a time and Sid Ketchum's ability with the first
//! two cards in hand, which keeps the list short without losing any
//! reachable state.

use smallvec::SmallVec;

use crate::cards::{CardId, CardType};
use crate::characters::{self, Ability};
use crate::core::{DrawChoice, GameState, Move, PlayerId, Stage};
use crate::rules::playability::{is_card_playable, valid_targets};
use crate::rules::validation::effective_type;
use crate::stack::ResponseStage;
use crate::zones;

/// Every move `player` may send in the current stage. Empty when it is not
/// their move.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    if state.expected_actor() != Some(player) {
        return Vec::new();
    }
    let p = &state.players[player];
    let mut moves = Vec::new();

    match state.stage() {
        Stage::GameOver => return moves,
        Stage::CharacterSelection => {
            moves.extend(
                p.character_choices
                    .iter()
                    .map(|&character| Move::SelectCharacter { character }),
            );
            return moves;
        }
        Stage::Draw => draw_moves(state, player, &mut moves),
        Stage::Action => {
            for &card in &p.hand {
                if is_card_playable(state, player, card) {
                    card_moves(state, player, card, &mut moves);
                }
            }
            moves.push(Move::PassTurn);
        }
        Stage::Discard => {
            moves.extend(p.hand.iter().map(|&card| Move::DiscardCards { cards: vec![card] }));
        }
        Stage::Respond(stage) => response_moves(state, player, stage, &mut moves),
    }

    if p.character.ability() == Ability::DiscardForHealth
        && p.health < p.max_health
        && p.hand.len() >= 2
    {
        moves.push(Move::SidKetchumHeal {
            cards: [p.hand[0], p.hand[1]],
        });
    }
    moves
}

fn draw_moves(state: &GameState, player: PlayerId, moves: &mut Vec<Move>) {
    moves.push(Move::StandardDraw {
        choice: DrawChoice::Default,
    });
    match state.players[player].character.ability() {
        Ability::DrawFromPlayer => {
            for target in state.alive_after(player) {
                if !state.players[target].hand.is_empty() {
                    moves.push(Move::StandardDraw {
                        choice: DrawChoice::FromPlayer(target),
                    });
                }
            }
        }
        Ability::DrawFromDiscard if !state.discard_pile.is_empty() => {
            moves.push(Move::StandardDraw {
                choice: DrawChoice::FromDiscard,
            });
        }
        Ability::LookTopThree if state.deck.len() >= 3 => {
            moves.extend(zones::peek(state, 3).into_iter().map(|card| Move::StandardDraw {
                choice: DrawChoice::ReturnCard(card),
            }));
        }
        _ => {}
    }
}

fn card_moves(state: &GameState, player: PlayerId, card: CardId, moves: &mut Vec<Move>) {
    let Some(card_type) = state.card_type(card) else {
        return;
    };
    let targets = || valid_targets(state, player, card);
    match card_type {
        CardType::Bang | CardType::Missed => {
            moves.extend(targets().into_iter().map(|target| Move::PlayBang { card, target }));
        }
        CardType::Duel => {
            moves.extend(targets().into_iter().map(|target| Move::PlayDuel { card, target }));
        }
        CardType::Jail => {
            moves.extend(targets().into_iter().map(|target| Move::PlayJail { card, target }));
        }
        CardType::Panic | CardType::CatBalou => {
            for target in targets() {
                let mut picks: SmallVec<[Option<CardId>; 4]> = SmallVec::new();
                picks.push(None);
                picks.extend(state.players[target].in_play.iter().copied().map(Some));
                for target_card in picks {
                    moves.push(if card_type == CardType::Panic {
                        Move::PlayPanic {
                            card,
                            target,
                            target_card,
                        }
                    } else {
                        Move::PlayCatBalou {
                            card,
                            target,
                            target_card,
                        }
                    });
                }
            }
        }
        CardType::Beer => moves.push(Move::PlayBeer { card }),
        CardType::Saloon => moves.push(Move::PlaySaloon { card }),
        CardType::Stagecoach => moves.push(Move::PlayStagecoach { card }),
        CardType::WellsFargo => moves.push(Move::PlayWellsFargo { card }),
        CardType::Gatling => moves.push(Move::PlayGatling { card }),
        CardType::Indians => moves.push(Move::PlayIndians { card }),
        CardType::GeneralStore => moves.push(Move::PlayGeneralStore { card }),
        CardType::Dynamite => moves.push(Move::PlayDynamite { card }),
        _ => moves.push(Move::EquipCard { card }),
    }
}

fn response_moves(
    state: &GameState,
    player: PlayerId,
    stage: ResponseStage,
    moves: &mut Vec<Move>,
) {
    let Some(pending) = state.pending_action.as_ref() else {
        return;
    };
    let usable_as = |wanted: CardType| cards_usable_as(state, player, wanted).into_iter();

    match stage {
        ResponseStage::RespondToBang => {
            moves.extend(usable_as(CardType::Missed).map(|card| Move::PlayMissed { card }));
            let has_barrel =
                state.players[player].barrel || characters::has_virtual_barrel(state, player);
            if has_barrel && !pending.barrel_used {
                moves.push(Move::UseBarrel);
            }
            moves.push(Move::TakeDamage { amount: 1 });
        }
        ResponseStage::RespondToDuel => {
            moves.extend(
                usable_as(CardType::Bang).map(|card| Move::RespondToDuel { card: Some(card) }),
            );
            moves.push(Move::RespondToDuel { card: None });
        }
        ResponseStage::RespondToIndians => {
            moves.extend(
                usable_as(CardType::Bang).map(|card| Move::RespondToIndians { card: Some(card) }),
            );
            moves.push(Move::RespondToIndians { card: None });
        }
        ResponseStage::RespondToGeneralStore => {
            moves.extend(
                pending
                    .revealed_cards
                    .iter()
                    .map(|&card| Move::RespondToGeneralStore { card }),
            );
        }
    }
}

/// Hand cards that can stand in for a `wanted` card.
fn cards_usable_as(state: &GameState, player: PlayerId, wanted: CardType) -> Vec<CardId> {
    state.players[player]
        .hand
        .iter()
        .copied()
        .filter(|&card| {
            state
                .card_type(card)
                .and_then(|found| effective_type(state, player, found, wanted))
                .is_some()
        })
        .collect()
}
