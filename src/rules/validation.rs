//! Pure validation predicates.
//!
//! Nothing here mutates state. The move handlers call these before touching
//! anything; the playability queries reuse them for UI affordances.

use crate::cards::{CardId, CardType};
use crate::characters;
use crate::core::{GameState, PlayerId, Rejection};

use super::distance;

type Check = std::result::Result<(), Rejection>;

#[must_use]
pub fn has_card(state: &GameState, player: PlayerId, card: CardId) -> bool {
    state
        .players
        .get(player)
        .is_some_and(|p| p.has_in_hand(card))
}

/// Whether `target` is a legal target for `player`'s card of `card_type`.
#[must_use]
pub fn is_valid_target(
    state: &GameState,
    player: PlayerId,
    target: PlayerId,
    card_type: CardType,
) -> bool {
    let Some(t) = state.players.get(target) else {
        return false;
    };
    if t.is_dead {
        return false;
    }
    if player == target && card_type != CardType::Beer {
        return false;
    }
    match card_type {
        CardType::Bang => distance::is_in_range(state, player, target),
        CardType::Panic => distance::distance(state, player, target) == 1 && t.card_count() > 0,
        CardType::CatBalou => t.card_count() > 0,
        CardType::Jail => target != state.sheriff && !t.in_jail,
        _ => true,
    }
}

/// Whether the Bang! budget allows another Bang! this turn.
#[must_use]
pub fn can_play_bang(state: &GameState, player: PlayerId) -> bool {
    characters::has_unlimited_bangs(state, player)
        || state.players[player].bangs_played_this_turn == 0
}

/// Type a card is played as. Calamity Janet plays Missed! as Bang! and the
/// other way round.
#[must_use]
pub fn effective_type(
    state: &GameState,
    player: PlayerId,
    card_type: CardType,
    wanted: CardType,
) -> Option<CardType> {
    if card_type == wanted {
        return Some(wanted);
    }
    let swappable = matches!(
        (card_type, wanted),
        (CardType::Bang, CardType::Missed) | (CardType::Missed, CardType::Bang)
    );
    (swappable && characters::can_swap_bang_missed(state, player)).then_some(wanted)
}

/// Check that `card` can be played by `player` as a `wanted` card, on
/// `target` if the type needs one.
pub fn can_play_card(
    state: &GameState,
    player: PlayerId,
    card: CardId,
    wanted: CardType,
    target: Option<PlayerId>,
) -> Check {
    let p = state.player(player)?;
    if !p.has_drawn {
        return Err(Rejection::NotDrawn);
    }
    if !p.has_in_hand(card) {
        return Err(Rejection::CardNotOwned(card));
    }
    let found = state.card(card)?.card_type;
    let played_as =
        effective_type(state, player, found, wanted).ok_or(Rejection::WrongCardType { found })?;

    if played_as == CardType::Bang && !can_play_bang(state, player) {
        return Err(Rejection::BangLimitReached);
    }
    if played_as.requires_target() {
        let target = target.ok_or(Rejection::MissingTarget)?;
        state.player(target)?;
        if !is_valid_target(state, player, target, played_as) {
            return Err(Rejection::IllegalTarget(target));
        }
    }
    Ok(())
}

/// Check that `card` can go into `player`'s play area.
pub fn can_equip(state: &GameState, player: PlayerId, card: CardId) -> Check {
    let p = state.player(player)?;
    if !p.has_drawn {
        return Err(Rejection::NotDrawn);
    }
    if !p.has_in_hand(card) {
        return Err(Rejection::CardNotOwned(card));
    }
    let found = state.card(card)?.card_type;
    if !found.is_equipment() || found == CardType::Jail {
        return Err(Rejection::WrongCardType { found });
    }
    if found.is_weapon() {
        return Ok(());
    }
    let duplicate = p
        .in_play
        .iter()
        .any(|&id| state.card_type(id) == Some(found));
    if duplicate {
        return Err(Rejection::AlreadyEquipped(found));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::Character;
    use crate::core::MatchConfig;
    use crate::testing::give;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn ready() -> GameState {
        let mut state = MatchConfig::new()
            .seed(8)
            .auto_select_characters(true)
            .build()
            .unwrap();
        for (_, seat) in state.players.iter_mut() {
            seat.character = Character::BartCassidy;
        }
        state.players[p(0)].has_drawn = true;
        state
    }

    #[test]
    fn test_bang_needs_draw_and_range() {
        let mut state = ready();
        let bang = give(&mut state, p(0), CardType::Bang);

        assert_eq!(can_play_card(&state, p(0), bang, CardType::Bang, Some(p(1))), Ok(()));
        assert_eq!(
            can_play_card(&state, p(0), bang, CardType::Bang, Some(p(2))),
            Err(Rejection::IllegalTarget(p(2)))
        );
        assert_eq!(
            can_play_card(&state, p(0), bang, CardType::Bang, None),
            Err(Rejection::MissingTarget)
        );
        assert_eq!(
            can_play_card(&state, p(0), bang, CardType::Bang, Some(p(0))),
            Err(Rejection::IllegalTarget(p(0)))
        );

        state.players[p(0)].has_drawn = false;
        assert_eq!(
            can_play_card(&state, p(0), bang, CardType::Bang, Some(p(1))),
            Err(Rejection::NotDrawn)
        );
    }

    #[test]
    fn test_bang_budget() {
        let mut state = ready();
        assert!(can_play_bang(&state, p(0)));
        state.players[p(0)].bangs_played_this_turn = 1;
        assert!(!can_play_bang(&state, p(0)));

        state.players[p(0)].character = Character::WillyTheKid;
        assert!(can_play_bang(&state, p(0)));

        state.players[p(0)].character = Character::BartCassidy;
        let volcanic = give(&mut state, p(0), CardType::Volcanic);
        state.players[p(0)].take_from_hand(volcanic);
        state.players[p(0)].in_play.push(volcanic);
        let registry = state.card_map.clone();
        state.players[p(0)].refresh_equipment(&registry);
        assert!(can_play_bang(&state, p(0)));
    }

    #[test]
    fn test_calamity_janet_swaps() {
        let mut state = ready();
        let missed = give(&mut state, p(0), CardType::Missed);
        assert_eq!(
            can_play_card(&state, p(0), missed, CardType::Bang, Some(p(1))),
            Err(Rejection::WrongCardType {
                found: CardType::Missed
            })
        );
        state.players[p(0)].character = Character::CalamityJanet;
        assert_eq!(can_play_card(&state, p(0), missed, CardType::Bang, Some(p(1))), Ok(()));
    }

    #[test]
    fn test_jail_targets() {
        let state = ready();
        assert!(!is_valid_target(&state, p(1), state.sheriff, CardType::Jail));
        assert!(is_valid_target(&state, p(0), p(2), CardType::Jail));
        assert!(!is_valid_target(&state, p(1), p(1), CardType::Jail));
    }

    #[test]
    fn test_panic_needs_adjacent_target_with_cards() {
        let mut state = ready();
        assert!(is_valid_target(&state, p(0), p(1), CardType::Panic));
        assert!(!is_valid_target(&state, p(0), p(2), CardType::Panic));

        let hand = std::mem::take(&mut state.players[p(1)].hand);
        state.discard_pile.extend(hand);
        assert!(!is_valid_target(&state, p(0), p(1), CardType::Panic));
        assert!(!is_valid_target(&state, p(0), p(1), CardType::CatBalou));
    }

    #[test]
    fn test_equip_rules() {
        let mut state = ready();
        let barrels = state.card_map.find_by_type(CardType::Barrel);
        let jail = give(&mut state, p(0), CardType::Jail);
        assert_eq!(
            can_equip(&state, p(0), jail),
            Err(Rejection::WrongCardType {
                found: CardType::Jail
            })
        );

        let first = give(&mut state, p(0), CardType::Barrel);
        assert_eq!(can_equip(&state, p(0), first), Ok(()));
        state.players[p(0)].take_from_hand(first);
        state.players[p(0)].in_play.push(first);

        let second = give(&mut state, p(0), CardType::Barrel);
        assert!(barrels.contains(&second));
        assert_eq!(
            can_equip(&state, p(0), second),
            Err(Rejection::AlreadyEquipped(CardType::Barrel))
        );
    }
}
