//! UI affordance queries: can this card be played right now, and at whom.

use crate::cards::{CardId, CardType};
use crate::core::{GameState, PlayerId, Stage};
use crate::stack::ResponseStage;

use super::validation::{self, can_equip, can_play_card, effective_type};

/// Whether `player` could play `card` from hand in the current stage.
///
/// Equipment counts as playable when it could be equipped (or, for Jail,
/// placed on someone).
#[must_use]
pub fn is_card_playable(state: &GameState, player: PlayerId, card: CardId) -> bool {
    if !validation::has_card(state, player, card) || state.expected_actor() != Some(player) {
        return false;
    }
    let Some(card_type) = state.card_type(card) else {
        return false;
    };

    match state.stage() {
        Stage::Respond(stage) => {
            let wanted = match stage {
                ResponseStage::RespondToBang => CardType::Missed,
                ResponseStage::RespondToDuel | ResponseStage::RespondToIndians => CardType::Bang,
                ResponseStage::RespondToGeneralStore => return false,
            };
            effective_type(state, player, card_type, wanted).is_some()
        }
        Stage::Action => playable_on_turn(state, player, card, card_type),
        _ => false,
    }
}

fn playable_on_turn(
    state: &GameState,
    player: PlayerId,
    card: CardId,
    card_type: CardType,
) -> bool {
    let p = &state.players[player];
    match card_type {
        CardType::Bang
        | CardType::Missed
        | CardType::Panic
        | CardType::CatBalou
        | CardType::Duel
        | CardType::Jail => !valid_targets(state, player, card).is_empty(),
        CardType::Beer => p.health < p.max_health && state.alive_count() > 2,
        CardType::Saloon
        | CardType::Stagecoach
        | CardType::WellsFargo
        | CardType::Gatling
        | CardType::Indians
        | CardType::GeneralStore => true,
        _ => can_equip(state, player, card).is_ok(),
    }
}

/// Players `player` could aim `card` at. Empty for untargeted cards.
#[must_use]
pub fn valid_targets(state: &GameState, player: PlayerId, card: CardId) -> Vec<PlayerId> {
    let Some(card_type) = state.card_type(card) else {
        return Vec::new();
    };
    // a Missed! only has targets when it can be played as a Bang!
    let Some(played_as) = effective_type(state, player, card_type, CardType::Bang)
        .or_else(|| card_type.requires_target().then_some(card_type))
    else {
        return Vec::new();
    };

    state
        .alive_after(player)
        .into_iter()
        .filter(|&target| can_play_card(state, player, card, played_as, Some(target)).is_ok())
        .collect()
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

    fn setup() -> GameState {
        let mut state = MatchConfig::new()
            .seed(12)
            .auto_select_characters(true)
            .build()
            .unwrap();
        for (_, seat) in state.players.iter_mut() {
            seat.character = Character::BartCassidy;
        }
        state
    }

    #[test]
    fn test_nothing_playable_before_draw() {
        let mut state = setup();
        let stagecoach = give(&mut state, p(0), CardType::Stagecoach);
        assert!(!is_card_playable(&state, p(0), stagecoach));

        state.players[p(0)].has_drawn = true;
        assert!(is_card_playable(&state, p(0), stagecoach));
        assert!(!is_card_playable(&state, p(1), stagecoach));
    }

    #[test]
    fn test_bang_targets_in_range() {
        let mut state = setup();
        state.players[p(0)].has_drawn = true;
        let bang = give(&mut state, p(0), CardType::Bang);
        assert_eq!(valid_targets(&state, p(0), bang), vec![p(1), p(3)]);

        state.players[p(0)].bangs_played_this_turn = 1;
        assert!(valid_targets(&state, p(0), bang).is_empty());
        assert!(!is_card_playable(&state, p(0), bang));
    }

    #[test]
    fn test_missed_only_playable_by_calamity() {
        let mut state = setup();
        state.players[p(0)].has_drawn = true;
        let missed = give(&mut state, p(0), CardType::Missed);
        assert!(!is_card_playable(&state, p(0), missed));

        state.players[p(0)].character = Character::CalamityJanet;
        assert!(is_card_playable(&state, p(0), missed));
        assert_eq!(valid_targets(&state, p(0), missed), vec![p(1), p(3)]);
    }

    #[test]
    fn test_beer_at_full_health() {
        let mut state = setup();
        state.players[p(0)].has_drawn = true;
        let beer = give(&mut state, p(0), CardType::Beer);
        assert!(!is_card_playable(&state, p(0), beer));
        state.players[p(0)].health -= 1;
        assert!(is_card_playable(&state, p(0), beer));
    }

    #[test]
    fn test_untargeted_cards_have_no_targets() {
        let mut state = setup();
        let saloon = give(&mut state, p(0), CardType::Saloon);
        assert!(valid_targets(&state, p(0), saloon).is_empty());
    }
}
