//! Damage and elimination.

use tracing::{debug, info};

use crate::core::{GameState, PlayerId, Result};
use crate::roles::Role;
use crate::triggers::{self, AbilityTrigger, GameEvent};
use crate::zones;

/// Deal `amount` damage to `player`. `source` is the attacker, if any
/// (Dynamite has none).
///
/// Reaching zero health runs death handling; surviving damage fires the
/// player's `OnDamage` ability.
pub(crate) fn apply_damage(
    state: &mut GameState,
    player: PlayerId,
    amount: u8,
    source: Option<PlayerId>,
) -> Result<()> {
    let health = {
        let p = &mut state.players[player];
        p.health = p.health.saturating_sub(amount);
        p.health
    };
    debug!(%player, amount, health, source = ?source, "damage taken");
    state.emit(GameEvent::Damaged {
        player,
        amount,
        source,
        health,
    });

    if health == 0 {
        return handle_death(state, player, source);
    }
    triggers::trigger(
        state,
        player,
        AbilityTrigger::OnDamage {
            amount,
            attacker: source,
        },
    )?;
    Ok(())
}

/// Eliminate `player`.
///
/// Living players' `OnDeath` abilities see the dead player's cards first;
/// whatever is left goes to the discard pile. A living killer then takes the
/// role consequences: three cards for an Outlaw, and a Sheriff who kills a
/// Deputy discards their hand.
pub(crate) fn handle_death(
    state: &mut GameState,
    player: PlayerId,
    killer: Option<PlayerId>,
) -> Result<()> {
    let role = state.players[player].role;
    state.players[player].is_dead = true;
    info!(%player, ?role, killer = ?killer, "player eliminated");
    state.emit(GameEvent::PlayerDied {
        player,
        role,
        killer,
    });

    triggers::fire_death(state, player)?;

    let remains = {
        let p = &mut state.players[player];
        let mut cards = std::mem::take(&mut p.hand);
        cards.append(&mut p.in_play);
        cards
    };
    state.discard_pile.extend(remains);
    let registry = state.card_map.clone();
    state.players[player].refresh_equipment(&registry);

    let Some(killer) = killer.filter(|&k| k != player && state.is_alive(k)) else {
        return Ok(());
    };
    if role == Role::Outlaw {
        zones::draw_cards(state, killer, 3)?;
    }
    if role == Role::Deputy && state.players[killer].role == Role::Sheriff {
        debug!(sheriff = %killer, "sheriff killed a deputy");
        let hand = std::mem::take(&mut state.players[killer].hand);
        for card in hand {
            zones::discard(state, card);
            state.emit(GameEvent::CardDiscarded {
                player: killer,
                card,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;
    use crate::characters::Character;
    use crate::core::MatchConfig;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn setup(players: usize) -> GameState {
        let mut state = MatchConfig::new()
            .player_count(players)
            .seed(21)
            .auto_select_characters(true)
            .build()
            .unwrap();
        for (_, seat) in state.players.iter_mut() {
            seat.character = Character::PaulRegret;
        }
        state
    }

    fn seat_of(state: &GameState, role: Role) -> PlayerId {
        state
            .players
            .iter()
            .find(|(_, p)| p.role == role)
            .map(|(id, _)| id)
            .unwrap()
    }

    #[test]
    fn test_damage_without_death() {
        let mut state = setup(4);
        state.players[p(1)].character = Character::BartCassidy;
        let before = state.players[p(1)].hand.len();

        apply_damage(&mut state, p(1), 1, Some(p(0))).unwrap();
        assert_eq!(state.players[p(1)].health, state.players[p(1)].max_health - 1);
        assert_eq!(state.players[p(1)].hand.len(), before + 1);
        assert!(!state.players[p(1)].is_dead);
    }

    #[test]
    fn test_death_discards_everything() {
        let mut state = setup(4);
        state.players[p(2)].health = 1;
        apply_damage(&mut state, p(2), 3, None).unwrap();

        let dead = &state.players[p(2)];
        assert!(dead.is_dead);
        assert_eq!(dead.health, 0);
        assert_eq!(dead.card_count(), 0);
        assert_eq!(state.total_cards(), DECK_SIZE);
    }

    #[test]
    fn test_outlaw_bounty() {
        let mut state = setup(4);
        let outlaw = seat_of(&state, Role::Outlaw);
        let killer = state.sheriff;
        let before = state.players[killer].hand.len();

        state.players[outlaw].health = 1;
        apply_damage(&mut state, outlaw, 1, Some(killer)).unwrap();
        assert_eq!(state.players[killer].hand.len(), before + 3);
    }

    #[test]
    fn test_sheriff_kills_deputy() {
        let mut state = setup(5);
        let deputy = seat_of(&state, Role::Deputy);
        let sheriff = state.sheriff;

        state.players[deputy].health = 1;
        apply_damage(&mut state, deputy, 1, Some(sheriff)).unwrap();
        assert!(state.players[sheriff].hand.is_empty());
        assert_eq!(state.total_cards(), DECK_SIZE);
    }

    #[test]
    fn test_vulture_sam_takes_estate() {
        let mut state = setup(4);
        state.players[p(3)].character = Character::VultureSam;
        let estate = state.players[p(1)].card_count();
        let before = state.players[p(3)].hand.len();

        handle_death(&mut state, p(1), None).unwrap();
        assert_eq!(state.players[p(3)].hand.len(), before + estate);
        assert_eq!(state.total_cards(), DECK_SIZE);
    }
}
