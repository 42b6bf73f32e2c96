//! Per-viewer projection of the match state.
//!
//! Hands belong to their owners, roles stay hidden until death (the
//! Sheriff's is public), and the deck is only a count. A spectator (no
//! viewer) sees every hand and hidden role as a placeholder.
//!
//! ```
//! use bang_rules::core::{MatchConfig, PlayerId};
//! use bang_rules::view::{project, Slot};
//!
//! let state = MatchConfig::new().seed(1).build().unwrap();
//! let view = project(&state, Some(PlayerId::new(2)));
//!
//! assert!(view.players[2].hand.iter().all(|slot| slot.is_known()));
//! assert!(view.players[1].hand.iter().all(|slot| !slot.is_known()));
//! assert!(view.players[0].role.is_known());
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::characters::{Ability, Character};
use crate::core::{GameState, Phase, PlayerId, PlayerState, Stage};
use crate::roles::Role;
use crate::stack::PendingAction;
use crate::zones;

/// A value the viewer may or may not see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Slot<T> {
    Known(T),
    Hidden,
}

impl<T> Slot<T> {
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Slot::Known(_))
    }

    #[must_use]
    pub fn known(self) -> Option<T> {
        match self {
            Slot::Known(value) => Some(value),
            Slot::Hidden => None,
        }
    }

    fn reveal_if(visible: bool, value: T) -> Self {
        if visible {
            Slot::Known(value)
        } else {
            Slot::Hidden
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub health: u8,
    pub max_health: u8,
    pub hand: Vec<Slot<CardId>>,
    pub in_play: Vec<CardId>,
    pub weapon: Option<CardId>,
    pub character: Character,
    /// Only the viewer's own offer, and only while selecting.
    pub character_choices: Option<[Character; 2]>,
    pub role: Slot<Role>,
    pub is_dead: bool,
    pub has_drawn: bool,
    pub bangs_played_this_turn: u32,
}

/// What one viewer may know about the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedState {
    pub viewer: Option<PlayerId>,
    pub players: Vec<PlayerView>,
    pub turn_order: Vec<PlayerId>,
    pub sheriff: PlayerId,
    pub deck_count: usize,
    pub discard_pile: Vec<CardId>,
    /// Pending actions are public; a General Store pool is face up.
    pub pending_action: Option<PendingAction>,
    pub phase: Phase,
    pub stage: Stage,
    pub current: PlayerId,
    pub turn_number: u32,
    /// Top three cards for a Kit Carlson viewer about to draw, top first.
    pub draw_preview: Vec<CardId>,
}

/// Project `state` for `viewer`; `None` is the spectator view.
#[must_use]
pub fn project(state: &GameState, viewer: Option<PlayerId>) -> RedactedState {
    let players = state
        .players
        .iter()
        .map(|(id, p)| player_view(state, id, p, viewer))
        .collect();

    RedactedState {
        viewer,
        players,
        turn_order: state.turn_order.clone(),
        sheriff: state.sheriff,
        deck_count: state.deck.len(),
        discard_pile: state.discard_pile.iter().copied().collect(),
        pending_action: state.pending_action.clone(),
        phase: state.phase.clone(),
        stage: state.stage(),
        current: state.current,
        turn_number: state.turn_number,
        draw_preview: draw_preview(state, viewer),
    }
}

fn player_view(
    state: &GameState,
    id: PlayerId,
    p: &PlayerState,
    viewer: Option<PlayerId>,
) -> PlayerView {
    let own = viewer == Some(id);
    let role_public = own || p.is_dead || p.role.is_public();
    let selecting = state.phase == Phase::CharacterSelection;

    PlayerView {
        id,
        health: p.health,
        max_health: p.max_health,
        hand: p.hand.iter().map(|&card| Slot::reveal_if(own, card)).collect(),
        in_play: p.in_play.clone(),
        weapon: p.weapon,
        character: p.character,
        character_choices: (own && selecting).then_some(p.character_choices),
        role: Slot::reveal_if(role_public, p.role),
        is_dead: p.is_dead,
        has_drawn: p.has_drawn,
        bangs_played_this_turn: p.bangs_played_this_turn,
    }
}

fn draw_preview(state: &GameState, viewer: Option<PlayerId>) -> Vec<CardId> {
    let Some(viewer) = viewer else {
        return Vec::new();
    };
    let kit_to_draw = state.current == viewer
        && state.stage() == Stage::Draw
        && state
            .players
            .get(viewer)
            .is_some_and(|p| p.character.ability() == Ability::LookTopThree);
    if kit_to_draw {
        zones::peek(state, 3)
    } else {
        Vec::new()
    }
}
