//! Match state: the aggregate root mutated by every move.
//!
//! ## GameState
//!
//! One owned value per match. Moves take it by `&mut`; the move layer clones
//! it before running a handler and restores the clone on rejection, which is
//! cheap because the piles and history are `im` persistent vectors.
//!
//! ## PlayerState
//!
//! Per-seat data. Equipment flags (`barrel`, `mustang`, ...) are derived from
//! `in_play` by [`PlayerState::refresh_equipment`] after any change to it.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::error::{EngineError, Rejection, Result};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardId, CardRegistry, CardType, DECK_SIZE};
use crate::characters::Character;
use crate::roles::{Role, MAX_PLAYERS, MIN_PLAYERS};
use crate::rules::victory::VictoryResult;
use crate::stack::{PendingAction, ResponseStage};
use crate::triggers::GameEvent;

/// Per-seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub health: u8,
    pub max_health: u8,
    pub hand: Vec<CardId>,
    /// Equipped cards in the order they were put into play.
    pub in_play: Vec<CardId>,
    /// Equipped weapon; `None` means the default range of 1.
    pub weapon: Option<CardId>,
    pub barrel: bool,
    pub mustang: bool,
    pub scope: bool,
    pub dynamite: bool,
    pub in_jail: bool,
    pub character: Character,
    pub character_choices: [Character; 2],
    pub has_selected_character: bool,
    pub role: Role,
    pub is_dead: bool,
    pub bangs_played_this_turn: u32,
    pub has_drawn: bool,
}

impl PlayerState {
    /// Fresh seat holding the first offered character.
    #[must_use]
    pub fn new(role: Role, character_choices: [Character; 2]) -> Self {
        let character = character_choices[0];
        let max_health = max_health_for(character, role);
        Self {
            health: max_health,
            max_health,
            hand: Vec::new(),
            in_play: Vec::new(),
            weapon: None,
            barrel: false,
            mustang: false,
            scope: false,
            dynamite: false,
            in_jail: false,
            character,
            character_choices,
            has_selected_character: false,
            role,
            is_dead: false,
            bangs_played_this_turn: 0,
            has_drawn: false,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    #[must_use]
    pub fn has_in_hand(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Remove a card from hand. Returns `false` if it was not there.
    pub fn take_from_hand(&mut self, card: CardId) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove a card from play. Returns `false` if it was not there.
    pub fn take_from_play(&mut self, card: CardId) -> bool {
        match self.in_play.iter().position(|&c| c == card) {
            Some(index) => {
                self.in_play.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of cards the player holds, hand and play combined.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.in_play.len()
    }

    /// Recompute `weapon` and the equipment flags from `in_play`.
    pub fn refresh_equipment(&mut self, registry: &CardRegistry) {
        let types: Vec<(CardId, CardType)> = self
            .in_play
            .iter()
            .filter_map(|&id| registry.card_type(id).map(|t| (id, t)))
            .collect();
        let has = |wanted: CardType| types.iter().any(|&(_, t)| t == wanted);

        self.weapon = types
            .iter()
            .rev()
            .find(|(_, t)| t.is_weapon())
            .map(|&(id, _)| id);
        self.barrel = has(CardType::Barrel);
        self.mustang = has(CardType::Mustang);
        self.scope = has(CardType::Scope);
        self.dynamite = has(CardType::Dynamite);
        self.in_jail = has(CardType::Jail);
    }

    /// Heal up to `amount`, never above `max_health`. Returns the gain.
    pub fn heal(&mut self, amount: u8) -> u8 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }
}

/// Starting health: character base, plus one for the Sheriff.
#[must_use]
pub fn max_health_for(character: Character, role: Role) -> u8 {
    character.base_health() + u8::from(role == Role::Sheriff)
}

/// Top-level phase of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    CharacterSelection,
    Play,
    GameOver(VictoryResult),
}

/// Sub-stage of the current player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStage {
    /// Draw (until `has_drawn`) then play cards.
    #[default]
    Main,
    /// Forced discard down to health.
    Discard,
}

/// What kind of move the engine is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    CharacterSelection,
    Draw,
    Action,
    Discard,
    Respond(ResponseStage),
    GameOver,
}

fn standard_card_map() -> Arc<CardRegistry> {
    Arc::new(CardRegistry::standard())
}

/// Complete match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerMap<PlayerState>,
    /// Seating order starting at the Sheriff.
    pub turn_order: Vec<PlayerId>,
    pub sheriff: PlayerId,
    /// Draw pile; the top card is the back of the vector.
    pub deck: Vector<CardId>,
    /// Discard pile; the top card is the back of the vector.
    pub discard_pile: Vector<CardId>,
    #[serde(skip, default = "standard_card_map")]
    pub card_map: Arc<CardRegistry>,
    pub pending_action: Option<PendingAction>,
    /// Once-per-turn ability bookkeeping, cleared at every turn start.
    pub character_abilities_used: FxHashMap<PlayerId, u8>,
    pub phase: Phase,
    /// Player whose turn it is.
    pub current: PlayerId,
    pub turn_stage: TurnStage,
    pub turn_number: u32,
    pub action_sequence: u32,
    pub rng: GameRng,
    pub history: Vector<ActionRecord>,
    /// Events raised by the move in progress; drained by the move layer.
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Bare state over prepared seats. The deck holds every card not dealt.
    ///
    /// `MatchConfig::build` is the usual entry point; this constructor only
    /// wires the parts together.
    #[must_use]
    pub fn new(
        players: PlayerMap<PlayerState>,
        deck: Vector<CardId>,
        card_map: Arc<CardRegistry>,
        rng: GameRng,
    ) -> Self {
        let sheriff = players
            .iter()
            .find(|(_, p)| p.role == Role::Sheriff)
            .map_or(PlayerId::new(0), |(id, _)| id);

        let mut turn_order: Vec<PlayerId> = players.player_ids().collect();
        if let Some(pos) = turn_order.iter().position(|&p| p == sheriff) {
            turn_order.rotate_left(pos);
        }

        Self {
            players,
            turn_order,
            sheriff,
            deck,
            discard_pile: Vector::new(),
            card_map,
            pending_action: None,
            character_abilities_used: FxHashMap::default(),
            phase: Phase::CharacterSelection,
            current: sheriff,
            turn_stage: TurnStage::Main,
            turn_number: 0,
            action_sequence: 0,
            rng,
            history: Vector::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Look a seat up, rejecting unknown ids.
    pub fn player(&self, player: PlayerId) -> std::result::Result<&PlayerState, Rejection> {
        self.players
            .get(player)
            .ok_or(Rejection::UnknownPlayer(player))
    }

    #[must_use]
    pub fn is_alive(&self, player: PlayerId) -> bool {
        self.players.get(player).is_some_and(PlayerState::is_alive)
    }

    /// Living players in turn order, starting at the Sheriff's seat.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.turn_order
            .iter()
            .copied()
            .filter(|&p| self.is_alive(p))
            .collect()
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.turn_order.iter().filter(|&&p| self.is_alive(p)).count()
    }

    /// Living players clockwise after `player`, excluding `player` itself.
    #[must_use]
    pub fn alive_after(&self, player: PlayerId) -> Vec<PlayerId> {
        let n = self.turn_order.len();
        let start = self
            .turn_order
            .iter()
            .position(|&p| p == player)
            .unwrap_or(0);
        (1..n)
            .map(|offset| self.turn_order[(start + offset) % n])
            .filter(|&p| self.is_alive(p))
            .collect()
    }

    /// Next living player clockwise after `player`.
    #[must_use]
    pub fn next_alive_after(&self, player: PlayerId) -> Option<PlayerId> {
        self.alive_after(player).first().copied()
    }

    /// Catalogue entry of a card.
    pub fn card(&self, card: CardId) -> std::result::Result<&Card, Rejection> {
        self.card_map.get(card).ok_or(Rejection::UnknownCard(card))
    }

    #[must_use]
    pub fn card_type(&self, card: CardId) -> Option<CardType> {
        self.card_map.card_type(card)
    }

    /// Every card the match can currently account for, General Store pool
    /// included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let held: usize = self.players.values().map(PlayerState::card_count).sum();
        let pooled = self
            .pending_action
            .as_ref()
            .map_or(0, |p| p.revealed_cards.len());
        self.deck.len() + self.discard_pile.len() + held + pooled
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The current stage, as seen by callers deciding which move to send.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match &self.phase {
            Phase::CharacterSelection => Stage::CharacterSelection,
            Phase::GameOver(_) => Stage::GameOver,
            Phase::Play => {
                if let Some(pending) = &self.pending_action {
                    Stage::Respond(pending.response_stage())
                } else if self.turn_stage == TurnStage::Discard {
                    Stage::Discard
                } else if self.players[self.current].has_drawn {
                    Stage::Action
                } else {
                    Stage::Draw
                }
            }
        }
    }

    /// The only player allowed to move right now.
    #[must_use]
    pub fn expected_actor(&self) -> Option<PlayerId> {
        match &self.phase {
            Phase::CharacterSelection => self
                .players
                .iter()
                .find(|(_, p)| !p.has_selected_character)
                .map(|(id, _)| id),
            Phase::Play => Some(
                self.pending_action
                    .as_ref()
                    .map_or(self.current, |p| p.target),
            ),
            Phase::GameOver(_) => None,
        }
    }

    /// Record an event for the move in progress.
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count one use of a character ability this turn.
    pub(crate) fn note_ability_use(&mut self, player: PlayerId) {
        *self.character_abilities_used.entry(player).or_insert(0) += 1;
    }

    /// Runtime integrity check of the whole match.
    pub fn validate(&self) -> Result<()> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(illegal(format!(
                "invalid player count: {count} (must be {MIN_PLAYERS}-{MAX_PLAYERS})"
            )));
        }
        if self.turn_order.len() != count {
            return Err(illegal(format!(
                "turn order length {} does not match player count {count}",
                self.turn_order.len()
            )));
        }
        let sheriff = self
            .players
            .get(self.sheriff)
            .ok_or_else(|| illegal(format!("sheriff seat {} not found", self.sheriff)))?;
        if sheriff.role != Role::Sheriff {
            return Err(illegal(format!("seat {} is not the sheriff", self.sheriff)));
        }
        let sheriffs = self
            .players
            .values()
            .filter(|p| p.role == Role::Sheriff)
            .count();
        if sheriffs != 1 {
            return Err(illegal(format!("expected one sheriff, found {sheriffs}")));
        }
        for (id, p) in self.players.iter() {
            if p.health > p.max_health {
                return Err(illegal(format!(
                    "player {id} health {} exceeds max {}",
                    p.health, p.max_health
                )));
            }
            if p.is_dead && p.card_count() > 0 {
                return Err(illegal(format!("dead player {id} still holds cards")));
            }
        }
        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(illegal(format!(
                "card conservation broken: {total} cards accounted for, expected {DECK_SIZE}"
            )));
        }
        Ok(())
    }
}

fn illegal(message: String) -> EngineError {
    EngineError::IllegalState(message)
}
