//! Events emitted by accepted moves.
//!
//! Every accepted move returns the events it caused, in order. Presentation
//! layers use them for notifications; tests use them to check what happened
//! without diffing whole states.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::characters::Character;
use crate::core::PlayerId;
use crate::roles::Role;
use crate::rules::victory::VictoryResult;

/// Which equipment a draw! check resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Barrel,
    Dynamite,
    Jail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GameEvent {
    CharacterSelected {
        player: PlayerId,
        character: Character,
    },
    PlayStarted {
        sheriff: PlayerId,
    },
    TurnStarted {
        player: PlayerId,
        turn: u32,
    },
    TurnSkipped {
        player: PlayerId,
    },
    DeckReshuffled {
        cards: usize,
    },
    CardsDrawn {
        player: PlayerId,
        count: usize,
    },
    /// Black Jack shows his second card.
    CardRevealed {
        player: PlayerId,
        card: CardId,
    },
    CardPlayed {
        player: PlayerId,
        card: CardId,
        target: Option<PlayerId>,
    },
    CardDiscarded {
        player: PlayerId,
        card: CardId,
    },
    CardTaken {
        from: PlayerId,
        to: PlayerId,
        card: CardId,
    },
    Equipped {
        player: PlayerId,
        card: CardId,
    },
    DrawCheck {
        player: PlayerId,
        check: CheckKind,
        card: CardId,
        success: bool,
    },
    /// An attack on `player` was cancelled.
    Dodged {
        player: PlayerId,
    },
    Damaged {
        player: PlayerId,
        amount: u8,
        source: Option<PlayerId>,
        health: u8,
    },
    Healed {
        player: PlayerId,
        amount: u8,
    },
    PlayerDied {
        player: PlayerId,
        role: Role,
        killer: Option<PlayerId>,
    },
    DynamitePassed {
        from: PlayerId,
        to: PlayerId,
    },
    DiscardStageStarted {
        player: PlayerId,
    },
    GameOver {
        result: VictoryResult,
    },
}

impl GameEvent {
    /// Player the event is mainly about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CharacterSelected { player, .. }
            | GameEvent::TurnStarted { player, .. }
            | GameEvent::TurnSkipped { player }
            | GameEvent::CardsDrawn { player, .. }
            | GameEvent::CardRevealed { player, .. }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::CardDiscarded { player, .. }
            | GameEvent::Equipped { player, .. }
            | GameEvent::DrawCheck { player, .. }
            | GameEvent::Dodged { player }
            | GameEvent::Damaged { player, .. }
            | GameEvent::Healed { player, .. }
            | GameEvent::PlayerDied { player, .. }
            | GameEvent::DiscardStageStarted { player } => Some(*player),
            GameEvent::PlayStarted { sheriff } => Some(*sheriff),
            GameEvent::CardTaken { to, .. } => Some(*to),
            GameEvent::DynamitePassed { from, .. } => Some(*from),
            GameEvent::DeckReshuffled { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}
