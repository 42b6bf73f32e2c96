//! Moves and the action log.
//!
//! A `Move` is a named transaction with its arguments. The move layer
//! validates it against the current stage and pending action, applies it,
//! and appends an `ActionRecord` to the match history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;
use crate::characters::Character;

/// How the draw phase is performed.
///
/// Every character may take the ordinary draw. The other choices are only
/// accepted for the character whose ability offers them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawChoice {
    /// Two cards from the deck (Black Jack always reveals the second).
    #[default]
    Default,
    /// Jesse Jones: first card from this player's hand.
    FromPlayer(PlayerId),
    /// Pedro Ramirez: first card from the discard pile.
    FromDiscard,
    /// Kit Carlson: of the top three cards, put this one back.
    ReturnCard(CardId),
}

/// Every move a player can attempt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "move", rename_all = "camelCase")]
pub enum Move {
    SelectCharacter { character: Character },
    StandardDraw { choice: DrawChoice },
    PlayBang { card: CardId, target: PlayerId },
    PlayMissed { card: CardId },
    UseBarrel,
    TakeDamage { amount: u8 },
    PlayBeer { card: CardId },
    PlaySaloon { card: CardId },
    PlayStagecoach { card: CardId },
    PlayWellsFargo { card: CardId },
    PlayPanic {
        card: CardId,
        target: PlayerId,
        target_card: Option<CardId>,
    },
    PlayCatBalou {
        card: CardId,
        target: PlayerId,
        target_card: Option<CardId>,
    },
    PlayGatling { card: CardId },
    PlayIndians { card: CardId },
    /// `None` means no Bang! offered: take the damage.
    RespondToIndians { card: Option<CardId> },
    PlayDuel { card: CardId, target: PlayerId },
    /// `None` means no Bang! offered: lose the duel.
    RespondToDuel { card: Option<CardId> },
    PlayGeneralStore { card: CardId },
    RespondToGeneralStore { card: CardId },
    PlayDynamite { card: CardId },
    PlayJail { card: CardId, target: PlayerId },
    EquipCard { card: CardId },
    SidKetchumHeal { cards: [CardId; 2] },
    PassTurn,
    DiscardCards { cards: Vec<CardId> },
}

impl Move {
    /// Stable move name, as used by external callers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Move::SelectCharacter { .. } => "selectCharacter",
            Move::StandardDraw { .. } => "standardDraw",
            Move::PlayBang { .. } => "playBang",
            Move::PlayMissed { .. } => "playMissed",
            Move::UseBarrel => "useBarrel",
            Move::TakeDamage { .. } => "takeDamage",
            Move::PlayBeer { .. } => "playBeer",
            Move::PlaySaloon { .. } => "playSaloon",
            Move::PlayStagecoach { .. } => "playStagecoach",
            Move::PlayWellsFargo { .. } => "playWellsFargo",
            Move::PlayPanic { .. } => "playPanic",
            Move::PlayCatBalou { .. } => "playCatBalou",
            Move::PlayGatling { .. } => "playGatling",
            Move::PlayIndians { .. } => "playIndians",
            Move::RespondToIndians { .. } => "respondToIndians",
            Move::PlayDuel { .. } => "playDuel",
            Move::RespondToDuel { .. } => "respondToDuel",
            Move::PlayGeneralStore { .. } => "playGeneralStore",
            Move::RespondToGeneralStore { .. } => "respondToGeneralStore",
            Move::PlayDynamite { .. } => "playDynamite",
            Move::PlayJail { .. } => "playJail",
            Move::EquipCard { .. } => "equipCard",
            Move::SidKetchumHeal { .. } => "sidKetchumHeal",
            Move::PassTurn => "passTurn",
            Move::DiscardCards { .. } => "discardCards",
        }
    }

    /// Whether the move answers a pending action rather than acting on
    /// one's own turn.
    #[must_use]
    pub const fn is_response(&self) -> bool {
        matches!(
            self,
            Move::PlayMissed { .. }
                | Move::UseBarrel
                | Move::TakeDamage { .. }
                | Move::RespondToIndians { .. }
                | Move::RespondToDuel { .. }
                | Move::RespondToGeneralStore { .. }
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move made.
    pub action: Move,

    /// Turn number when the move was made.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Move, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_names() {
        assert_eq!(Move::PassTurn.name(), "passTurn");
        let bang = Move::PlayBang {
            card: CardId::new(1),
            target: PlayerId::new(1),
        };
        assert_eq!(bang.to_string(), "playBang");
        assert!(!bang.is_response());
        assert!(Move::UseBarrel.is_response());
    }

    #[test]
    fn test_move_json_shape() {
        let mv = Move::PlayBang {
            card: CardId::new(3),
            target: PlayerId::new(2),
        };
        let json = serde_json::to_value(&mv).unwrap();
        assert_eq!(json["move"], "playBang");
        assert_eq!(json["card"], 3);
        assert_eq!(json["target"], 2);

        let back: Move = serde_json::from_value(json).unwrap();
        assert_eq!(back, mv);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), Move::PassTurn, 5, 2);
        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.turn, 5);
        assert_eq!(record.sequence, 2);
    }
}
