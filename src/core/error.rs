//! Engine errors.
//!
//! `EngineError::InvalidMove` is the common path: a caller (human or AI)
//! attempted something the rules forbid, and the state is left untouched.
//! The other variants indicate a broken setup or an exhausted card supply.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{CardId, CardType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] Rejection),

    #[error("deck and discard pile are both empty")]
    EmptyResource,

    #[error("the match is already over")]
    GameOver,
}

/// Why a move was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("not available during {0}")]
    WrongPhase(&'static str),

    #[error("not available in the current stage")]
    WrongStage,

    #[error("player {0} is not the one expected to act")]
    NotYourTurn(PlayerId),

    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),

    #[error("player {0} is dead")]
    DeadPlayer(PlayerId),

    #[error("{0} is not in hand")]
    CardNotOwned(CardId),

    #[error("{0} is not a recognised card")]
    UnknownCard(CardId),

    #[error("{found:?} cannot be used here")]
    WrongCardType { found: CardType },

    #[error("a target is required")]
    MissingTarget,

    #[error("player {0} is not a legal target")]
    IllegalTarget(PlayerId),

    #[error("no more Bang! this turn")]
    BangLimitReached,

    #[error("cards already drawn this turn")]
    AlreadyDrawn,

    #[error("draw phase not completed")]
    NotDrawn,

    #[error("nothing to respond to")]
    NoPendingAction,

    #[error("a pending action must resolve first")]
    PendingActionUnresolved,

    #[error("ability not available")]
    AbilityUnavailable,

    #[error("already at full health")]
    FullHealth,

    #[error("Beer has no effect with two players left")]
    TooFewPlayers,

    #[error("{0:?} already equipped")]
    AlreadyEquipped(CardType),

    #[error("damage must be {expected}, got {got}")]
    WrongDamageAmount { expected: u8, got: u8 },

    #[error("{0} is not one of the offered choices")]
    NotAChoice(String),

    #[error("character already selected")]
    AlreadySelected,

    #[error("hand still holds more cards than health")]
    TooManyCards,

    #[error("barrel already checked against this attack")]
    BarrelAlreadyUsed,

    #[error("invalid card selection")]
    InvalidSelection,
}

pub type Result<T> = std::result::Result<T, EngineError>;
