//! # bang-rules
//!
//! A rules engine for the hidden-role card game Bang! (4-7 players).
//!
//! ## Design Principles
//!
//! 1. **Transactional Moves**: Every move either applies completely or is
//!    rejected with a [`Rejection`] and leaves the state untouched.
//!
//! 2. **One Aggregate**: A match is a single owned [`GameState`] passed by
//!    `&mut` into each move. No globals; all randomness comes from the
//!    seeded rng inside the state.
//!
//! 3. **Explicit Response Stages**: A Bang!, Duel, Indians, Gatling or
//!    General Store opens a pending action that suspends the turn and hands
//!    control to its target until it clears.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles and history are `im` vectors, so
//!   the snapshot taken before each move is cheap.
//!
//! - **Closed Ability Tables**: Character abilities dispatch through a table
//!   built by an exhaustive match over [`Character`].
//!
//! ## Modules
//!
//! - `core`: Player ids, rng, configuration, errors, state, moves
//! - `cards`: Card catalogue and registry
//! - `characters`: Character roster and passive abilities
//! - `roles`: Roles and their distribution
//! - `zones`: Deck, discard pile and draw! checks
//! - `stack`: Pending actions and response stages
//! - `triggers`: Ability dispatcher and emitted events
//! - `rules`: Distance, validation, playability, victory, `RulesEngine`
//! - `moves`: Move handlers and legal move enumeration
//! - `turn`: Turn and phase state machine
//! - `view`: Per-viewer projection
//!
//! ```
//! use bang_rules::{apply, BangRules, DrawChoice, MatchConfig, Move, RulesEngine};
//!
//! let mut state = MatchConfig::new()
//!     .seed(7)
//!     .auto_select_characters(true)
//!     .build()
//!     .unwrap();
//! let sheriff = state.sheriff;
//!
//! let draw = Move::StandardDraw {
//!     choice: DrawChoice::Default,
//! };
//! apply(&mut state, sheriff, draw).unwrap();
//! assert!(BangRules.legal_moves(&state, sheriff).contains(&Move::PassTurn));
//! ```

pub mod core;
pub mod cards;
pub mod characters;
pub mod roles;
pub mod zones;
pub mod stack;
pub mod triggers;
pub mod rules;
pub mod moves;
pub mod turn;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DrawChoice, EngineError, GameRng, GameRngState, GameState, MatchConfig, Move,
    Phase, PlayerId, PlayerMap, PlayerState, Rejection, Result, Stage, TurnStage,
};

pub use crate::cards::{Card, CardId, CardRegistry, CardType, Rank, Suit, DECK_SIZE};

pub use crate::characters::{Ability, Character};

pub use crate::roles::Role;

pub use crate::stack::{PendingAction, PendingKind, ResponseStage};

pub use crate::triggers::{CheckKind, GameEvent};

pub use crate::rules::{
    check_victory, distance, is_card_playable, is_in_range, valid_targets, BangRules, RulesEngine,
    VictoryResult, Winner,
};

pub use crate::moves::{apply, legal_moves};

pub use crate::view::{project, RedactedState, Slot};
